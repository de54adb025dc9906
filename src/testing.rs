//! Scripted generator used by the unit tests.

use crate::{Artifact, CandidateGenerator, CandidateParse, Candidates, GenerateOptions, ProductionStep, Scorer};
use chrono::{NaiveDate, NaiveDateTime};
use std::cell::RefCell;
use std::collections::HashMap;

/// Replays a fixed candidate list per sentence and records every call.
#[derive(Default)]
pub(crate) struct ScriptedGenerator {
    scripts: HashMap<String, Vec<Option<CandidateParse>>>,
    pub calls: RefCell<Vec<(String, NaiveDateTime, GenerateOptions)>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, text: &str, candidates: Vec<Option<CandidateParse>>) -> Self {
        self.scripts.insert(text.to_string(), candidates);
        self
    }
}

impl CandidateGenerator for ScriptedGenerator {
    fn generate<'a>(
        &'a self,
        text: &'a str,
        reference_time: NaiveDateTime,
        options: GenerateOptions,
        _scorer: &'a dyn Scorer,
    ) -> Candidates<'a> {
        self.calls.borrow_mut().push((text.to_string(), reference_time, options));
        let candidates = self.scripts.get(text).cloned().unwrap_or_default();
        Box::new(candidates.into_iter())
    }
}

pub(crate) fn candidate(steps: &[&str], resolution: &str, score: f64) -> CandidateParse {
    let production = steps
        .iter()
        .map(|s| match s.parse::<usize>() {
            Ok(id) => ProductionStep::Regex(id),
            Err(_) => ProductionStep::Rule(s.to_string()),
        })
        .collect();
    let resolution: Artifact = resolution.parse().unwrap();
    CandidateParse { production, resolution, score }
}

pub(crate) fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

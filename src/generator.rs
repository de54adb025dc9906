//! Boundary to the candidate-parse generator and its scoring strategy.
//!
//! The generator itself (rules, search) lives outside this crate. Everything
//! here describes what the corpus harness expects from it:
//!
//! ```text
//! (text, reference_time, options, scorer) ──▶ generate() ──▶ lazy Candidates
//!                                                             └─ Option<CandidateParse>, ordered
//! ```

use crate::{CandidateParse, ProductionStep};
use chrono::NaiveDateTime;
use std::time::Duration;

/// Lazy, ordered candidate stream. `None` items are tolerated contract anomalies.
pub type Candidates<'a> = Box<dyn Iterator<Item = Option<CandidateParse>> + 'a>;

/// Scores a partial or complete derivation to rank candidates.
pub trait Scorer {
    fn score(&self, text: &str, reference_time: NaiveDateTime, production: &[ProductionStep]) -> f64;
}

/// Constant scorer. Gives every derivation the same score so validation runs
/// are not biased by a trained model.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyScorer;

impl Scorer for DummyScorer {
    fn score(&self, _text: &str, _reference_time: NaiveDateTime, _production: &[ProductionStep]) -> f64 {
        0.0
    }
}

/// Produces candidate parses for a sentence.
pub trait CandidateGenerator {
    fn generate<'a>(
        &'a self,
        text: &'a str,
        reference_time: NaiveDateTime,
        options: GenerateOptions,
        scorer: &'a dyn Scorer,
    ) -> Candidates<'a>;
}

/// Budgets and tuning passed through to the generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    /// Minimum share of the input a match must cover, relative to the longest match.
    pub relative_match_len: f64,
    /// Wall-clock budget for the search. `None` means unbounded.
    pub timeout: Option<Duration>,
    /// Depth budget for the search stack. `None` means unbounded.
    pub max_stack_depth: Option<usize>,
    /// Whether the reference time itself may be inferred as a latent result.
    pub latent_time: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { relative_match_len: 1.0, timeout: None, max_stack_depth: None, latent_time: true }
    }
}

impl GenerateOptions {
    /// Unbounded search with the reference time taken as exact.
    pub fn exhaustive() -> Self {
        Self { latent_time: false, ..Self::default() }
    }

    /// Map the `0 == unbounded` convention onto explicit budgets.
    pub fn budgeted(timeout_secs: f64, max_stack_depth: usize) -> Self {
        let timeout = Duration::try_from_secs_f64(timeout_secs).ok().filter(|t| !t.is_zero());
        let max_stack_depth = (max_stack_depth > 0).then_some(max_stack_depth);
        Self { timeout, max_stack_depth, ..Self::default() }
    }

    pub fn with_relative_match_len(mut self, relative_match_len: f64) -> Self {
        self.relative_match_len = relative_match_len;
        self
    }

    pub fn with_max_stack_depth(mut self, max_stack_depth: Option<usize>) -> Self {
        self.max_stack_depth = max_stack_depth;
        self
    }
}

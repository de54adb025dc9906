#[macro_use]
mod macros;
mod artifact;
mod corpus;
mod error;
mod generator;

pub use artifact::{Artifact, Duration, DurationUnit, Interval, Time};
pub use corpus::{
    CorpusReport, CorpusRun, CorpusStats, CorpusTestCase, Progress, TimeParseEntry, load_test_corpus,
    load_test_corpus_from_reader, load_timeparse_corpus, load_timeparse_corpus_from_reader, make_partial_rule_dataset,
    parse_nb_string, parse_test_corpus, parse_timeparse_corpus, prefix_rows, run_corpus, run_corpus_one_test,
    run_corpus_with_depth, split_xy,
};
pub use error::CorpusError;
pub use generator::{CandidateGenerator, Candidates, DummyScorer, GenerateOptions, Scorer};

use serde::{Deserialize, Serialize};
use std::fmt;

// --- Derivations -------------------------------------------------------------

/// One step of a derivation.
///
/// Derivations start with the raw regular-expression matches and continue
/// with the transformation rules applied on top of them:
///
/// ```text
/// [Regex(12), Regex(40), Rule("ruleDateTOD"), Rule("ruleTomorrow")]
///  └── matched tokens ──┘ └────────── productions ───────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductionStep {
    /// Id of a matched regular expression.
    Regex(usize),
    /// Name of an applied rule.
    Rule(String),
}

impl fmt::Display for ProductionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductionStep::Regex(id) => write!(f, "{}", id),
            ProductionStep::Rule(name) => f.write_str(name),
        }
    }
}

/// One interpretation of a sentence, as yielded by a [`CandidateGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateParse {
    /// Derivation that produced `resolution`. Never empty.
    pub production: Vec<ProductionStep>,
    pub resolution: Artifact,
    pub score: f64,
}

impl CandidateParse {
    /// Production steps rendered as classifier features.
    pub fn features(&self) -> Vec<String> {
        self.production.iter().map(ToString::to_string).collect()
    }
}

// --- Dataset rows ------------------------------------------------------------

/// A derivation prefix labeled with the correctness of the full parse it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRow {
    pub features: Vec<String>,
    pub label: bool,
}

#[cfg(test)]
pub(crate) mod testing;

//! Corpus harness: dataset construction and regression validation.
//!
//! Two independent pipelines share the same prefix-labeling step:
//!
//! ```text
//! corpus.json ── load_timeparse_corpus (loader.rs)
//!                        │  Vec<TimeParseEntry>
//!                        v
//!          make_partial_rule_dataset (dataset.rs) ──▶ lazy LabeledRows
//!                        │
//!                 CandidateGenerator::generate (budgeted, caller's scorer)
//!
//! tests.json ── load_test_corpus (loader.rs)
//!                        │  Vec<CorpusTestCase>
//!                        v
//!               run_corpus (validate.rs) ──▶ CorpusReport { rows, stats }
//!                        │                   or CorpusError::Coverage
//!                 CandidateGenerator::generate (exhaustive, DummyScorer)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `loader.rs`: JSON corpus formats and gold-value materialization.
//! - `progress.rs`: optional progress decoration around the entry sequence.
//! - `dataset.rs`: prefix-labeled rows from candidate streams.
//! - `stats.rs`: counters accumulated across one validation run.
//! - `validate.rs`: per-case and whole-corpus coverage checks.

#[path = "corpus/dataset.rs"]
mod dataset;
#[path = "corpus/loader.rs"]
mod loader;
#[path = "corpus/progress.rs"]
mod progress;
#[path = "corpus/stats.rs"]
mod stats;
#[path = "corpus/validate.rs"]
mod validate;


pub use dataset::{make_partial_rule_dataset, prefix_rows, split_xy};
pub use loader::{
    CorpusTestCase, TimeParseEntry, load_test_corpus, load_test_corpus_from_reader, load_timeparse_corpus,
    load_timeparse_corpus_from_reader, parse_nb_string, parse_test_corpus, parse_timeparse_corpus,
};
pub use progress::Progress;
pub use stats::CorpusStats;
pub use validate::{CorpusReport, CorpusRun, run_corpus, run_corpus_one_test, run_corpus_with_depth};

//! Corpus regression checks.
//!
//! Every sentence of every test case is run through the generator with no
//! budgets and a constant scorer. A target passes when each of its sentences
//! produced the target at least once among *all* candidates:
//!
//! ```text
//! per sentence:  NO_MATCH_YET ──(first matching candidate)──▶ MATCH_FOUND
//! per target:    AND over its sentences
//! per run:       AND over targets, reported once after the whole corpus ran
//! ```
//!
//! While checking, the candidates are also turned into prefix-labeled rows
//! (see `dataset.rs`), so a run doubles as a dataset build without budgets.

use super::dataset::prefix_rows;
use super::loader::{CorpusTestCase, TEST_CASE_TIME_FORMAT, parse_reference_time};
use super::progress::Progress;
use super::stats::CorpusStats;
use crate::{CandidateGenerator, CorpusError, DummyScorer, GenerateOptions, LabeledRow};

/// Mutable state threaded through one validation run. Returned as the
/// [`CorpusReport`] once the run passes.
#[derive(Debug, Default, Clone)]
pub struct CorpusRun {
    pub rows: Vec<LabeledRow>,
    pub stats: CorpusStats,
}

/// Outcome of a successful corpus run.
pub type CorpusReport = CorpusRun;

impl CorpusRun {
    pub fn split_xy(self) -> (Vec<Vec<String>>, Vec<bool>) {
        super::dataset::split_xy(self.rows)
    }
}

/// Run a single test case, appending rows and counters to `run`.
///
/// Returns whether every sentence produced the target. Failures are logged,
/// not raised; only an unparsable reference time is an error here.
pub fn run_corpus_one_test<G>(
    generator: &G,
    case: &CorpusTestCase,
    options: GenerateOptions,
    run: &mut CorpusRun,
) -> Result<bool, CorpusError>
where
    G: CandidateGenerator + ?Sized,
{
    let ts = parse_reference_time(&case.reference_time, TEST_CASE_TIME_FORMAT)?;
    let scorer = DummyScorer;
    let mut all_tests_pass = true;

    for sentence in &case.sentences {
        let mut one_prod_passes = false;
        let mut first_prod = true;
        let mut best: Option<(f64, bool)> = None;

        for candidate in generator.generate(sentence, ts, options, &scorer) {
            let Some(candidate) = candidate else {
                tracing::error!(sentence = %sentence, "generator yielded an empty candidate");
                continue;
            };

            let y = candidate.resolution.nb_str() == case.target;
            run.rows.extend(prefix_rows(&candidate, y));

            one_prod_passes |= y;
            if y {
                run.stats.pos_parses += 1;
                if first_prod {
                    run.stats.pos_first_parses += 1;
                }
            } else {
                run.stats.neg_parses += 1;
            }
            first_prod = false;

            // Earliest candidate wins ties; NaN never wins.
            let better = match best {
                None => true,
                Some((score, _)) => candidate.score > score || (score.is_nan() && !candidate.score.is_nan()),
            };
            if better {
                best = Some((candidate.score, y));
            }
        }

        if !one_prod_passes {
            tracing::warn!("failure: target \"{}\" never produced in \"{}\"", case.target, sentence);
        }
        if let Some((_, true)) = best {
            run.stats.pos_best_scored += 1;
        }
        run.stats.total_tests += 1;
        all_tests_pass &= one_prod_passes;
    }

    run.stats.targets += 1;
    if !all_tests_pass {
        tracing::warn!("failure: \"{}\" not always produced", case.target);
        run.stats.failed_targets += 1;
    }
    Ok(all_tests_pass)
}

/// Run the whole corpus exhaustively and fail if any target was not reproduced.
///
/// All test cases run before the outcome is decided, so one run reports every
/// failing target.
pub fn run_corpus<G>(generator: &G, corpus: &[CorpusTestCase]) -> Result<CorpusReport, CorpusError>
where
    G: CandidateGenerator + ?Sized,
{
    run_corpus_with_depth(generator, corpus, None)
}

/// [`run_corpus`] with an explicit search-depth budget.
pub fn run_corpus_with_depth<G>(
    generator: &G,
    corpus: &[CorpusTestCase],
    max_stack_depth: Option<usize>,
) -> Result<CorpusReport, CorpusError>
where
    G: CandidateGenerator + ?Sized,
{
    let options = GenerateOptions::exhaustive().with_max_stack_depth(max_stack_depth);
    let mut run = CorpusRun::default();

    let cases = Progress::new(corpus.iter(), corpus.len(), |case: &&CorpusTestCase| case.target.clone());
    for case in cases {
        run_corpus_one_test(generator, case, options, &mut run)?;
    }

    run.stats.log_summary();
    if run.stats.has_failures() {
        return Err(CorpusError::Coverage {
            failed_targets: run.stats.failed_targets,
            total_targets: run.stats.targets,
        });
    }

    Ok(run)
}

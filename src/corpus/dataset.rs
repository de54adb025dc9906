//! Prefix-labeled training rows.
//!
//! A rule-ranking classifier scores derivations while they are still being
//! built, so every prefix of a derivation becomes a row. All prefixes inherit
//! the correctness of the finished parse:
//!
//! ```text
//! production: [r1, r2, r3]   resolution == gold
//!
//! [r1]          -> true
//! [r1, r2]      -> true
//! [r1, r2, r3]  -> true
//! ```

use super::loader::TimeParseEntry;
use super::progress::Progress;
use crate::{CandidateGenerator, CandidateParse, GenerateOptions, LabeledRow, Scorer};

/// Rows for every prefix of `candidate`'s derivation, shortest first.
pub fn prefix_rows(candidate: &CandidateParse, label: bool) -> impl Iterator<Item = LabeledRow> + use<> {
    let features = candidate.features();
    (1..=features.len()).map(move |i| LabeledRow { features: features[..i].to_vec(), label })
}

/// Lazily build a labeled dataset from `entries`.
///
/// Each entry is run through `generator` with the given budgets; every
/// candidate it yields contributes one row per derivation prefix, labeled with
/// whether the candidate resolved to the entry's gold value. Rows come out in
/// generator order and the sequence can only be consumed once.
///
/// `options.latent_time` is ignored: entry timestamps are exact.
pub fn make_partial_rule_dataset<'a, G>(
    entries: &'a [TimeParseEntry],
    generator: &'a G,
    scorer: &'a dyn Scorer,
    options: GenerateOptions,
    progress: bool,
) -> impl Iterator<Item = LabeledRow> + 'a
where
    G: CandidateGenerator + ?Sized,
{
    let options = GenerateOptions { latent_time: false, ..options };

    let entries: Box<dyn Iterator<Item = &'a TimeParseEntry> + 'a> = if progress {
        Box::new(Progress::new(entries.iter(), entries.len(), |entry: &&TimeParseEntry| entry.text.clone()))
    } else {
        Box::new(entries.iter())
    };

    entries.flat_map(move |entry| {
        generator
            .generate(&entry.text, entry.ts, options, scorer)
            .filter_map(move |candidate| {
                if candidate.is_none() {
                    tracing::debug!(text = %entry.text, "generator yielded an empty candidate, skipping");
                }
                candidate
            })
            .flat_map(move |candidate| {
                let label = candidate.resolution == entry.gold;
                prefix_rows(&candidate, label)
            })
    })
}

/// Split rows into the `(X, y)` layout used for classifier training.
pub fn split_xy(rows: impl IntoIterator<Item = LabeledRow>) -> (Vec<Vec<String>>, Vec<bool>) {
    rows.into_iter().map(|row| (row.features, row.label)).unzip()
}

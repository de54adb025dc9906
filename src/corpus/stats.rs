//! Counters accumulated over one validation run.

/// Aggregate statistics of a corpus run. Counters only ever grow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CorpusStats {
    /// Targets (test cases) processed.
    pub targets: usize,
    /// Targets where at least one sentence never produced the expected value.
    pub failed_targets: usize,
    /// Sentences run through the generator.
    pub total_tests: usize,
    /// Candidates whose value matched the target.
    pub pos_parses: usize,
    /// Candidates whose value did not match the target.
    pub neg_parses: usize,
    /// Matching candidates that were also the first one yielded for their sentence.
    pub pos_first_parses: usize,
    /// Sentences whose highest-scored candidate matched the target.
    pub pos_best_scored: usize,
}

impl CorpusStats {
    pub fn total_parses(&self) -> usize {
        self.pos_parses + self.neg_parses
    }

    /// Share of all candidates that were correct.
    pub fn positive_share(&self) -> f64 {
        ratio(self.pos_parses, self.total_parses())
    }

    /// Share of correct candidates that were yielded first.
    pub fn first_positive_share(&self) -> f64 {
        ratio(self.pos_first_parses, self.pos_parses)
    }

    /// Share of sentences whose best-scored candidate was correct.
    pub fn best_scored_share(&self) -> f64 {
        ratio(self.pos_best_scored, self.total_tests)
    }

    pub fn has_failures(&self) -> bool {
        self.failed_targets > 0
    }

    pub(crate) fn log_summary(&self) {
        tracing::info!(
            "run {} tests on {} targets with a total of {} positive and {} negative parses (={})",
            self.total_tests,
            self.targets,
            self.pos_parses,
            self.neg_parses,
            self.total_parses()
        );
        tracing::info!("share of correct parses in all parses: {:.2}%", self.positive_share() * 100.0);
        tracing::info!("share of correct parses being produced first: {:.2}%", self.first_positive_share() * 100.0);
        tracing::info!("share of correct parses being scored highest: {:.2}%", self.best_scored_share() * 100.0);
    }
}

// Empty denominators report 0.
fn ratio(n: usize, d: usize) -> f64 {
    if d == 0 { 0.0 } else { n as f64 / d as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_use_their_own_denominators() {
        let stats = CorpusStats {
            targets: 2,
            failed_targets: 0,
            total_tests: 4,
            pos_parses: 4,
            neg_parses: 12,
            pos_first_parses: 1,
            pos_best_scored: 3,
        };
        assert_eq!(stats.positive_share(), 0.25);
        assert_eq!(stats.first_positive_share(), 0.25);
        assert_eq!(stats.best_scored_share(), 0.75);
    }

    #[test]
    fn empty_run_has_zero_ratios() {
        let stats = CorpusStats::default();
        assert_eq!(stats.positive_share(), 0.0);
        assert_eq!(stats.first_positive_share(), 0.0);
        assert_eq!(stats.best_scored_share(), 0.0);
        assert!(!stats.has_failures());
    }
}

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Iterator adaptor that drives a progress bar, showing the status text of the
/// item currently handed out. Items pass through untouched.
pub struct Progress<I, F> {
    inner: I,
    bar: ProgressBar,
    status: F,
}

impl<I, F> Progress<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> String,
{
    pub fn new(inner: I, total: usize, status: F) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { inner, bar, status }
    }

    /// Items handed out so far.
    pub fn done(&self) -> u64 {
        self.bar.position()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl<I, F> Iterator for Progress<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> String,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(item) = self.inner.next() else {
            self.bar.finish();
            return None;
        };
        let status = (self.status)(&item);
        tracing::debug!(done = self.bar.position() + 1, total = ?self.bar.length(), status = %status, "progress");
        self.bar.set_message(status);
        self.bar.inc(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_items_through_and_counts() {
        let mut seen = Vec::new();
        let mut progress = Progress::new(["a", "b", "c"].into_iter(), 3, |s: &&str| {
            seen.push(s.to_string());
            format!("processing {}", s)
        });

        assert_eq!(progress.next(), Some("a"));
        assert_eq!(progress.next(), Some("b"));
        assert_eq!(progress.done(), 2);
        assert!(!progress.is_finished());
        assert_eq!(progress.next(), Some("c"));
        assert_eq!(progress.next(), None);
        assert_eq!(progress.done(), 3);
        assert!(progress.is_finished());
        drop(progress);
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn bar_shows_current_status() {
        let mut progress = Progress::new(["tomorrow at 3pm"].into_iter(), 1, |s: &&str| s.to_string());
        progress.next();
        assert_eq!(progress.bar.message(), "tomorrow at 3pm");
    }
}

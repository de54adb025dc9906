use std::collections::BTreeMap;
use timecorpus::{CorpusTestCase, TimeParseEntry};

mod ansi {
    const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Wraps text in ANSI escapes when color output is on.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, style: &str) -> String {
            let s = s.as_ref();
            if self.enabled { format!("{style}{s}{RESET}") } else { s.to_string() }
        }

        pub fn ruler(&self, title: &str) -> String {
            self.paint(format!("━━━ {title} ━━━"), GRAY)
        }
    }
}

pub fn print_timeparse_corpus(path: &str, entries: &[TimeParseEntry], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint(palette.paint(format!("Corpus: {}", path), ansi::CYAN), ansi::BOLD));

    println!("\n{}", palette.ruler("Entries"));
    if entries.is_empty() {
        println!("{}", palette.paint("  No entries", ansi::DIM));
    }
    for (idx, entry) in entries.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.paint(&entry.text, ansi::BOLD),
            palette.paint("│", ansi::DIM),
            palette.paint(entry.ts.format("%Y-%m-%dT%H:%M:%S").to_string(), ansi::YELLOW),
        );
        println!("      {} {}", palette.paint("gold:", ansi::DIM), palette.paint(entry.gold.nb_str(), ansi::GREEN));
    }

    let mut kinds: BTreeMap<&'static str, usize> = BTreeMap::new();
    for entry in entries {
        *kinds.entry(entry.gold.kind()).or_default() += 1;
    }

    println!("\n{}", palette.ruler("Gold values"));
    for (kind, count) in &kinds {
        println!("  {} {}", palette.paint(format!("{:<10}", kind), ansi::BLUE), count);
    }
    println!("  {} {}", palette.paint(format!("{:<10}", "Total"), ansi::BOLD), entries.len());
    println!();
}

pub fn print_test_corpus(path: &str, cases: &[CorpusTestCase], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint(palette.paint(format!("Test corpus: {}", path), ansi::CYAN), ansi::BOLD));

    println!("\n{}", palette.ruler("Targets"));
    for case in cases {
        println!(
            "  {} {} {}",
            palette.paint(&case.target, ansi::GREEN),
            palette.paint("│ ref:", ansi::DIM),
            palette.paint(&case.reference_time, ansi::YELLOW),
        );
        for sentence in &case.sentences {
            println!("      {}", palette.paint(sentence, ansi::DIM));
        }
    }

    let sentences: usize = cases.iter().map(|c| c.sentences.len()).sum();
    println!("\n{}", palette.ruler("Totals"));
    println!(
        "  Targets: {}  │  Sentences: {}",
        palette.paint(cases.len().to_string(), ansi::BLUE),
        palette.paint(sentences.to_string(), ansi::BLUE),
    );
    println!();
}

/// `regex!("...")` evaluates to a `&'static Regex` compiled on first use.
///
/// Patterns are literals checked by tests, so a bad pattern panics with the
/// offending text instead of surfacing as an error.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static PATTERN: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
            regex::Regex::new($pat).expect(concat!("invalid regex literal: ", $pat))
        });
        &*PATTERN
    }};
}

use thiserror::Error;

/// Errors surfaced by corpus loading and validation.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed corpus json: {0}")]
    Json(#[from] serde_json::Error),

    /// A canonical value string with an unknown prefix or a malformed payload.
    #[error("'{0}' has an invalid format")]
    Format(String),

    #[error("invalid reference time '{value}' (expected {expected})")]
    ReferenceTime { value: String, expected: &'static str },

    /// At least one target was never produced by any candidate.
    #[error("corpus has errors: {failed_targets} of {total_targets} targets not always produced")]
    Coverage { failed_targets: usize, total_targets: usize },
}

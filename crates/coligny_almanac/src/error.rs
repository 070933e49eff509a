//! Error types for reference-set loading.

/// Errors from loading the external read-only record sets.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AlmanacError {
    /// The reference file is not valid JSON of the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading the reference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for the merge engine.

use thiserror::Error;

/// Result type for merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Ways a merge call can fail.
///
/// Per-item problems (a tool that errored, an unrecognizable shape) are not
/// errors: those items are skipped and simply do not contribute to the
/// report.
#[derive(Error, Debug)]
pub enum MergeError {
    /// The caller supplied no audit results at all.
    #[error("items list cannot be empty")]
    EmptyInput,

    /// Serializing the merged report failed.
    #[error("report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing a rendered report to disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

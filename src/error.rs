//! Error types for mammo-sort operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mammo-sort operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a sorting run.
///
/// Per-file move failures are not represented here; they are reported as
/// [`crate::router::MoveOutcome`] values and the run continues.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A malformed answer-key line.
    #[error("Answer key error at line {line}: {reason}")]
    AnswerKey {
        /// 1-based line number where the error occurred.
        line: usize,
        /// Reason for the failure.
        reason: String,
    },

    /// Failed to create a classification subdirectory.
    #[error("Failed to create directory {path}: {source}")]
    InitDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

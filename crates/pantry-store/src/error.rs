//! Error types for the model store.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while persisting or loading a fitted model.
///
/// `NotFound` and `Corrupt` are recoverable, reportable conditions: callers
/// answer "model not available" and keep running rather than crashing. The
/// store never retries; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No artifact exists at the configured path.
    #[error("model artifact not found at {0}")]
    NotFound(PathBuf),

    /// The persisted artifact is structurally invalid.
    #[error("model artifact is corrupt: {0}")]
    Corrupt(String),

    /// Filesystem error during save or load.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while writing an artifact.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

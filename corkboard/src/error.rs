//! Error types for board persistence.

use thiserror::Error;

/// Errors that can occur while saving or loading session state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O failure reading or writing a storage file
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored payload could not be serialized or parsed
    #[error("storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

//! Error types for storage and serialization in the session core.
use thiserror::Error;

/// Top-level error type for the session core.
///
/// None of these reach the user: the durable store turns them into a logged
/// fallback to defaults.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    StorageMessage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

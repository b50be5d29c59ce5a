//! Error types for the calcpad client.
use thiserror::Error;

/// Failures setting up the client side of a session.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] calcpad_core::AppError),
}

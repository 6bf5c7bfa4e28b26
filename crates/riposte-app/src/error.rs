// Rust guideline compliant 2026-10-19

//! Error handling for Riposte response builders.
//!
//! Only the generic `send` entry points and body decoding can fail; every
//! status helper is infallible.

use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Neither an explicit status nor a numeric `code` field was supplied.
    #[error("No status code: pass one explicitly or include a numeric `code` field")]
    MissingStatusCode,

    /// A serializable payload did not serialize to a JSON object or string.
    #[error("Payload must serialize to a JSON object or string, got {0}")]
    PayloadNotObject(&'static str),

    /// JSON serialization or parsing failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

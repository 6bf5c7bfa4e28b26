// Rust guideline compliant 2026-10-19

//! Error types for the Riposte core library.

use thiserror::Error;

/// Result type alias for Riposte core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Riposte core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown classification name.
    #[error("Unknown classification: {0}")]
    UnknownClassification(String),
}

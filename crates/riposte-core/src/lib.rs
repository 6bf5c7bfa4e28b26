// Rust guideline compliant 2026-10-19

//! Riposte Core Library
//!
//! This crate provides the foundational pieces for building normalized
//! request/response envelopes:
//! - Status code tables and response level inference
//! - Classified, status-aware errors
//! - Diagnostic tuples and sinks for error reporting
//! - Configuration loading
//! - Error types and result handling

pub mod classified;
pub mod codes;
pub mod config;
pub mod diagnostics;
pub mod error;

pub use classified::{Classification, ClassifiedError};
pub use codes::{infer_level, is_error_code, is_success_code, ResponseLevel};
pub use config::{Config, LogLevel};
pub use diagnostics::{DiagnosticSink, ErrorDiagnostics, NullSink, TracingSink};
pub use error::{Error, Result};

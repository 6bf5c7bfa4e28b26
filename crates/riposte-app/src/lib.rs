// Rust guideline compliant 2026-10-19

//! Response builders for request/response style handlers.
//!
//! This crate turns messages, payloads, classified errors and plain errors
//! into normalized [`Envelope`]s carrying a status-metadata block, and
//! provides a [`Responder`] that also forwards error diagnostics to a sink.

pub mod builder;
pub mod envelope;
pub mod error;
pub mod responder;

pub use builder::{
    bad_request, conflict, created, error_classified, error_classified_with_diagnostics,
    error_plain, error_plain_with_diagnostics, forbidden, internal_server_error, no_content,
    not_found, not_modified, ok, respond_error, respond_error_with_diagnostics, respond_success,
    send, send_serialize, unauthorized, ErrorInput, ErrorStatus, SendPayload, SuccessInput,
    SuccessStatus, WrappedError,
};
pub use envelope::{CorsHeaders, Envelope, StatusMeta, META_KEY};
pub use error::{AppError, Result};
pub use responder::Responder;

// Rust guideline compliant 2026-10-19

//! Diagnostic tuples assembled on the error path, and sinks that consume them.
//!
//! Envelopes never carry diagnostics; the tuple is handed to a
//! [`DiagnosticSink`] so an external logger can record it.

use crate::classified::{Classification, ClassifiedError};
use crate::config::LogLevel;
use serde::Serialize;
use std::error::Error as StdError;

/// Type name reported for errors that are not [`ClassifiedError`]s.
pub const PLAIN_ERROR_TYPE: &str = "Error";

/// Internal diagnostics for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDiagnostics {
    /// Message of the underlying error.
    pub error_message: String,
    /// Type name of the underlying error.
    pub error_type: String,
    /// `Error: <message>` followed by the rendered cause chain, outermost first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_stack: Option<String>,
    /// Failure classification, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    /// Internal logging message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_message: Option<String>,
}

impl ErrorDiagnostics {
    /// Collects diagnostics from a classified error.
    #[must_use]
    pub fn from_classified(err: &ClassifiedError) -> Self {
        Self {
            error_message: err.message().to_string(),
            error_type: err.name().to_string(),
            error_stack: Some(render_chain(err)),
            classification: err.classification(),
            logging_message: err.logging_message().map(str::to_string),
        }
    }

    /// Collects diagnostics from a plain error plus caller-supplied context.
    ///
    /// # Arguments
    ///
    /// * `err` - The raw error
    /// * `classification` - Classification supplied by the caller
    /// * `logging_message` - Internal logging message supplied by the caller
    #[must_use]
    pub fn from_error(
        err: &(dyn StdError + 'static),
        classification: Option<Classification>,
        logging_message: Option<&str>,
    ) -> Self {
        Self {
            error_message: err.to_string(),
            error_type: PLAIN_ERROR_TYPE.to_string(),
            error_stack: Some(render_chain(err)),
            classification,
            logging_message: logging_message.map(str::to_string),
        }
    }
}

fn render_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = format!("{PLAIN_ERROR_TYPE}: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str("\n    caused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Consumer of error diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostics tuple.
    fn record(&self, diagnostics: &ErrorDiagnostics);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _diagnostics: &ErrorDiagnostics) {}
}

/// Sink that emits each tuple as a structured `tracing` event.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: LogLevel,
}

impl TracingSink {
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

macro_rules! emit {
    ($level:expr, $d:ident) => {
        tracing::event!(
            $level,
            error_type = %$d.error_type,
            error_message = %$d.error_message,
            error_stack = $d.error_stack.as_deref(),
            classification = $d.classification.map(Classification::as_str),
            logging_message = $d.logging_message.as_deref(),
            "request failed"
        )
    };
}

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostics: &ErrorDiagnostics) {
        match self.level {
            LogLevel::Error => emit!(tracing::Level::ERROR, diagnostics),
            LogLevel::Warn => emit!(tracing::Level::WARN, diagnostics),
            LogLevel::Info => emit!(tracing::Level::INFO, diagnostics),
            LogLevel::Debug => emit!(tracing::Level::DEBUG, diagnostics),
        }
    }
}

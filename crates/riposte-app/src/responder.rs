// Rust guideline compliant 2026-10-19

//! Responder: error-family builders wired to a diagnostics sink.

use crate::builder::{
    error_classified_with_diagnostics, error_plain_with_diagnostics,
    respond_error_with_diagnostics, ErrorInput, ErrorStatus,
};
use crate::envelope::Envelope;
use riposte_core::{
    Classification, ClassifiedError, Config, DiagnosticSink, ErrorDiagnostics, TracingSink,
};
use std::error::Error as StdError;

/// Builds envelopes exactly like the free functions and forwards each
/// error's diagnostics to a [`DiagnosticSink`].
pub struct Responder {
    config: Config,
    sink: Box<dyn DiagnosticSink>,
}

impl Responder {
    /// Creates a responder with an explicit sink.
    pub fn new(config: Config, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            config,
            sink: Box::new(sink),
        }
    }

    /// Creates a responder that emits diagnostics through `tracing` at the
    /// configured level.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let sink = TracingSink::new(config.diagnostics_level);
        Self::new(config, sink)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Error-family helper for `status`; see [`crate::respond_error`].
    pub fn respond_error(&self, status: ErrorStatus, input: impl Into<ErrorInput>) -> Envelope {
        let (envelope, diagnostics) = respond_error_with_diagnostics(status, input);
        self.report(diagnostics);
        envelope
    }

    pub fn bad_request(&self, input: impl Into<ErrorInput>) -> Envelope {
        self.respond_error(ErrorStatus::BadRequest, input)
    }

    pub fn unauthorized(&self, input: impl Into<ErrorInput>) -> Envelope {
        self.respond_error(ErrorStatus::Unauthorized, input)
    }

    pub fn forbidden(&self, input: impl Into<ErrorInput>) -> Envelope {
        self.respond_error(ErrorStatus::Forbidden, input)
    }

    pub fn not_found(&self, input: impl Into<ErrorInput>) -> Envelope {
        self.respond_error(ErrorStatus::NotFound, input)
    }

    pub fn conflict(&self, input: impl Into<ErrorInput>) -> Envelope {
        self.respond_error(ErrorStatus::Conflict, input)
    }

    pub fn internal_server_error(&self, input: impl Into<ErrorInput>) -> Envelope {
        self.respond_error(ErrorStatus::InternalServerError, input)
    }

    /// See [`crate::error_classified`].
    pub fn error_classified(&self, err: &ClassifiedError, response_message: Option<&str>) -> Envelope {
        let (envelope, diagnostics) = error_classified_with_diagnostics(err, response_message);
        self.report(diagnostics);
        envelope
    }

    /// See [`crate::error_plain`].
    pub fn error_plain(
        &self,
        err: &(dyn StdError + 'static),
        response_message: &str,
        status_code: u16,
        classification: Option<Classification>,
        logging_message: Option<&str>,
    ) -> Envelope {
        let (envelope, diagnostics) = error_plain_with_diagnostics(
            err,
            response_message,
            status_code,
            classification,
            logging_message,
        );
        self.report(diagnostics);
        envelope
    }

    fn report(&self, mut diagnostics: ErrorDiagnostics) {
        if !self.config.diagnostics_enabled {
            return;
        }
        if diagnostics.classification.is_none() {
            diagnostics.classification = self.config.default_classification;
        }
        self.sink.record(&diagnostics);
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

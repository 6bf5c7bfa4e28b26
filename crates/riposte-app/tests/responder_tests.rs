// Rust guideline compliant 2026-10-19

//! Tests for the responder and its diagnostics forwarding.

use riposte_app::{bad_request, Responder, WrappedError};
use riposte_core::{
    Classification, ClassifiedError, Config, DiagnosticSink, ErrorDiagnostics, LogLevel,
};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct RecordingSink {
    records: Arc<Mutex<Vec<ErrorDiagnostics>>>,
}

impl RecordingSink {
    fn records(&self) -> Vec<ErrorDiagnostics> {
        self.records.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, diagnostics: &ErrorDiagnostics) {
        self.records.lock().unwrap().push(diagnostics.clone());
    }
}

#[test]
fn test_envelopes_match_free_functions() {
    let sink = RecordingSink::default();
    let responder = Responder::new(Config::default(), sink.clone());
    assert_eq!(responder.bad_request("X"), bad_request("X"));
    assert_eq!(sink.records().len(), 1);
}

#[test]
fn test_forwards_wrapped_error_diagnostics() {
    let sink = RecordingSink::default();
    let responder = Responder::new(Config::default(), sink.clone());

    let raw = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
    let input = WrappedError::new("Unavailable", Some(Classification::Downstream), raw)
        .with_logging_message("billing down");
    let response = responder.internal_server_error(input);
    assert_eq!(response.status_code, 500);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].error_message, "refused");
    assert_eq!(records[0].classification, Some(Classification::Downstream));
    assert_eq!(records[0].logging_message.as_deref(), Some("billing down"));
}

#[test]
fn test_disabled_diagnostics_are_not_forwarded() {
    let sink = RecordingSink::default();
    let config = Config {
        diagnostics_enabled: false,
        ..Config::default()
    };
    let responder = Responder::new(config, sink.clone());

    let response = responder.conflict(ClassifiedError::new("dup"));
    assert_eq!(response.status_code, 409);
    assert!(sink.records().is_empty());
}

#[test]
fn test_default_classification_fills_gaps_only() {
    let sink = RecordingSink::default();
    let config = Config {
        default_classification: Some(Classification::Other),
        ..Config::default()
    };
    let responder = Responder::new(config, sink.clone());

    responder.not_found("missing");
    responder.forbidden(("denied", Classification::Entitlement));
    let raw = io::Error::new(io::ErrorKind::Other, "raw");
    responder.error_plain(&raw, "Oops", 502, None, None);
    responder.error_classified(&ClassifiedError::new("bare"), Some("Hidden"));

    let classifications: Vec<_> = sink
        .records()
        .into_iter()
        .map(|record| record.classification)
        .collect();
    assert_eq!(
        classifications,
        vec![
            Some(Classification::Other),
            Some(Classification::Entitlement),
            Some(Classification::Other),
            Some(Classification::Other),
        ]
    );
}

#[test]
fn test_from_config_uses_configured_level() {
    let config = Config {
        diagnostics_level: LogLevel::Warn,
        ..Config::default()
    };
    let responder = Responder::from_config(config);
    assert_eq!(responder.config().diagnostics_level, LogLevel::Warn);
    assert_eq!(responder.unauthorized(()).status_code, 401);
    assert_eq!(Responder::default().bad_request(()).status_code, 400);
}

// Rust guideline compliant 2026-10-19

//! Tests for reading envelopes back.

use riposte_app::{bad_request, ok, send, Envelope, StatusMeta};
use riposte_core::ResponseLevel;
use serde_json::json;

#[test]
fn test_status_meta_reads_flat_error_body() {
    let meta = bad_request("X").status_meta().unwrap();
    assert_eq!(meta, StatusMeta::new(400, "X", ResponseLevel::Error));
}

#[test]
fn test_status_meta_reads_nested_body() {
    let meta = ok("done").status_meta().unwrap();
    assert_eq!(meta, StatusMeta::new(200, "done", ResponseLevel::Success));

    let meta = send("hi", Some(418), None).unwrap().status_meta().unwrap();
    assert_eq!(meta.code, Some(418));
    assert_eq!(meta.level, None);
}

#[test]
fn test_status_meta_rejects_invalid_body() {
    let envelope = Envelope {
        status_code: 200,
        headers: Default::default(),
        body: "not json".to_string(),
    };
    assert!(envelope.status_meta().is_err());
}

#[test]
fn test_meta_value_omits_absent_fields() {
    let meta = StatusMeta {
        code: None,
        message: "m".to_string(),
        level: None,
    };
    assert_eq!(meta.to_value(), json!({"message": "m"}));
    assert_eq!(serde_json::to_value(&meta).unwrap(), meta.to_value());
}

#[test]
fn test_envelope_serializes_as_lambda_response() {
    let value = serde_json::to_value(bad_request("X")).unwrap();
    assert_eq!(
        value,
        json!({
            "statusCode": 400,
            "headers": {
                "Access-Control-Allow-Origin": "*",
                "Access-Control-Allow-Credentials": true
            },
            "body": "{\"code\":400,\"message\":\"X\",\"level\":\"ERROR\"}"
        })
    );
}

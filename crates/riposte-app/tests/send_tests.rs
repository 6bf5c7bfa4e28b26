// Rust guideline compliant 2026-10-19

//! Tests for the generic `send` entry point.

use riposte_app::{send, send_serialize, AppError, SendPayload};
use riposte_core::ResponseLevel;
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_send_message_with_success_code() {
    let response = send("hi", Some(226), None).unwrap();
    assert_eq!(response.status_code, 226);
    assert_eq!(
        response.body,
        r#"{"message":"hi","riposte":{"code":226,"message":"hi","level":"SUCCESS"}}"#
    );
}

#[test]
fn test_send_message_with_error_code() {
    let response = send("bad", Some(422), None).unwrap();
    assert_eq!(
        response.body,
        r#"{"message":"bad","riposte":{"code":422,"message":"bad","level":"ERROR"}}"#
    );
}

#[test]
fn test_send_unlisted_code_omits_level() {
    let response = send(object(json!({"code": 418})), None, None).unwrap();
    assert_eq!(response.status_code, 418);
    assert_eq!(
        response.body,
        r#"{"code":418,"riposte":{"code":418,"message":""}}"#
    );
}

#[test]
fn test_send_explicit_level_wins() {
    let response = send("careful", Some(200), Some(ResponseLevel::Warn)).unwrap();
    assert_eq!(
        response.body,
        r#"{"message":"careful","riposte":{"code":200,"message":"careful","level":"WARN"}}"#
    );

    let response = send(object(json!({"code": 102})), None, Some(ResponseLevel::Info)).unwrap();
    assert_eq!(response.status_meta().unwrap().level, Some(ResponseLevel::Info));
}

#[test]
fn test_send_payload_message_and_code() {
    let payload = object(json!({"message": "saved", "code": 201, "id": 9}));
    let response = send(payload, None, None).unwrap();
    assert_eq!(response.status_code, 201);
    assert_eq!(
        response.body,
        r#"{"message":"saved","code":201,"id":9,"riposte":{"code":201,"message":"saved","level":"SUCCESS"}}"#
    );
}

#[test]
fn test_send_http_code_overrides_payload_code() {
    let response = send(object(json!({"code": 404})), Some(409), None).unwrap();
    assert_eq!(response.status_code, 409);
    assert_eq!(response.status_meta().unwrap().code, Some(409));
}

#[test]
fn test_send_success_candidate_overrides_error_candidate() {
    // Error status with a success code in the payload still reads as success.
    let response = send(object(json!({"code": 200})), Some(500), None).unwrap();
    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.status_meta().unwrap().level,
        Some(ResponseLevel::Success)
    );
}

#[test]
fn test_send_non_string_message_reads_as_empty() {
    let response = send(object(json!({"message": 5, "code": 200})), None, None).unwrap();
    assert_eq!(response.status_meta().unwrap().message, "");
}

#[test]
fn test_send_accepts_whole_float_code() {
    let response = send(object(json!({"code": 200.0, "id": 1})), None, None).unwrap();
    assert_eq!(response.status_code, 200);
    let meta = response.status_meta().unwrap();
    assert_eq!(meta.code, Some(200));
    assert_eq!(meta.level, Some(ResponseLevel::Success));

    let parsed: Value = serde_json::from_str(r#"{"code": 404.0}"#).unwrap();
    let response = send(object(parsed), None, None).unwrap();
    assert_eq!(response.status_code, 404);
    assert_eq!(response.status_meta().unwrap().level, Some(ResponseLevel::Error));
}

#[test]
fn test_send_rejects_fractional_or_out_of_range_code() {
    for code in [json!(200.5), json!(70000.0), json!(-200.0)] {
        let result = send(object(json!({ "code": code })), None, None);
        assert!(matches!(result, Err(AppError::MissingStatusCode)), "{code}");
    }
}

#[test]
fn test_send_zero_code_counts_as_absent() {
    let response = send(object(json!({"code": 204})), Some(0), None).unwrap();
    assert_eq!(response.status_code, 204);
}

#[test]
fn test_send_without_any_code_fails() {
    let result = send("no code", None, None);
    assert!(matches!(result, Err(AppError::MissingStatusCode)));

    let result = send(object(json!({"code": "200"})), None, None);
    assert!(matches!(result, Err(AppError::MissingStatusCode)));
}

#[test]
fn test_send_serialize() {
    #[derive(serde::Serialize)]
    struct Created {
        code: u16,
        id: &'static str,
    }

    let response = send_serialize(&Created { code: 201, id: "a1" }, None, None).unwrap();
    assert_eq!(
        response.body,
        r#"{"code":201,"id":"a1","riposte":{"code":201,"message":"","level":"SUCCESS"}}"#
    );

    let response = send_serialize("plain", Some(200), None).unwrap();
    assert_eq!(response.body_json().unwrap()["message"], "plain");

    assert!(matches!(
        send_serialize(&42, Some(200), None),
        Err(AppError::PayloadNotObject("number"))
    ));
}

#[test]
fn test_payload_conversions() {
    assert_eq!(SendPayload::from("a"), SendPayload::Message("a".to_string()));
    assert_eq!(
        SendPayload::from_serialize(&json!({"k": 1})).unwrap(),
        SendPayload::Data(object(json!({"k": 1})))
    );
}

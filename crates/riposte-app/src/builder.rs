// Rust guideline compliant 2026-10-19

//! Response builders.
//!
//! Every entry point takes a tagged input describing which call shape the
//! caller used, and produces an [`Envelope`]:
//! - Error helpers emit a flat `{code, message, level}` body.
//! - `send` and the success helpers nest the status block under
//!   [`META_KEY`] next to the payload fields.

use crate::envelope::{Envelope, StatusMeta, META_KEY};
use crate::error::{AppError, Result};
use riposte_core::classified::DEFAULT_CLASSIFIED_STATUS;
use riposte_core::{infer_level, Classification, ClassifiedError, ErrorDiagnostics, ResponseLevel};
use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error as StdError;

/// Payload accepted by [`send`].
#[derive(Debug, Clone, PartialEq)]
pub enum SendPayload {
    /// A bare message; the body becomes `{message}`.
    Message(String),
    /// A structured payload copied into the body.
    Data(Map<String, Value>),
}

impl SendPayload {
    /// Converts any serializable value into a payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not serialize to a JSON object or string.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(SendPayload::Data(map)),
            Value::String(message) => Ok(SendPayload::Message(message)),
            other => Err(AppError::PayloadNotObject(json_kind(&other))),
        }
    }

    /// Numeric `code` field of a structured payload. Whole floats such as
    /// `200.0` count; zero counts as absent.
    fn code(&self) -> Option<u16> {
        match self {
            SendPayload::Message(_) => None,
            SendPayload::Data(data) => data
                .get("code")
                .and_then(status_from_json)
                .filter(|code| *code != 0),
        }
    }
}

impl From<&str> for SendPayload {
    fn from(message: &str) -> Self {
        SendPayload::Message(message.to_string())
    }
}

impl From<String> for SendPayload {
    fn from(message: String) -> Self {
        SendPayload::Message(message)
    }
}

impl From<Map<String, Value>> for SendPayload {
    fn from(data: Map<String, Value>) -> Self {
        SendPayload::Data(data)
    }
}

fn status_from_json(value: &Value) -> Option<u16> {
    if let Some(code) = value.as_u64() {
        return u16::try_from(code).ok();
    }
    let code = value.as_f64()?;
    if code.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&code) {
        Some(code as u16)
    } else {
        None
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The most general entry point.
///
/// The status is `http_code` when given, otherwise the payload's numeric
/// `code` field. An explicit `level` wins; otherwise it is inferred from
/// both codes, with a success code taking precedence over an error code.
/// Codes in neither table leave the level out of the body.
///
/// # Arguments
///
/// * `payload` - Message or structured payload
/// * `http_code` - Explicit status code
/// * `level` - Explicit response level
///
/// # Errors
///
/// Returns [`AppError::MissingStatusCode`] if no status code can be determined.
pub fn send(
    payload: impl Into<SendPayload>,
    http_code: Option<u16>,
    level: Option<ResponseLevel>,
) -> Result<Envelope> {
    let payload = payload.into();
    let http_code = http_code.filter(|code| *code != 0);
    let payload_code = payload.code();

    let inferred = infer_level(http_code.into_iter().chain(payload_code));
    let status = http_code
        .or(payload_code)
        .ok_or(AppError::MissingStatusCode)?;

    let (message, mut body) = match payload {
        SendPayload::Message(message) => {
            let mut body = Map::new();
            body.insert("message".to_string(), Value::String(message.clone()));
            (message, body)
        }
        SendPayload::Data(data) => {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            (message, data)
        }
    };

    let meta = StatusMeta {
        code: Some(status),
        message,
        level: level.or(inferred),
    };
    body.insert(META_KEY.to_string(), meta.to_value());

    tracing::debug!(status, level = ?meta.level, "built send response");
    Ok(Envelope::new(&Value::Object(body), status))
}

/// Serializes `payload` and forwards it to [`send`].
///
/// # Errors
///
/// Returns an error if the payload is neither a JSON object nor a string, or
/// if no status code can be determined.
pub fn send_serialize<T: Serialize + ?Sized>(
    payload: &T,
    http_code: Option<u16>,
    level: Option<ResponseLevel>,
) -> Result<Envelope> {
    send(SendPayload::from_serialize(payload)?, http_code, level)
}

fn error_envelope(status: u16, message: impl Into<String>) -> Envelope {
    let meta = StatusMeta::new(status, message, ResponseLevel::Error);
    tracing::debug!(status, "built error response");
    Envelope::new(&meta.to_value(), status)
}

/// Builds an error envelope from a classified error.
///
/// The body is the flat status block. An empty `response_message` falls back
/// to the error's own message; an unset status reports 500.
#[must_use]
pub fn error_classified(err: &ClassifiedError, response_message: Option<&str>) -> Envelope {
    error_classified_with_diagnostics(err, response_message).0
}

/// Like [`error_classified`], also returning the diagnostics tuple.
#[must_use]
pub fn error_classified_with_diagnostics(
    err: &ClassifiedError,
    response_message: Option<&str>,
) -> (Envelope, ErrorDiagnostics) {
    let status = err.status_code().unwrap_or(DEFAULT_CLASSIFIED_STATUS);
    let message = response_message
        .filter(|message| !message.is_empty())
        .unwrap_or(err.message());
    (
        error_envelope(status, message),
        ErrorDiagnostics::from_classified(err),
    )
}

/// Builds an error envelope from a plain error.
///
/// Only the status, message and level reach the body; the classification
/// and logging message go to the diagnostics tuple.
#[must_use]
pub fn error_plain(
    err: &(dyn StdError + 'static),
    response_message: &str,
    status_code: u16,
    classification: Option<Classification>,
    logging_message: Option<&str>,
) -> Envelope {
    error_plain_with_diagnostics(
        err,
        response_message,
        status_code,
        classification,
        logging_message,
    )
    .0
}

/// Like [`error_plain`], also returning the diagnostics tuple.
#[must_use]
pub fn error_plain_with_diagnostics(
    err: &(dyn StdError + 'static),
    response_message: &str,
    status_code: u16,
    classification: Option<Classification>,
    logging_message: Option<&str>,
) -> (Envelope, ErrorDiagnostics) {
    (
        error_envelope(status_code, response_message),
        ErrorDiagnostics::from_error(err, classification, logging_message),
    )
}

/// A plain error wrapped with a response message and optional context.
#[derive(Debug)]
pub struct WrappedError {
    /// Public response message.
    pub message: String,
    /// Classification for diagnostics.
    pub classification: Option<Classification>,
    /// The raw error.
    pub source: Box<dyn StdError + Send + Sync>,
    /// Internal logging message.
    pub logging_message: Option<String>,
}

impl WrappedError {
    /// Wraps `source` with a public message and an optional classification.
    pub fn new(
        message: impl Into<String>,
        classification: Option<Classification>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            classification,
            source: source.into(),
            logging_message: None,
        }
    }

    /// Attaches an internal logging message.
    #[must_use]
    pub fn with_logging_message(mut self, logging_message: impl Into<String>) -> Self {
        self.logging_message = Some(logging_message.into());
        self
    }
}

/// Call shapes accepted by the error-family helpers.
#[derive(Debug, Default)]
pub enum ErrorInput {
    /// No arguments: an empty message.
    #[default]
    Empty,
    /// A classified error; its status is overwritten with the helper's code.
    Classified(ClassifiedError),
    /// A message with an optional classification.
    Message {
        message: String,
        classification: Option<Classification>,
    },
    /// A plain error; never converted into a [`ClassifiedError`].
    Wrapped(WrappedError),
}

impl From<()> for ErrorInput {
    fn from((): ()) -> Self {
        ErrorInput::Empty
    }
}

impl From<ClassifiedError> for ErrorInput {
    fn from(err: ClassifiedError) -> Self {
        ErrorInput::Classified(err)
    }
}

impl From<&str> for ErrorInput {
    fn from(message: &str) -> Self {
        ErrorInput::Message {
            message: message.to_string(),
            classification: None,
        }
    }
}

impl From<String> for ErrorInput {
    fn from(message: String) -> Self {
        ErrorInput::Message {
            message,
            classification: None,
        }
    }
}

impl From<(&str, Classification)> for ErrorInput {
    fn from((message, classification): (&str, Classification)) -> Self {
        ErrorInput::Message {
            message: message.to_string(),
            classification: Some(classification),
        }
    }
}

impl From<(String, Classification)> for ErrorInput {
    fn from((message, classification): (String, Classification)) -> Self {
        ErrorInput::Message {
            message,
            classification: Some(classification),
        }
    }
}

impl From<WrappedError> for ErrorInput {
    fn from(wrapped: WrappedError) -> Self {
        ErrorInput::Wrapped(wrapped)
    }
}

/// Fixed codes of the error-family helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    InternalServerError,
}

impl ErrorStatus {
    pub const ALL: [ErrorStatus; 6] = [
        ErrorStatus::BadRequest,
        ErrorStatus::Unauthorized,
        ErrorStatus::Forbidden,
        ErrorStatus::NotFound,
        ErrorStatus::Conflict,
        ErrorStatus::InternalServerError,
    ];

    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            ErrorStatus::BadRequest => 400,
            ErrorStatus::Unauthorized => 401,
            ErrorStatus::Forbidden => 403,
            ErrorStatus::NotFound => 404,
            ErrorStatus::Conflict => 409,
            ErrorStatus::InternalServerError => 500,
        }
    }
}

/// Shared body of every error-family helper.
#[must_use]
pub fn respond_error(status: ErrorStatus, input: impl Into<ErrorInput>) -> Envelope {
    respond_error_with_diagnostics(status, input).0
}

/// Like [`respond_error`], also returning the diagnostics tuple.
#[must_use]
pub fn respond_error_with_diagnostics(
    status: ErrorStatus,
    input: impl Into<ErrorInput>,
) -> (Envelope, ErrorDiagnostics) {
    let code = status.code();
    match input.into() {
        ErrorInput::Empty => {
            let err = ClassifiedError::from_parts("", None, Some(code), None);
            error_classified_with_diagnostics(&err, None)
        }
        ErrorInput::Classified(mut err) => {
            err.set_status_code(code);
            error_classified_with_diagnostics(&err, None)
        }
        ErrorInput::Message {
            message,
            classification,
        } => {
            let err = ClassifiedError::from_parts(message, classification, Some(code), None);
            error_classified_with_diagnostics(&err, None)
        }
        ErrorInput::Wrapped(wrapped) => error_plain_with_diagnostics(
            &*wrapped.source,
            &wrapped.message,
            code,
            wrapped.classification,
            wrapped.logging_message.as_deref(),
        ),
    }
}

/// 400 Bad Request.
#[must_use]
pub fn bad_request(input: impl Into<ErrorInput>) -> Envelope {
    respond_error(ErrorStatus::BadRequest, input)
}

/// 401 Unauthorized.
#[must_use]
pub fn unauthorized(input: impl Into<ErrorInput>) -> Envelope {
    respond_error(ErrorStatus::Unauthorized, input)
}

/// 403 Forbidden.
#[must_use]
pub fn forbidden(input: impl Into<ErrorInput>) -> Envelope {
    respond_error(ErrorStatus::Forbidden, input)
}

/// 404 Not Found.
#[must_use]
pub fn not_found(input: impl Into<ErrorInput>) -> Envelope {
    respond_error(ErrorStatus::NotFound, input)
}

/// 409 Conflict.
#[must_use]
pub fn conflict(input: impl Into<ErrorInput>) -> Envelope {
    respond_error(ErrorStatus::Conflict, input)
}

/// 500 Internal Server Error.
#[must_use]
pub fn internal_server_error(input: impl Into<ErrorInput>) -> Envelope {
    respond_error(ErrorStatus::InternalServerError, input)
}

/// Call shapes accepted by the success-family helpers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SuccessInput {
    /// No arguments.
    #[default]
    Empty,
    /// A message only.
    Message(String),
    /// A payload, optionally with a message for the status block.
    Payload {
        data: Map<String, Value>,
        message: Option<String>,
    },
}

impl SuccessInput {
    /// Converts a serializable value into a payload input.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not serialize to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T, message: Option<&str>) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(data) => Ok(SuccessInput::Payload {
                data,
                message: message.map(str::to_string),
            }),
            other => Err(AppError::PayloadNotObject(json_kind(&other))),
        }
    }
}

impl From<()> for SuccessInput {
    fn from((): ()) -> Self {
        SuccessInput::Empty
    }
}

impl From<&str> for SuccessInput {
    fn from(message: &str) -> Self {
        SuccessInput::Message(message.to_string())
    }
}

impl From<String> for SuccessInput {
    fn from(message: String) -> Self {
        SuccessInput::Message(message)
    }
}

impl From<Map<String, Value>> for SuccessInput {
    fn from(data: Map<String, Value>) -> Self {
        SuccessInput::Payload {
            data,
            message: None,
        }
    }
}

impl From<(Map<String, Value>, &str)> for SuccessInput {
    fn from((data, message): (Map<String, Value>, &str)) -> Self {
        SuccessInput::Payload {
            data,
            message: Some(message.to_string()),
        }
    }
}

impl From<(Map<String, Value>, String)> for SuccessInput {
    fn from((data, message): (Map<String, Value>, String)) -> Self {
        SuccessInput::Payload {
            data,
            message: Some(message),
        }
    }
}

/// Fixed codes of the success-family helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuccessStatus {
    Ok,
    Created,
    NoContent,
    NotModified,
}

impl SuccessStatus {
    pub const ALL: [SuccessStatus; 4] = [
        SuccessStatus::Ok,
        SuccessStatus::Created,
        SuccessStatus::NoContent,
        SuccessStatus::NotModified,
    ];

    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            SuccessStatus::Ok => 200,
            SuccessStatus::Created => 201,
            SuccessStatus::NoContent => 204,
            SuccessStatus::NotModified => 304,
        }
    }
}

/// Shared body of every success-family helper.
///
/// The payload is consumed and returned merged with the status block under
/// [`META_KEY`]; an existing key of that name is replaced in place.
#[must_use]
pub fn respond_success(status: SuccessStatus, input: impl Into<SuccessInput>) -> Envelope {
    let code = status.code();
    let (mut body, message) = match input.into() {
        SuccessInput::Empty => (Map::new(), String::new()),
        SuccessInput::Message(message) => (Map::new(), message),
        SuccessInput::Payload { data, message } => (data, message.unwrap_or_default()),
    };

    let meta = StatusMeta::new(code, message, ResponseLevel::Success);
    body.insert(META_KEY.to_string(), meta.to_value());

    tracing::debug!(status = code, "built success response");
    Envelope::new(&Value::Object(body), code)
}

/// 200 OK.
#[must_use]
pub fn ok(input: impl Into<SuccessInput>) -> Envelope {
    respond_success(SuccessStatus::Ok, input)
}

/// 201 Created.
#[must_use]
pub fn created(input: impl Into<SuccessInput>) -> Envelope {
    respond_success(SuccessStatus::Created, input)
}

/// 204 No Content.
#[must_use]
pub fn no_content(input: impl Into<SuccessInput>) -> Envelope {
    respond_success(SuccessStatus::NoContent, input)
}

/// 304 Not Modified.
#[must_use]
pub fn not_modified(input: impl Into<SuccessInput>) -> Envelope {
    respond_success(SuccessStatus::NotModified, input)
}

// Rust guideline compliant 2026-10-19

//! Response envelopes and the status-metadata block.

use crate::error::Result;
use riposte_core::ResponseLevel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body key under which `send` and the success helpers nest the status block.
pub const META_KEY: &str = "riposte";

/// The two CORS headers attached to every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorsHeaders {
    #[serde(rename = "Access-Control-Allow-Origin")]
    allow_origin: &'static str,
    #[serde(rename = "Access-Control-Allow-Credentials")]
    allow_credentials: bool,
}

impl CorsHeaders {
    #[must_use]
    pub fn allow_origin(&self) -> &'static str {
        self.allow_origin
    }

    #[must_use]
    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_origin: "*",
            allow_credentials: true,
        }
    }
}

/// Status-metadata block: `{code, message, level}`.
///
/// An absent code or level is omitted when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<ResponseLevel>,
}

impl StatusMeta {
    /// Creates a block with both code and level present.
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>, level: ResponseLevel) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            level: Some(level),
        }
    }

    /// Converts the block into a JSON object, keys in `code, message, level` order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(code) = self.code {
            map.insert("code".to_string(), Value::from(code));
        }
        map.insert("message".to_string(), Value::String(self.message.clone()));
        if let Some(level) = self.level {
            map.insert("level".to_string(), Value::from(level.as_str()));
        }
        Value::Object(map)
    }
}

/// Normalized response: `{statusCode, headers, body}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// HTTP status code.
    pub status_code: u16,
    /// Fixed CORS headers.
    pub headers: CorsHeaders,
    /// JSON-serialized body.
    pub body: String,
}

impl Envelope {
    /// Creates an envelope by serializing `body`.
    #[must_use]
    pub fn new(body: &Value, status_code: u16) -> Self {
        Self {
            status_code,
            headers: CorsHeaders::default(),
            body: body.to_string(),
        }
    }

    /// Parses the body back into JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn body_json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Extracts the status block from either body shape.
    ///
    /// Bodies produced by `send` and the success helpers nest the block under
    /// [`META_KEY`]; error bodies are the block itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON or is not a JSON object.
    pub fn status_meta(&self) -> Result<StatusMeta> {
        let body = self.body_json()?;
        let meta = match body.get(META_KEY) {
            Some(nested) if nested.is_object() => StatusMeta::deserialize(nested)?,
            _ => StatusMeta::deserialize(&body)?,
        };
        Ok(meta)
    }
}

// Rust guideline compliant 2026-10-19

//! Configuration for Riposte.
//!
//! Configuration only governs how error diagnostics are reported; it never
//! changes the shape of a response envelope. It is built in memory by the
//! caller and handed to the responder.

use crate::classified::Classification;
use serde::{Deserialize, Serialize};

/// Severity used when emitting error diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
}

/// Configuration for Riposte behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether error diagnostics are forwarded to the sink.
    #[serde(default = "default_diagnostics_enabled")]
    pub diagnostics_enabled: bool,

    /// Level at which diagnostics are emitted.
    #[serde(default)]
    pub diagnostics_level: LogLevel,

    /// Classification reported in diagnostics that carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_classification: Option<Classification>,
}

fn default_diagnostics_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diagnostics_enabled: default_diagnostics_enabled(),
            diagnostics_level: LogLevel::default(),
            default_classification: None,
        }
    }
}

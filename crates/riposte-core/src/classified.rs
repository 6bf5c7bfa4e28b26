// Rust guideline compliant 2026-10-19

//! Classified, status-aware errors.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status reported when a classification is given without an explicit status.
pub const DEFAULT_CLASSIFIED_STATUS: u16 = 500;

/// Category of a failure's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Failure in a database call.
    Database,
    /// Failure in a downstream service.
    Downstream,
    /// Caller lacks the required entitlement.
    Entitlement,
    /// Anything else.
    Other,
    /// Input failed validation.
    Validation,
}

impl Classification {
    /// All classifications, in declaration order.
    pub const ALL: [Classification; 5] = [
        Classification::Database,
        Classification::Downstream,
        Classification::Entitlement,
        Classification::Other,
        Classification::Validation,
    ];

    /// Returns the wire name of the classification.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Database => "DATABASE",
            Classification::Downstream => "DOWNSTREAM",
            Classification::Entitlement => "ENTITLEMENT",
            Classification::Other => "OTHER",
            Classification::Validation => "VALIDATION",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownClassification(s.to_string()))
    }
}

/// Formats the error name prefix: first character upper-cased, a space, then
/// the rest lower-cased. `DATABASE` becomes `D atabase`.
fn format_name(classification: Option<Classification>) -> String {
    let Some(classification) = classification else {
        return String::new();
    };
    let raw = classification.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => format!(
            "{} {}",
            first.to_uppercase(),
            chars.as_str().to_lowercase()
        ),
        None => String::new(),
    }
}

/// An error carrying a public message, an optional classification, an
/// optional HTTP status, and an optional internal logging message.
///
/// The status defaults to 500 only when a classification is supplied at
/// construction without an explicit status. After construction the
/// classification and status are independent: changing one never touches the
/// other.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClassifiedError {
    message: String,
    name: String,
    classification: Option<Classification>,
    status_code: Option<u16>,
    logging_message: Option<String>,
}

impl ClassifiedError {
    /// Creates an error with only a public message.
    ///
    /// Classification, status and logging message are all left unset.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(message, None, None, None)
    }

    /// Creates a classified error; the status becomes 500.
    pub fn classified(message: impl Into<String>, classification: Classification) -> Self {
        Self::from_parts(message, Some(classification), None, None)
    }

    /// Creates an error from every optional part.
    ///
    /// # Arguments
    ///
    /// * `message` - Public-facing description
    /// * `classification` - Failure origin, if known
    /// * `status_code` - Explicit status; defaults to 500 when a classification is given
    /// * `logging_message` - Internal diagnostic message
    pub fn from_parts(
        message: impl Into<String>,
        classification: Option<Classification>,
        status_code: Option<u16>,
        logging_message: Option<String>,
    ) -> Self {
        let status_code = status_code.or(classification.map(|_| DEFAULT_CLASSIFIED_STATUS));
        Self {
            message: message.into(),
            name: format!("{}Error", format_name(classification)),
            classification,
            status_code,
            logging_message,
        }
    }

    /// Public-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Failure classification, if any.
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.classification
    }

    /// HTTP status to report, if set.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Message intended for internal diagnostics only.
    #[must_use]
    pub fn logging_message(&self) -> Option<&str> {
        self.logging_message.as_deref()
    }

    /// Sets the classification. The status code is left untouched.
    pub fn set_classification(&mut self, classification: Option<Classification>) {
        self.classification = classification;
    }

    /// Sets the status code. The classification is left untouched.
    pub fn set_status_code(&mut self, status_code: u16) {
        self.status_code = Some(status_code);
    }

    /// Sets the internal logging message.
    pub fn set_logging_message(&mut self, logging_message: impl Into<String>) {
        self.logging_message = Some(logging_message.into());
    }

    /// Derived type name, e.g. `D atabaseError`, or `Error` when unclassified.
    ///
    /// Fixed at construction; later classification changes do not rename it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

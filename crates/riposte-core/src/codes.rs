// Rust guideline compliant 2026-10-19

//! Status code tables and response level inference.

use serde::{Deserialize, Serialize};

/// Status codes that classify a response as successful.
pub const SUCCESS_CODES: [u16; 10] = [200, 201, 202, 203, 204, 205, 206, 207, 208, 226];

/// Status codes that classify a response as an error.
pub const ERROR_CODES: [u16; 41] = [
    400, 401, 402, 403, 404, 405, 406, 407, 408, 409, 410, 411, 412, 413, 414, 415, 416, 417,
    421, 422, 423, 424, 425, 426, 427, 428, 429, 431, 451, 500, 501, 502, 503, 504, 505, 506,
    507, 508, 509, 510, 511,
];

/// Severity tag embedded in a status-metadata block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseLevel {
    /// The request failed.
    Error,
    /// The request succeeded with caveats.
    Warn,
    /// Informational response.
    Info,
    /// The request succeeded.
    Success,
}

impl ResponseLevel {
    /// Returns the wire name of the level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseLevel::Error => "ERROR",
            ResponseLevel::Warn => "WARN",
            ResponseLevel::Info => "INFO",
            ResponseLevel::Success => "SUCCESS",
        }
    }
}

/// Returns true if `code` is in the success set.
#[must_use]
pub fn is_success_code(code: u16) -> bool {
    SUCCESS_CODES.contains(&code)
}

/// Returns true if `code` is in the error set.
#[must_use]
pub fn is_error_code(code: u16) -> bool {
    ERROR_CODES.contains(&code)
}

/// Infers a response level from candidate status codes.
///
/// The error check runs over every candidate first; the success check then
/// overwrites its result when any candidate is a success code. Codes in
/// neither set leave the level undetermined.
///
/// # Arguments
///
/// * `codes` - Candidate status codes, typically the explicit code and the payload's code
///
/// # Returns
///
/// The inferred level, or `None` when no candidate is classifiable.
pub fn infer_level<I>(codes: I) -> Option<ResponseLevel>
where
    I: IntoIterator<Item = u16>,
    I::IntoIter: Clone,
{
    let codes = codes.into_iter();
    let mut level = None;

    if codes.clone().any(is_error_code) {
        level = Some(ResponseLevel::Error);
    }

    if codes.into_iter().any(is_success_code) {
        level = Some(ResponseLevel::Success);
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_table_has_no_gaps_in_ranges() {
        for code in (400..=417).chain(421..=429).chain(500..=511) {
            assert!(is_error_code(code), "{code} should be an error code");
        }
        assert!(is_error_code(431));
        assert!(is_error_code(451));
    }

    #[test]
    fn test_tables_are_disjoint() {
        for code in SUCCESS_CODES {
            assert!(!is_error_code(code));
        }
    }

    #[test]
    fn test_unlisted_codes() {
        for code in [100, 209, 304, 418, 419, 420, 430, 450, 512, 599] {
            assert!(!is_error_code(code), "{code}");
            assert!(!is_success_code(code), "{code}");
        }
    }
}

//! # Decimal Input Sanitizer
//!
//! Normalizes the free-text value of a numeric field after each keystroke.
//!
//! ## Sanitization Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  raw field text: "12.3.4abc"                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  1. strip non-digit, non-dot  ──►  "12.3.4"                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  2. merge extra dots          ──►  "12.34"                          │
//! │       │    (first fragment + "." + ALL later fragments joined;      │
//! │       │     truncating to the first two would drop typed digits)    │
//! │       ▼                                                             │
//! │  3. bounds check (advisory)   ──►  valid flag + message             │
//! │       │    the text is NEVER rewritten to fit the bound; the        │
//! │       │    numeric clamp happens later in the calculation step      │
//! │       ▼                                                             │
//! │  sanitized text written back into the field                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Edge Cases
//! - Empty output parses to nothing; downstream treats it as `0`.
//! - A lone `.` is valid sanitizer output (mid-typing state); it is not yet
//!   a parseable number and downstream also falls safe to `0`.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Sanitized Input
// =============================================================================

/// The outcome of sanitizing one text field.
///
/// `value` is written back into the field; `error`, when present, drives an
/// advisory warning next to the field. An out-of-bound value still keeps its
/// sanitized text: the user sees what they typed plus a warning.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SanitizedInput {
    /// Sanitized text to write back into the field.
    pub value: String,

    /// Why the value is out of bounds, if it is.
    #[ts(type = "string | null")]
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<ValidationError>,
}

impl SanitizedInput {
    /// True when the field should render in its normal (non-warning) state.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

// The UI host only needs the message text, not the enum structure.
fn serialize_error<S>(err: &Option<ValidationError>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match err {
        Some(e) => s.serialize_some(&e.to_string()),
        None => s.serialize_none(),
    }
}

// =============================================================================
// Sanitizer
// =============================================================================

/// Sanitizes the accumulated text of a numeric field.
///
/// Strips every character that is not an ASCII digit or `.`, collapses
/// multiple decimal points by joining all fragments after the first dot,
/// and (when `max` is given) flags values outside `[0, max]` without
/// rewriting the text.
///
/// The function is idempotent: sanitizing its own output is a no-op.
///
/// ## Example
/// ```rust
/// use calchub_core::sanitize::sanitize_decimal;
///
/// // Every digit the user typed survives the dot merge
/// assert_eq!(sanitize_decimal("12.3.4", None).value, "12.34");
///
/// // Letters and symbols are stripped
/// assert_eq!(sanitize_decimal("$1,250.75", None).value, "1250.75");
///
/// // Out-of-bound input keeps its text but is flagged
/// let out = sanitize_decimal("5000", Some(100.0));
/// assert_eq!(out.value, "5000");
/// assert!(!out.is_valid());
/// ```
pub fn sanitize_decimal(raw: &str, max: Option<f64>) -> SanitizedInput {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let parts: Vec<&str> = filtered.split('.').collect();
    let value = if parts.len() > 2 {
        // Keep every typed digit: "12.3.4" merges to "12.34", it does not
        // truncate to "12.3".
        format!("{}.{}", parts[0], parts[1..].concat())
    } else {
        filtered
    };

    let error = match (value.parse::<f64>(), max) {
        (Ok(parsed), Some(bound)) if parsed > bound => Some(ValidationError::OutOfRange {
            field: "amount",
            min: 0.0,
            max: bound,
        }),
        // Unparseable output ("" or ".") is a mid-typing state, not an
        // error; downstream parsing falls safe to 0.
        _ => None,
    };

    SanitizedInput { value, error }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_passes_clean_input_through() {
        assert_eq!(sanitize_decimal("12.34", None).value, "12.34");
        assert_eq!(sanitize_decimal("0", None).value, "0");
        assert_eq!(sanitize_decimal("", None).value, "");
    }

    #[test]
    fn test_strips_non_numeric_characters() {
        assert_eq!(sanitize_decimal("12a.3b4", None).value, "12.34");
        assert_eq!(sanitize_decimal("$1,250.75", None).value, "1250.75");
        assert_eq!(sanitize_decimal("abc", None).value, "");
        assert_eq!(sanitize_decimal("-5", None).value, "5");
    }

    #[test]
    fn test_multi_dot_merge_preserves_every_digit() {
        // A naive "keep the first two fragments" sanitizer truncates
        // "12.3.4" to "12.3" and silently drops a typed digit.
        assert_eq!(sanitize_decimal("12.3.4", None).value, "12.34");
        assert_eq!(sanitize_decimal("1.2.3.4", None).value, "1.234");
        assert_eq!(sanitize_decimal("...", None).value, ".");
        assert_eq!(sanitize_decimal("1..5", None).value, "1.5");
    }

    #[test]
    fn test_lone_dot_is_valid_output() {
        let out = sanitize_decimal(".", None);
        assert_eq!(out.value, ".");
        assert!(out.is_valid());
    }

    #[test]
    fn test_bound_flags_without_rewriting() {
        let out = sanitize_decimal("5000", Some(100.0));
        assert_eq!(out.value, "5000");
        assert!(!out.is_valid());
        let msg = out.error.unwrap().to_string();
        assert_eq!(msg, "amount must be between 0 and 100");
    }

    #[test]
    fn test_in_bound_value_is_valid() {
        let out = sanitize_decimal("99.99", Some(100.0));
        assert_eq!(out.value, "99.99");
        assert!(out.is_valid());
    }

    #[test]
    fn test_unparseable_is_valid_mid_typing_state() {
        assert!(sanitize_decimal("", Some(100.0)).is_valid());
        assert!(sanitize_decimal(".", Some(100.0)).is_valid());
    }

    proptest! {
        /// Sanitizing twice is the same as sanitizing once, for any input.
        #[test]
        fn prop_sanitize_is_idempotent(raw in "\\PC*") {
            let once = sanitize_decimal(&raw, None);
            let twice = sanitize_decimal(&once.value, None);
            prop_assert_eq!(once.value, twice.value);
        }

        /// Output never contains more than one dot and only digits/dots.
        #[test]
        fn prop_output_shape(raw in "\\PC*") {
            let out = sanitize_decimal(&raw, None);
            prop_assert!(out.value.chars().all(|c| c.is_ascii_digit() || c == '.'));
            prop_assert!(out.value.matches('.').count() <= 1);
        }
    }
}

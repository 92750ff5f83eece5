//! # Error Types
//!
//! Typed validation errors for calchub-core.
//!
//! ## Where Errors Fit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Error Philosophy                             │
//! │                                                                     │
//! │  The calculators NEVER return errors: disqualifying input yields    │
//! │  an all-zero result record (the "fail safe to zero" contract).      │
//! │                                                                     │
//! │  ValidationError exists for the ADVISORY path: the sanitizer and    │
//! │  validation helpers report WHY a field is out of bounds so the UI   │
//! │  can show a warning next to the field, while the calculation        │
//! │  itself falls back to zero independently.                           │
//! │                                                                     │
//! │  Flow: sanitize_decimal ──► ValidationError ──► UI warning text     │
//! │        calculate_*      ──► all-zero record  ──► UI shows $0.00     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps directly to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input does not meet the configured bounds. They are
/// advisory: the UI renders them as field warnings while the calculation
/// functions independently fail safe to zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Numeric value is outside the allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: f64, max: f64 },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// Head count is outside the allowed range.
    #[error("{field} must be between {min} and {max} people")]
    HeadCountOutOfRange { field: &'static str, min: i64, max: i64 },

    /// Value is not a finite number (NaN or infinity after parsing).
    #[error("{field} is not a valid number")]
    NotFinite { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

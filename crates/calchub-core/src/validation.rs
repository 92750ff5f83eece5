//! # Validation Module
//!
//! Input bounds checks for the calculators.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Sanitizer (per keystroke)                                 │
//! │  ├── strips invalid characters, merges extra dots                   │
//! │  └── flags out-of-bound text for an advisory field warning          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (per calculation)                             │
//! │  ├── amount in [0, max]? head count in [min, max]?                  │
//! │  └── a failure here makes the calculator fail safe to zero          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Percentages never fail: they clamp silently to their ceiling.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount.
///
/// ## Rules
/// - Must be a finite number (NaN/infinity from upstream parsing rejects)
/// - Must be non-negative (zero is fine: an empty field means 0)
/// - Must not exceed `max`
///
/// ## Example
/// ```rust
/// use calchub_core::validation::validate_amount;
///
/// assert!(validate_amount(10.99, 999_999.99).is_ok());
/// assert!(validate_amount(0.0, 999_999.99).is_ok());
/// assert!(validate_amount(-5.0, 999_999.99).is_err());
/// assert!(validate_amount(f64::NAN, 999_999.99).is_err());
/// ```
pub fn validate_amount(amount: f64, max: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite { field: "amount" });
    }

    if amount < 0.0 {
        return Err(ValidationError::Negative { field: "amount" });
    }

    if amount > max {
        return Err(ValidationError::OutOfRange {
            field: "amount",
            min: 0.0,
            max,
        });
    }

    Ok(())
}

/// Validates a head count for the bill splitter.
///
/// ## Rules
/// - Must be within `[min, max]`
/// - A count below the minimum invalidates the whole result; it does NOT
///   clamp up to the minimum
pub fn validate_people_count(count: i64, min: i64, max: i64) -> ValidationResult<()> {
    if count < min || count > max {
        return Err(ValidationError::HeadCountOutOfRange {
            field: "people",
            min,
            max,
        });
    }

    Ok(())
}

/// Clamps a percentage into `[0, max]`.
///
/// Percentages are forgiving where amounts are strict: an over-the-top tip
/// silently clamps to the ceiling instead of zeroing the result. Non-finite
/// input clamps to 0.
///
/// ## Example
/// ```rust
/// use calchub_core::validation::clamp_percentage;
///
/// assert_eq!(clamp_percentage(15.0, 300.0), 15.0);
/// assert_eq!(clamp_percentage(450.0, 300.0), 300.0);
/// assert_eq!(clamp_percentage(-10.0, 300.0), 0.0);
/// ```
pub fn clamp_percentage(percent: f64, max: f64) -> f64 {
    if !percent.is_finite() {
        return 0.0;
    }
    percent.clamp(0.0, max)
}

// =============================================================================
// Unit Tests
// =============================================================================

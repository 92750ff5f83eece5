//! # calchub-core: Pure Calculation Logic for Calculator Hub
//!
//! This crate is the **heart** of Calculator Hub. It contains the tip, split
//! and discount calculators as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Calculator Hub Architecture                     │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     Frontend (browser)                        │  │
//! │  │   Tip UI ──► Splitter UI ──► Discount UI ──► History panel    │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │ keystroke / selection events       │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                 calchub-session (state layer)                 │  │
//! │  │     settings, bounded history, labels, debounced dispatch     │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                ★ calchub-core (THIS CRATE) ★                  │  │
//! │  │                                                               │  │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │  │
//! │  │  │  money   │ │ sanitize │ │ currency │ │       calc       │  │  │
//! │  │  │  Money   │ │ decimal  │ │ registry │ │ tip/split/disc.  │  │  │
//! │  │  │  cents   │ │  fields  │ │ + format │ │    functions     │  │  │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │  │
//! │  │                                                               │  │
//! │  │       NO I/O • NO DOM • NO TIMERS • PURE FUNCTIONS            │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Minor-unit (cents) arithmetic, no floating-point drift
//! - [`sanitize`] - Free-text decimal input sanitizer
//! - [`rounding`] - Smart rounding policy (nearest half unit, upward)
//! - [`currency`] - Currency registry and display formatting
//! - [`validation`] - Input bounds checks
//! - [`calc`] - The three calculator functions
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic - same input = same output
//! 2. **No I/O**: DOM, storage and timers are FORBIDDEN here
//! 3. **Integer Money**: intermediate monetary math is in cents (i64)
//! 4. **Fail Safe to Zero**: disqualifying input yields an all-zero result
//!    record, never a panic or an error the UI has to render
//!
//! ## Example Usage
//!
//! ```rust
//! use calchub_core::calc::{calculate_tip, CalcLimits};
//! use calchub_core::currency::format_currency;
//!
//! let limits = CalcLimits::default();
//! let result = calculate_tip(100.0, 15.0, &limits);
//! assert_eq!(result.tip_amount, 15.0);
//! assert_eq!(result.total_amount, 115.0);
//!
//! // $115 rendered for a two-decimal currency
//! assert_eq!(format_currency(result.total_amount, "USD", false), "$115.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod currency;
pub mod error;
pub mod money;
pub mod rounding;
pub mod sanitize;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use calchub_core::Money` instead of
// `use calchub_core::money::Money`

pub use calc::{
    calculate_discount, calculate_split, calculate_tip, CalcLimits, DiscountResult, SplitResult,
    TipResult,
};
pub use currency::{format_currency, CurrencySpec};
pub use error::ValidationError;
pub use money::Money;
pub use rounding::apply_smart_rounding;
pub use sanitize::{sanitize_decimal, SanitizedInput};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default ceiling for any monetary input, in major units.
///
/// ## Business Reason
/// Catches fat-fingered amounts (e.g. a pasted phone number) before they
/// reach the arithmetic core. Hosts can override via [`CalcLimits`].
pub const DEFAULT_MAX_AMOUNT: f64 = 999_999.99;

/// Default ceiling for the tip percentage.
///
/// ## Business Reason
/// Generous on purpose: some venues encourage 200% "pay it forward" tips.
/// Values above the ceiling clamp silently rather than invalidating.
pub const DEFAULT_MAX_TIP_PERCENTAGE: f64 = 300.0;

/// Default ceiling for the discount percentage.
///
/// A discount over 100% would produce a negative final price.
pub const DEFAULT_MAX_DISCOUNT_PERCENTAGE: f64 = 100.0;

/// Default minimum head count for the bill splitter.
///
/// A head count below this invalidates the whole result (zero), it does
/// not clamp.
pub const DEFAULT_MIN_PEOPLE: i64 = 1;

/// Default maximum head count for the bill splitter.
pub const DEFAULT_MAX_PEOPLE: i64 = 100;

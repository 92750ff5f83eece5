//! # Money Module
//!
//! Minor-unit (cents) arithmetic for the calculators.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In binary floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A tip computed as 100.00 * 0.15 can drift to 14.999999...,         │
//! │  which formats as $15.00 one day and $14.99 the next.               │
//! │                                                                     │
//! │  OUR SOLUTION: round to integer cents at the boundary, do the       │
//! │  percentage math on the integer, convert back only for display.     │
//! │    100.00 ──► 10000 cents ──► 15% ──► 1500 cents ──► exactly 15.00  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Every conversion to cents uses **round-half-away-from-zero**
//! ([`f64::round`]), applied at the minor-unit boundary rather than at the
//! final display boundary. Bill splitting is the one exception: the
//! per-person share divides the integer cent total as a real number and is
//! rounded only when formatted (see [`crate::calc::calculate_split`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate values can go negative (discount math)
///   even though validated inputs never do
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// ## Example
/// ```rust
/// use calchub_core::money::Money;
///
/// let bill = Money::from_major_units(100.0); // $100.00
/// let tip = bill.apply_percentage(15.0);     // 1500 cents
/// let total = bill + tip;
///
/// assert_eq!(tip.cents(), 1500);
/// assert_eq!(total.to_major_units(), 115.0);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value directly from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit amount (e.g. dollars) to cents.
    ///
    /// Rounds half away from zero at the cent boundary, so a half-cent
    /// amount like `10.125` becomes `1013` cents, not `1012`.
    ///
    /// ## Example
    /// ```rust
    /// use calchub_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_units(10.99).cents(), 1099);
    /// assert_eq!(Money::from_major_units(10.125).cents(), 1013);
    /// ```
    #[inline]
    pub fn from_major_units(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Converts back to major units for display.
    ///
    /// The result is exact for any amount a calculator produces: an i64
    /// cent count up to 2^53 has an exact f64 representation.
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Applies a percentage and returns the resulting amount.
    ///
    /// The product is rounded half away from zero back to whole cents, so
    /// the rounding happens once, at the minor-unit boundary.
    ///
    /// ## Example
    /// ```rust
    /// use calchub_core::money::Money;
    ///
    /// let bill = Money::from_cents(10000);          // $100.00
    /// assert_eq!(bill.apply_percentage(15.0).cents(), 1500);
    ///
    /// // $10.99 at 18%: 1099 * 0.18 = 197.82 -> 198 cents
    /// let odd = Money::from_cents(1099);
    /// assert_eq!(odd.apply_percentage(18.0).cents(), 198);
    /// ```
    #[inline]
    pub fn apply_percentage(&self, percent: f64) -> Self {
        Money((self.0 as f64 * percent / 100.0).round() as i64)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Spec-Shaped Free Functions
// =============================================================================
// The UI glue calls these with bare primitives; they are thin aliases over
// the Money type so both styles stay in lockstep.

/// Converts a major-unit amount to integer cents (`round(amount * 100)`).
#[inline]
pub fn to_minor_units(amount: f64) -> i64 {
    Money::from_major_units(amount).cents()
}

/// Applies a percentage to a cent amount (`round(minor * percent / 100)`).
#[inline]
pub fn apply_percentage(minor: i64, percent: f64) -> i64 {
    Money::from_cents(minor).apply_percentage(percent).cents()
}

/// Converts integer cents back to a major-unit amount.
#[inline]
pub fn to_major_units(minor: i64) -> f64 {
    Money::from_cents(minor).to_major_units()
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a plain `$x.yy` debug format.
///
/// This is for logs and test output. Use [`crate::currency::format_currency`]
/// for actual UI display, which handles per-currency symbols and grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

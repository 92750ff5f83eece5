//! # Calculator Functions
//!
//! The three calculators: tip, bill split, discount.
//!
//! ## Fail Safe to Zero
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Any disqualifying input short-circuits to an ALL-ZERO result:      │
//! │                                                                     │
//! │    negative amount        ──►  { 0, 0 }                             │
//! │    amount over the max    ──►  { 0, 0 }                             │
//! │    head count below min   ──►  { 0, 0 }                             │
//! │    NaN from a bad parse   ──►  { 0, 0 }                             │
//! │                                                                     │
//! │  The display layer relies on this: it always receives a number it   │
//! │  can format, never an error and never NaN. Percentages are the      │
//! │  exception - they clamp silently instead of invalidating.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function is stateless and idempotent; results are recomputed from
//! scratch on each call and never cached.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{clamp_percentage, validate_amount, validate_people_count};
use crate::{
    DEFAULT_MAX_AMOUNT, DEFAULT_MAX_DISCOUNT_PERCENTAGE, DEFAULT_MAX_PEOPLE,
    DEFAULT_MAX_TIP_PERCENTAGE, DEFAULT_MIN_PEOPLE,
};

// =============================================================================
// Calculation Limits
// =============================================================================

/// Bounds for every calculator input, threaded explicitly into each call.
///
/// This replaces ambient "current settings" state: a host constructs one
/// (usually [`CalcLimits::default`]) and passes it everywhere, which keeps
/// the calculators testable without any UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalcLimits {
    /// Ceiling for any monetary input, in major units.
    pub max_bill: f64,

    /// Tip percentages clamp into `[0, max_tip_percentage]`.
    pub max_tip_percentage: f64,

    /// Discount percentages clamp into `[0, max_discount_percentage]`.
    pub max_discount_percentage: f64,

    /// Head counts below this invalidate the split result entirely.
    pub min_people: i64,

    /// Head counts above this invalidate the split result entirely.
    pub max_people: i64,
}

impl Default for CalcLimits {
    fn default() -> Self {
        CalcLimits {
            max_bill: DEFAULT_MAX_AMOUNT,
            max_tip_percentage: DEFAULT_MAX_TIP_PERCENTAGE,
            max_discount_percentage: DEFAULT_MAX_DISCOUNT_PERCENTAGE,
            min_people: DEFAULT_MIN_PEOPLE,
            max_people: DEFAULT_MAX_PEOPLE,
        }
    }
}

// =============================================================================
// Result Records
// =============================================================================

/// Output of [`calculate_tip`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TipResult {
    /// The tip, in major units.
    pub tip_amount: f64,

    /// Bill plus tip, in major units.
    pub total_amount: f64,
}

/// Output of [`calculate_split`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    /// The tip on the whole bill, in major units.
    pub total_tip: f64,

    /// Each person's share, in major units. May carry fractional cents
    /// when the total does not divide evenly; rounding happens at display.
    pub per_person: f64,
}

/// Output of [`calculate_discount`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResult {
    /// How much the discount saves, in major units.
    pub amount_saved: f64,

    /// Original price minus the saving, in major units.
    pub final_price: f64,
}

// =============================================================================
// Tip Calculator
// =============================================================================

/// Computes tip and total for a bill.
///
/// The tip percentage comes from either a preset choice or the free-text
/// custom field; the host resolves which one is active before calling (a
/// selected preset always overrides the custom text). The percentage clamps
/// into `[0, limits.max_tip_percentage]`; a disqualifying bill amount fails
/// safe to zero.
///
/// ## Example
/// ```rust
/// use calchub_core::calc::{calculate_tip, CalcLimits};
///
/// let limits = CalcLimits::default();
///
/// let result = calculate_tip(100.0, 15.0, &limits);
/// assert_eq!(result.tip_amount, 15.0);
/// assert_eq!(result.total_amount, 115.0);
///
/// // Negative bills fail safe to zero
/// let result = calculate_tip(-5.0, 15.0, &limits);
/// assert_eq!(result.total_amount, 0.0);
/// ```
pub fn calculate_tip(bill_amount: f64, tip_percentage: f64, limits: &CalcLimits) -> TipResult {
    if validate_amount(bill_amount, limits.max_bill).is_err() {
        return TipResult::default();
    }

    let tip_percentage = clamp_percentage(tip_percentage, limits.max_tip_percentage);

    let bill = Money::from_major_units(bill_amount);
    let tip = bill.apply_percentage(tip_percentage);
    let total = bill + tip;

    TipResult {
        tip_amount: tip.to_major_units(),
        total_amount: total.to_major_units(),
    }
}

// =============================================================================
// Bill Splitter
// =============================================================================

/// Splits a bill (optionally including the tip) across a head count.
///
/// ## Per-Person Rounding Policy
/// The per-person share divides the integer cent total by the head count as
/// a real number; it is NOT re-rounded to whole cents here. Rounding happens
/// once, at display, in the currency formatter. Splitting $10.00 three ways
/// therefore yields 3.333... per person, which formats as $3.33 - the one
/// lost cent stays visible to the caller instead of silently vanishing in
/// the middle of the pipeline.
///
/// ## Example
/// ```rust
/// use calchub_core::calc::{calculate_split, CalcLimits};
///
/// let limits = CalcLimits::default();
///
/// let result = calculate_split(100.0, 15.0, 4, true, &limits);
/// assert_eq!(result.total_tip, 15.0);
/// assert_eq!(result.per_person, 28.75);
///
/// // Head count below the minimum invalidates the whole result
/// let result = calculate_split(100.0, 15.0, 0, true, &limits);
/// assert_eq!(result.per_person, 0.0);
/// ```
pub fn calculate_split(
    total_bill: f64,
    tip_percentage: f64,
    people_count: i64,
    include_tip: bool,
    limits: &CalcLimits,
) -> SplitResult {
    if validate_amount(total_bill, limits.max_bill).is_err()
        || validate_people_count(people_count, limits.min_people, limits.max_people).is_err()
    {
        return SplitResult::default();
    }

    let tip_percentage = clamp_percentage(tip_percentage, limits.max_tip_percentage);

    let bill = Money::from_major_units(total_bill);
    let tip = bill.apply_percentage(tip_percentage);

    let split_cents = if include_tip { (bill + tip).cents() } else { bill.cents() };
    let per_person = split_cents as f64 / people_count as f64 / 100.0;

    SplitResult {
        total_tip: tip.to_major_units(),
        per_person,
    }
}

// =============================================================================
// Discount Calculator
// =============================================================================

/// Computes the saving and final price for a percentage discount.
///
/// The discount clamps into `[0, limits.max_discount_percentage]`; with the
/// default ceiling of 100% the final price can never go negative.
///
/// ## Example
/// ```rust
/// use calchub_core::calc::{calculate_discount, CalcLimits};
///
/// let limits = CalcLimits::default();
///
/// let result = calculate_discount(100.0, 10.0, &limits);
/// assert_eq!(result.amount_saved, 10.0);
/// assert_eq!(result.final_price, 90.0);
/// ```
pub fn calculate_discount(
    original_price: f64,
    discount_percentage: f64,
    limits: &CalcLimits,
) -> DiscountResult {
    if validate_amount(original_price, limits.max_bill).is_err() {
        return DiscountResult::default();
    }

    let discount_percentage =
        clamp_percentage(discount_percentage, limits.max_discount_percentage);

    let price = Money::from_major_units(original_price);
    let saved = price.apply_percentage(discount_percentage);
    let final_price = price - saved;

    DiscountResult {
        amount_saved: saved.to_major_units(),
        final_price: final_price.to_major_units(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::format_currency;

    fn limits() -> CalcLimits {
        CalcLimits::default()
    }

    // ---- Tip -----------------------------------------------------------

    #[test]
    fn test_tip_basic() {
        let result = calculate_tip(100.0, 15.0, &limits());
        assert_eq!(result.tip_amount, 15.0);
        assert_eq!(result.total_amount, 115.0);
    }

    #[test]
    fn test_tip_total_is_bill_plus_tip() {
        // Verified in the cents domain, where equality is exact.
        use crate::money::to_minor_units;

        for (bill, pct) in [(42.37, 18.0), (0.01, 15.0), (999.99, 7.5), (10.0, 0.0)] {
            let result = calculate_tip(bill, pct, &limits());
            let bill_cents = to_minor_units(bill);
            let expected_tip_cents = (bill_cents as f64 * pct / 100.0).round() as i64;

            assert_eq!(to_minor_units(result.tip_amount), expected_tip_cents);
            assert_eq!(
                to_minor_units(result.total_amount),
                bill_cents + expected_tip_cents
            );
        }
    }

    #[test]
    fn test_tip_zero_bill() {
        let result = calculate_tip(0.0, 15.0, &limits());
        assert_eq!(result, TipResult::default());
    }

    #[test]
    fn test_tip_negative_bill_fails_safe() {
        let result = calculate_tip(-5.0, 15.0, &limits());
        assert_eq!(result.tip_amount, 0.0);
        assert_eq!(result.total_amount, 0.0);
    }

    #[test]
    fn test_tip_over_max_bill_fails_safe() {
        let result = calculate_tip(limits().max_bill + 1.0, 15.0, &limits());
        assert_eq!(result, TipResult::default());
    }

    #[test]
    fn test_tip_nan_fails_safe() {
        let result = calculate_tip(f64::NAN, 15.0, &limits());
        assert_eq!(result, TipResult::default());
    }

    #[test]
    fn test_tip_large_percentage_allowed_up_to_ceiling() {
        // 200% is legal under the default 300% ceiling
        let result = calculate_tip(100.0, 200.0, &limits());
        assert_eq!(result.tip_amount, 200.0);
        assert_eq!(result.total_amount, 300.0);
    }

    #[test]
    fn test_tip_percentage_clamps_silently() {
        let result = calculate_tip(100.0, 450.0, &limits());
        assert_eq!(result.tip_amount, 300.0); // clamped to the ceiling

        let result = calculate_tip(100.0, -20.0, &limits());
        assert_eq!(result.tip_amount, 0.0);
        assert_eq!(result.total_amount, 100.0); // bill survives, tip is 0
    }

    #[test]
    fn test_tip_no_floating_point_drift() {
        // The motivating case for cents math: must be exactly 15, not
        // 14.999999...
        let result = calculate_tip(100.0, 15.0, &limits());
        assert_eq!(result.tip_amount.to_bits(), 15.0_f64.to_bits());
    }

    // ---- Split ---------------------------------------------------------

    #[test]
    fn test_split_including_tip() {
        let result = calculate_split(100.0, 15.0, 4, true, &limits());
        assert_eq!(result.total_tip, 15.0);
        assert_eq!(result.per_person, 28.75);
    }

    #[test]
    fn test_split_excluding_tip() {
        let result = calculate_split(100.0, 15.0, 4, false, &limits());
        assert_eq!(result.total_tip, 15.0);
        assert_eq!(result.per_person, 25.0);
    }

    #[test]
    fn test_split_single_person() {
        let result = calculate_split(100.0, 15.0, 1, true, &limits());
        assert_eq!(result.per_person, 115.0);
    }

    #[test]
    fn test_split_zero_people_invalidates() {
        let result = calculate_split(100.0, 15.0, 0, true, &limits());
        assert_eq!(result, SplitResult::default());
    }

    #[test]
    fn test_split_over_max_people_invalidates() {
        let result = calculate_split(100.0, 15.0, limits().max_people + 1, true, &limits());
        assert_eq!(result, SplitResult::default());
    }

    #[test]
    fn test_split_uneven_division_rounds_only_at_display() {
        // $10.00 / 3: the share carries fractional cents...
        let result = calculate_split(10.0, 0.0, 3, false, &limits());
        assert!((result.per_person - 10.0 / 3.0).abs() < 1e-9);

        // ...and the formatter settles it at $3.33 (the lost cent is a
        // display concern, not an arithmetic one)
        assert_eq!(format_currency(result.per_person, "USD", false), "$3.33");
    }

    #[test]
    fn test_split_even_division_is_exact() {
        let result = calculate_split(99.0, 0.0, 3, false, &limits());
        assert_eq!(result.per_person, 33.0);
    }

    #[test]
    fn test_split_negative_bill_fails_safe() {
        let result = calculate_split(-1.0, 15.0, 2, true, &limits());
        assert_eq!(result, SplitResult::default());
    }

    // ---- Discount ------------------------------------------------------

    #[test]
    fn test_discount_basic() {
        let result = calculate_discount(100.0, 10.0, &limits());
        assert_eq!(result.amount_saved, 10.0);
        assert_eq!(result.final_price, 90.0);

        let result = calculate_discount(200.0, 50.0, &limits());
        assert_eq!(result.amount_saved, 100.0);
        assert_eq!(result.final_price, 100.0);
    }

    #[test]
    fn test_discount_full() {
        let result = calculate_discount(100.0, 100.0, &limits());
        assert_eq!(result.amount_saved, 100.0);
        assert_eq!(result.final_price, 0.0);
    }

    #[test]
    fn test_discount_zero_price() {
        let result = calculate_discount(0.0, 50.0, &limits());
        assert_eq!(result.amount_saved, 0.0);
        assert_eq!(result.final_price, 0.0);
    }

    #[test]
    fn test_discount_clamps_over_hundred() {
        // 150% clamps to 100%; the final price bottoms out at zero rather
        // than going negative
        let result = calculate_discount(80.0, 150.0, &limits());
        assert_eq!(result.amount_saved, 80.0);
        assert_eq!(result.final_price, 0.0);
    }

    #[test]
    fn test_discount_negative_price_fails_safe() {
        let result = calculate_discount(-10.0, 50.0, &limits());
        assert_eq!(result, DiscountResult::default());
    }

    #[test]
    fn test_discount_cent_rounding() {
        // $19.99 at 15%: 1999 * 0.15 = 299.85 -> 300 cents saved
        let result = calculate_discount(19.99, 15.0, &limits());
        assert_eq!(result.amount_saved, 3.0);
        assert_eq!(result.final_price, 16.99);
    }

    // ---- Cross-cutting -------------------------------------------------

    #[test]
    fn test_result_records_serialize_in_camel_case() {
        // The browser host consumes these keys verbatim.
        let result = calculate_tip(100.0, 15.0, &limits());
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["tipAmount"], serde_json::json!(15.0));
        assert_eq!(json["totalAmount"], serde_json::json!(115.0));

        let result = calculate_split(100.0, 15.0, 4, true, &limits());
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["perPerson"], serde_json::json!(28.75));

        let result = calculate_discount(100.0, 10.0, &limits());
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["finalPrice"], serde_json::json!(90.0));
    }

    #[test]
    fn test_results_are_deterministic() {
        let a = calculate_split(73.21, 12.5, 7, true, &limits());
        let b = calculate_split(73.21, 12.5, 7, true, &limits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_limits_are_honored() {
        let tight = CalcLimits {
            max_bill: 50.0,
            max_tip_percentage: 20.0,
            ..CalcLimits::default()
        };

        assert_eq!(calculate_tip(60.0, 10.0, &tight), TipResult::default());
        assert_eq!(calculate_tip(40.0, 25.0, &tight).tip_amount, 8.0); // clamped to 20%
    }
}

//! # Smart Rounding Policy
//!
//! Optional display-time rounding to the nearest half unit, always upward.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  SMART ROUNDING (opt-in)                                            │
//! │                                                                     │
//! │    10.30 ──► 10.50        10.50 ──► 10.50 (already on a half)       │
//! │    10.70 ──► 11.00        10.01 ──► 10.50                           │
//! │                                                                     │
//! │  Always rounds UP to the next 0.50 - never down, never to-nearest.  │
//! │  Applied only at final display formatting, after all arithmetic;    │
//! │  it must never feed back into a calculation.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

/// Snaps `amount` up to the nearest half unit when `enabled`; identity
/// otherwise.
///
/// ## Example
/// ```rust
/// use calchub_core::rounding::apply_smart_rounding;
///
/// assert_eq!(apply_smart_rounding(10.3, true), 10.5);
/// assert_eq!(apply_smart_rounding(10.7, true), 11.0);
/// assert_eq!(apply_smart_rounding(10.3, false), 10.3);
/// ```
#[inline]
pub fn apply_smart_rounding(amount: f64, enabled: bool) -> f64 {
    if !enabled {
        return amount;
    }
    (amount * 2.0).ceil() / 2.0
}

// =============================================================================
// Unit Tests
// =============================================================================

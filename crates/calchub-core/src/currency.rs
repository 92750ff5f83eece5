//! # Currency Formatter
//!
//! Renders a numeric amount as a display string for a given currency code.
//!
//! ## This Is a Formatting Layer, Not an Exchange-Rate Layer
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Switching currency NEVER changes the underlying value, only its    │
//! │  presentation:                                                      │
//! │                                                                     │
//! │    1234.5  + USD  ──►  "$1234.50"                                   │
//! │    1234.5  + EUR  ──►  "€1234.50"                                   │
//! │    1234.5  + CLP  ──►  "$1.235"      (0 decimals, es-CL grouping)   │
//! │                                                                     │
//! │  Unknown codes fall back to a default "$" two-decimal format -      │
//! │  the formatter fails soft and never returns an error.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Smart rounding, when enabled, is applied here (final display), after all
//! arithmetic - see [`crate::rounding`].

use serde::Serialize;

use crate::rounding::apply_smart_rounding;

// =============================================================================
// Currency Spec
// =============================================================================

/// Immutable descriptor for one supported currency.
///
/// The registry is a process-wide constant; specs are never created at
/// runtime and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencySpec {
    /// ISO 4217 code ("USD", "CLP", ...).
    pub code: &'static str,

    /// Display symbol prefixed to the amount.
    pub symbol: &'static str,

    /// Fraction digits rendered for this currency (0 for CLP).
    pub decimal_places: u8,

    /// BCP 47 locale tag the grouping convention comes from.
    pub locale: &'static str,

    /// Thousands separator used when `decimal_places == 0`.
    pub group_separator: char,
}

/// Fallback presentation for unknown currency codes.
const FALLBACK: CurrencySpec = CurrencySpec {
    code: "???",
    symbol: "$",
    decimal_places: 2,
    locale: "en-US",
    group_separator: ',',
};

/// The fixed currency registry.
///
/// The set matches the most complete revision of the product: the three
/// launch currencies (CLP, USD, EUR) plus the later Latin-American and UK
/// additions.
pub const CURRENCIES: [CurrencySpec; 6] = [
    CurrencySpec { code: "USD", symbol: "$", decimal_places: 2, locale: "en-US", group_separator: ',' },
    CurrencySpec { code: "EUR", symbol: "€", decimal_places: 2, locale: "es-ES", group_separator: '.' },
    CurrencySpec { code: "CLP", symbol: "$", decimal_places: 0, locale: "es-CL", group_separator: '.' },
    CurrencySpec { code: "MXN", symbol: "$", decimal_places: 2, locale: "es-MX", group_separator: ',' },
    CurrencySpec { code: "GBP", symbol: "£", decimal_places: 2, locale: "en-GB", group_separator: ',' },
    CurrencySpec { code: "ARS", symbol: "$", decimal_places: 2, locale: "es-AR", group_separator: '.' },
];

/// Looks up a currency spec by code (case-insensitive).
pub fn lookup(code: &str) -> Option<&'static CurrencySpec> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats `amount` for display under `currency_code`.
///
/// Applies the smart rounding policy first, then renders:
/// - zero-decimal currencies: rounded to the nearest whole unit with locale
///   thousands grouping
/// - everything else: fixed `decimal_places` fraction digits, no grouping
///
/// Unknown codes fall back to a plain `$` two-decimal presentation; this
/// function never fails.
///
/// ## Example
/// ```rust
/// use calchub_core::currency::format_currency;
///
/// assert_eq!(format_currency(100.5, "USD", false), "$100.50");
/// assert_eq!(format_currency(100.5, "EUR", false), "€100.50");
/// assert_eq!(format_currency(1234567.0, "CLP", false), "$1.234.567");
/// ```
pub fn format_currency(amount: f64, currency_code: &str, smart_rounding: bool) -> String {
    let spec = lookup(currency_code).unwrap_or(&FALLBACK);
    let amount = apply_smart_rounding(amount, smart_rounding);

    if spec.decimal_places == 0 {
        let whole = amount.round() as i64;
        format!("{}{}", spec.symbol, group_thousands(whole, spec.group_separator))
    } else {
        format!("{}{:.*}", spec.symbol, spec.decimal_places as usize, amount)
    }
}

/// Renders an integer with thousands grouping ("1234567" -> "1.234.567").
fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_currencies_always_show_two_digits() {
        assert_eq!(format_currency(100.5, "USD", false), "$100.50");
        assert_eq!(format_currency(100.5, "EUR", false), "€100.50");
        assert_eq!(format_currency(100.5, "GBP", false), "£100.50");
        assert_eq!(format_currency(100.5, "MXN", false), "$100.50");
        assert_eq!(format_currency(100.5, "ARS", false), "$100.50");
        assert_eq!(format_currency(0.0, "USD", false), "$0.00");
    }

    #[test]
    fn test_clp_rounds_to_whole_units_with_grouping() {
        assert_eq!(format_currency(1000.99, "CLP", false), "$1.001");
        assert_eq!(format_currency(1234567.0, "CLP", false), "$1.234.567");
        assert_eq!(format_currency(999.0, "CLP", false), "$999");
        assert_eq!(format_currency(0.4, "CLP", false), "$0");
    }

    #[test]
    fn test_unknown_code_falls_back_softly() {
        assert_eq!(format_currency(12.3, "XYZ", false), "$12.30");
        assert_eq!(format_currency(12.0, "", false), "$12.00");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("usd").unwrap().code, "USD");
        assert_eq!(lookup("Clp").unwrap().decimal_places, 0);
        assert!(lookup("BTC").is_none());
    }

    #[test]
    fn test_smart_rounding_applies_before_rendering() {
        assert_eq!(format_currency(10.3, "USD", true), "$10.50");
        assert_eq!(format_currency(10.7, "USD", true), "$11.00");
        // For a zero-decimal currency the half unit then rounds up whole
        assert_eq!(format_currency(10.3, "CLP", true), "$11");
    }

    #[test]
    fn test_currency_switch_relabels_only() {
        // Same value, different presentation - no conversion anywhere.
        let value = 1234.5;
        assert_eq!(format_currency(value, "USD", false), "$1234.50");
        assert_eq!(format_currency(value, "EUR", false), "€1234.50");
        assert_eq!(format_currency(value, "CLP", false), "$1.235");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(1234567, ','), "1,234,567");
        assert_eq!(group_thousands(-45000, '.'), "-45.000");
    }
}

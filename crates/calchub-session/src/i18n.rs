//! # Translation Labels
//!
//! Static UI label lookup for the two supported languages. Spanish is the
//! default (the product launched for a Chilean audience); English came with
//! the first international revision.
//!
//! Keys are a closed enum rather than strings, so a missing translation is
//! a compile error here instead of a blank label in production.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

// =============================================================================
// Language
// =============================================================================

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish (launch language).
    #[default]
    Es,
    /// English.
    En,
}

impl Language {
    /// The two-letter code the host stores and the selector shows.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(SessionError::UnsupportedLanguage(other.to_string())),
        }
    }
}

// =============================================================================
// Label Keys
// =============================================================================

/// Every translatable label in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    AppTitle,
    TipCalculator,
    BillSplitter,
    DiscountCalculator,
    BillAmount,
    SelectTip,
    TipAmount,
    Total,
    TotalBill,
    TipPercentage,
    NumberOfPeople,
    IncludeTip,
    TotalTip,
    TotalPerPerson,
    OriginalPrice,
    DiscountPercentage,
    AmountSaved,
    FinalPrice,
    SystemTheme,
    LightTheme,
    DarkTheme,
}

/// Returns the label text for `key` in `lang`.
///
/// ## Example
/// ```rust
/// use calchub_session::i18n::{label, LabelKey, Language};
///
/// assert_eq!(label(Language::En, LabelKey::TipCalculator), "Tip Calculator");
/// assert_eq!(label(Language::Es, LabelKey::TipCalculator), "Calculadora de Propina");
/// ```
pub fn label(lang: Language, key: LabelKey) -> &'static str {
    use LabelKey::*;

    match lang {
        Language::Es => match key {
            AppTitle => "Calculator Hub",
            TipCalculator => "Calculadora de Propina",
            BillSplitter => "Divisor de Cuentas",
            DiscountCalculator => "Calculadora de Descuentos",
            BillAmount => "Monto de la Cuenta",
            SelectTip => "Seleccionar Propina %",
            TipAmount => "Monto de la Propina",
            Total => "Total",
            TotalBill => "Cuenta Total",
            TipPercentage => "Propina %",
            NumberOfPeople => "Número de Personas",
            IncludeTip => "Incluir propina en la división",
            TotalTip => "Propina Total",
            TotalPerPerson => "Total por Persona",
            OriginalPrice => "Precio Original",
            DiscountPercentage => "Descuento (%)",
            AmountSaved => "Monto Ahorrado",
            FinalPrice => "Precio Final",
            SystemTheme => "Sistema",
            LightTheme => "Claro",
            DarkTheme => "Oscuro",
        },
        Language::En => match key {
            AppTitle => "Calculator Hub",
            TipCalculator => "Tip Calculator",
            BillSplitter => "Bill Splitter",
            DiscountCalculator => "Discount Calculator",
            BillAmount => "Bill Amount",
            SelectTip => "Select Tip %",
            TipAmount => "Tip Amount",
            Total => "Total",
            TotalBill => "Total Bill",
            TipPercentage => "Tip %",
            NumberOfPeople => "Number of People",
            IncludeTip => "Include tip in split",
            TotalTip => "Total Tip",
            TotalPerPerson => "Total per person",
            OriginalPrice => "Original Price",
            DiscountPercentage => "Discount (%)",
            AmountSaved => "Amount Saved",
            FinalPrice => "Final Price",
            SystemTheme => "System",
            LightTheme => "Light",
            DarkTheme => "Dark",
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn test_unsupported_language() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err, SessionError::UnsupportedLanguage("fr".to_string()));
    }

    #[test]
    fn test_labels_differ_by_language() {
        assert_eq!(label(Language::Es, LabelKey::BillAmount), "Monto de la Cuenta");
        assert_eq!(label(Language::En, LabelKey::BillAmount), "Bill Amount");
        // The brand name does not translate
        assert_eq!(
            label(Language::Es, LabelKey::AppTitle),
            label(Language::En, LabelKey::AppTitle)
        );
    }
}

//! # Session Settings
//!
//! The process-wide UI preferences: language, currency, theme and the smart
//! rounding toggle.
//!
//! ## Thread Safety
//! Settings are wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple host callbacks may read/change settings concurrently
//! 2. Only one change should apply at a time
//! 3. Reads take a snapshot and release the lock immediately
//!
//! The calculators never read this state: the host snapshots the settings
//! and passes the relevant pieces (currency code, rounding flag) into the
//! pure functions as arguments.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use calchub_core::currency;

use crate::error::{SessionError, SessionResult};
use crate::i18n::Language;

// =============================================================================
// Theme
// =============================================================================

/// UI theme preference.
///
/// `System` defers to the host's OS/browser preference; the host resolves
/// it to light or dark at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

// =============================================================================
// Settings
// =============================================================================

/// A snapshot of the session preferences.
///
/// Defaults mirror the product's boot state: Spanish, Chilean pesos, smart
/// rounding off, system theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Selected UI language.
    pub language: Language,

    /// Selected currency code (always a registry code).
    pub currency: String,

    /// Whether display amounts snap up to the nearest half unit.
    pub smart_rounding: bool,

    /// Theme preference.
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: Language::Es,
            currency: "CLP".to_string(),
            smart_rounding: false,
            theme: Theme::System,
        }
    }
}

// =============================================================================
// Shared Settings
// =============================================================================

/// Shared, mutable session settings.
///
/// Cloning is cheap and every clone points at the same state, so a host can
/// hand one to each UI callback.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<Mutex<Settings>>,
}

impl SharedSettings {
    /// Creates shared settings from an initial snapshot (e.g. restored from
    /// the host's local storage).
    pub fn new(initial: Settings) -> Self {
        SharedSettings {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    /// Returns a snapshot of the current settings.
    pub fn snapshot(&self) -> Settings {
        self.inner.lock().expect("settings lock poisoned").clone()
    }

    /// Switches the UI language.
    pub fn set_language(&self, language: Language) {
        let mut settings = self.inner.lock().expect("settings lock poisoned");
        debug!(from = %settings.language, to = %language, "language changed");
        settings.language = language;
    }

    /// Switches the display currency.
    ///
    /// The code must exist in the currency registry; switching currency only
    /// relabels amounts, it never converts them.
    pub fn set_currency(&self, code: &str) -> SessionResult<()> {
        let spec = currency::lookup(code)
            .ok_or_else(|| SessionError::UnknownCurrency(code.to_string()))?;

        let mut settings = self.inner.lock().expect("settings lock poisoned");
        debug!(from = %settings.currency, to = %spec.code, "currency changed");
        settings.currency = spec.code.to_string();
        Ok(())
    }

    /// Toggles the smart rounding policy.
    pub fn set_smart_rounding(&self, enabled: bool) {
        let mut settings = self.inner.lock().expect("settings lock poisoned");
        debug!(enabled, "smart rounding changed");
        settings.smart_rounding = enabled;
    }

    /// Switches the theme preference.
    pub fn set_theme(&self, theme: Theme) {
        let mut settings = self.inner.lock().expect("settings lock poisoned");
        debug!(?theme, "theme changed");
        settings.theme = theme;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_boot_state() {
        let settings = Settings::default();
        assert_eq!(settings.language, Language::Es);
        assert_eq!(settings.currency, "CLP");
        assert!(!settings.smart_rounding);
        assert_eq!(settings.theme, Theme::System);
    }

    #[test]
    fn test_set_currency_normalizes_case() {
        let shared = SharedSettings::default();
        shared.set_currency("usd").unwrap();
        assert_eq!(shared.snapshot().currency, "USD");
    }

    #[test]
    fn test_set_currency_rejects_unknown_codes() {
        let shared = SharedSettings::default();
        let err = shared.set_currency("BTC").unwrap_err();
        assert_eq!(err, SessionError::UnknownCurrency("BTC".to_string()));
        // State is untouched after a rejected change
        assert_eq!(shared.snapshot().currency, "CLP");
    }

    #[test]
    fn test_clones_share_state() {
        let a = SharedSettings::default();
        let b = a.clone();

        a.set_smart_rounding(true);
        a.set_language(Language::En);
        a.set_theme(Theme::Dark);

        let seen = b.snapshot();
        assert!(seen.smart_rounding);
        assert_eq!(seen.language, Language::En);
        assert_eq!(seen.theme, Theme::Dark);
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = Settings {
            language: Language::En,
            currency: "GBP".to_string(),
            smart_rounding: true,
            theme: Theme::Light,
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"smartRounding\":true"));

        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}

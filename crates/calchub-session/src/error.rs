//! # Session Errors
//!
//! Errors for session state operations. Unlike the core calculators (which
//! fail safe to zero), state changes can be rejected: setting an unknown
//! currency should surface to the host instead of silently landing on the
//! formatter's fallback.

use thiserror::Error;

/// Session state errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The requested currency code is not in the registry.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The requested language code is not supported.
    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),

    /// A calculation result could not be serialized for the history.
    #[error("history entry could not be recorded: {0}")]
    HistorySerialization(String),
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;

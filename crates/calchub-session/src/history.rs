//! # Calculation History
//!
//! A bounded, newest-first list of recent calculations.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  calculate_tip(...) ──► TipResult                                   │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  history.record(Tip, &result)   newest entry goes in front          │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  [ tip, split, tip, discount, tip ]   ← capped at 5 entries;        │
//! │        │                                the oldest falls off        │
//! │        ▼                                                            │
//! │  host serializes the whole list to local storage, restores it on    │
//! │  the next boot via serde                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries carry the result record as a `serde_json::Value` so one list can
//! hold all three calculator types without an enum per result shape.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{SessionError, SessionResult};

/// Maximum entries kept; the oldest entry is dropped beyond this.
pub const MAX_HISTORY_ENTRIES: usize = 5;

// =============================================================================
// History Entry
// =============================================================================

/// Which calculator produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    Tip,
    Split,
    Discount,
}

/// One recorded calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique id (UUID v4), stable across persistence round-trips.
    pub id: Uuid,

    /// Which calculator produced this entry.
    pub kind: CalculationKind,

    /// The serialized result record (e.g. `{"tipAmount":15.0,...}`).
    pub data: serde_json::Value,

    /// When the calculation was recorded (UTC).
    pub recorded_at: DateTime<Utc>,
}

// =============================================================================
// Calculation History
// =============================================================================

/// Bounded list of recent calculations, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: VecDeque<HistoryEntry>,
}

impl CalculationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        CalculationHistory::default()
    }

    /// Records a calculation result, evicting the oldest entry when full.
    ///
    /// ## Example
    /// ```rust
    /// use calchub_core::calc::{calculate_tip, CalcLimits};
    /// use calchub_session::history::{CalculationHistory, CalculationKind};
    ///
    /// let mut history = CalculationHistory::new();
    /// let result = calculate_tip(100.0, 15.0, &CalcLimits::default());
    ///
    /// history.record(CalculationKind::Tip, &result).unwrap();
    /// assert_eq!(history.len(), 1);
    /// ```
    pub fn record<T: Serialize>(&mut self, kind: CalculationKind, result: &T) -> SessionResult<()> {
        let data = serde_json::to_value(result)
            .map_err(|e| SessionError::HistorySerialization(e.to_string()))?;

        self.entries.push_front(HistoryEntry {
            id: Uuid::new_v4(),
            kind,
            data,
            recorded_at: Utc::now(),
        });
        self.entries.truncate(MAX_HISTORY_ENTRIES);

        debug!(?kind, total = self.entries.len(), "calculation recorded");
        Ok(())
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of stored entries (at most [`MAX_HISTORY_ENTRIES`]).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

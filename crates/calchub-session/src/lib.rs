//! # calchub-session: Session State for Calculator Hub
//!
//! The stateful layer between the pure calculators in `calchub-core` and a
//! UI host. It owns the only shared mutable state in the system:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       calchub-session                               │
//! │                                                                     │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌──────────────┐   │
//! │  │  settings  │  │  history   │  │    i18n    │  │   debounce   │   │
//! │  │ language   │  │ bounded 5- │  │ label map  │  │ quiet-period │   │
//! │  │ currency   │  │ entry list │  │  ES / EN   │  │ before a     │   │
//! │  │ theme      │  │ of results │  │            │  │ recalc runs  │   │
//! │  │ rounding   │  │            │  │            │  │              │   │
//! │  └────────────┘  └────────────┘  └────────────┘  └──────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host remains responsible for rendering, event wiring and actual
//! persistence (e.g. browser local storage); it serializes the types here
//! as JSON in both directions.

pub mod debounce;
pub mod error;
pub mod history;
pub mod i18n;
pub mod settings;

pub use debounce::Debouncer;
pub use error::SessionError;
pub use history::{CalculationHistory, CalculationKind, HistoryEntry, MAX_HISTORY_ENTRIES};
pub use i18n::{label, LabelKey, Language};
pub use settings::{Settings, SharedSettings, Theme};

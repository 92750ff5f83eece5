//! # Debounced Recalculation
//!
//! Rapid successive keystrokes coalesce into a single recalculation after a
//! short quiet period. This only affects *when* the pure calculators run,
//! never their result; invoked directly they stay synchronous and
//! instantaneous, which is what the tests rely on.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  keystroke ──► call(recalc)     timer armed (300ms)                 │
//! │  keystroke ──► call(recalc)     previous timer ABORTED, re-armed    │
//! │  keystroke ──► call(recalc)     previous timer ABORTED, re-armed    │
//! │      (quiet for 300ms)                                              │
//! │                        ──► recalc runs exactly once                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Default quiet period before a pending recalculation fires.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Runs a closure only after a quiet period with no newer call.
///
/// Each [`Debouncer::call`] aborts the previously scheduled closure (if it
/// has not fired yet) and arms a fresh timer. Dropping the debouncer cancels
/// any pending closure.
///
/// Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(quiet_period: Duration) -> Self {
        Debouncer {
            quiet_period,
            pending: None,
        }
    }

    /// Schedules `f` to run after the quiet period, cancelling any closure
    /// scheduled earlier that has not fired yet.
    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let quiet_period = self.quiet_period;
        trace!(?quiet_period, "debounce timer armed");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            f();
        }));
    }

    /// Cancels the pending closure, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

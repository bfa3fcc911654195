//! Delayed-callback contract for polling call sites.
//!
//! Retry and polling helpers elsewhere in the pipeline invoke a
//! caller-supplied callback once per attempt, handing it the observable
//! state of the wait: the current wall-clock time and the zero-based
//! invocation index. Only the contract lives here; scheduling is owned by
//! the callers.

use chrono::{DateTime, Utc};

/// Observable wait state passed to a delayed callback on each invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackStats {
    /// Wall-clock time at the moment of invocation.
    pub current_time: DateTime<Utc>,

    /// Zero-based invocation index.
    pub invocation: u32,
}

/// A callback invoked on a delay schedule.
///
/// Implemented for any `FnMut(&CallbackStats) -> R`, so call sites pass
/// plain closures.
pub trait DelayedCallback<R> {
    /// Produce this attempt's result from the current wait state.
    fn call(&mut self, stats: &CallbackStats) -> R;
}

impl<R, F> DelayedCallback<R> for F
where
    F: FnMut(&CallbackStats) -> R,
{
    fn call(&mut self, stats: &CallbackStats) -> R {
        self(stats)
    }
}

//! Debounced container re-measurement.

use std::time::{Duration, Instant};

/// Holds at most one pending resize deadline.
///
/// Every notification replaces the pending deadline, so a burst of resize
/// events produces a single recompute once the quiet period has passed.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Schedule a recompute. Returns `true` if a pending one was replaced.
    pub fn notify(&mut self, now: Instant) -> bool {
        self.deadline.replace(now + self.quiet_period).is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` exactly once when the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

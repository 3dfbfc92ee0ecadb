//! Inactivity watchdog.
//!
//! A single deadline owned by the controller. The host's event loop calls
//! [`InactivityWatchdog::poll`] with the current instant; the watchdog fires
//! at most once per arming. Arming always clears any previous deadline first.

use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct InactivityWatchdog {
    timeout: Duration,
    deadline: Option<Instant>,
}

impl InactivityWatchdog {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Clear any pending deadline and set a fresh one `timeout` after `now`.
    pub fn rearm(&mut self, now: Instant) {
        self.deadline = Some(now + self.timeout);
        trace!(timeout_ms = self.timeout.as_millis() as u64, "watchdog armed");
    }

    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            trace!("watchdog cancelled");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns true exactly once when `now` has reached the deadline.
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

//! Transient copy status.
//!
//! At most one status is visible and at most one clear is pending. Showing a
//! new status while one is visible replaces the text but keeps the original
//! deadline.

use std::time::{Duration, Instant};

use crate::clipboard::CopyOutcome;

/// How long a status stays visible by default.
pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_millis(2200);

#[derive(Debug, Clone)]
pub struct CopyStatus {
    duration: Duration,
    outcome: Option<CopyOutcome>,
    clear_at: Option<Instant>,
}

impl Default for CopyStatus {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_DURATION)
    }
}

impl CopyStatus {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            outcome: None,
            clear_at: None,
        }
    }

    pub fn show(&mut self, outcome: CopyOutcome, now: Instant) {
        self.outcome = Some(outcome);
        if self.clear_at.is_none() {
            self.clear_at = Some(now + self.duration);
        }
    }

    /// Clear the status once its deadline has passed. Returns `true` if it cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.outcome = None;
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn text(&self) -> Option<&'static str> {
        self.outcome.map(CopyOutcome::message)
    }

    pub fn outcome(&self) -> Option<CopyOutcome> {
        self.outcome
    }

    pub fn pending_clear(&self) -> Option<Instant> {
        self.clear_at
    }
}

//! One-shot mismatch flip-back timer.
//!
//! The engine hands out a [`FlipToken`] on mismatch and forgets about time;
//! this is the scheduler that remembers. All methods take `now` explicitly,
//! so tests advance a fake clock instead of sleeping.

use std::time::{Duration, Instant};

use crate::core::FlipToken;
use crate::types::MISMATCH_HIDE_MS;

/// At most one pending flip-back at a time (the engine rejects input while
/// a pair is resolving, so there is never more than one).
#[derive(Debug, Clone)]
pub struct MismatchTimer {
    pending: Option<(Instant, FlipToken)>,
}

impl MismatchTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the timer: the token becomes due `MISMATCH_HIDE_MS` after `now`.
    pub fn arm(&mut self, now: Instant, token: FlipToken) {
        self.pending = Some((now + Duration::from_millis(MISMATCH_HIDE_MS), token));
    }

    /// Drop any pending token. Called on restart and theme change; the
    /// engine's epoch check would reject a stale token anyway, this just
    /// avoids waking up for nothing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the token if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Option<FlipToken> {
        match self.pending {
            Some((deadline, token)) if now >= deadline => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }

    /// Time remaining until the deadline, if armed. Used to bound the input
    /// poll so the flip-back fires on time.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for MismatchTimer {
    fn default() -> Self {
        Self::new()
    }
}

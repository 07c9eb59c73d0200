// src/defer.rs
//
// Cancellable one-shot deadline. The UI schedules its presentation-timing
// continuations through these (card removal after fade-out, suggestions
// close after blur) so that a newer state change can cancel a stale pending
// one instead of racing it.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default)]
pub struct Deferred {
    due: Option<Instant>,
}

impl Deferred {
    pub fn schedule_in(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// True exactly once, when a pending deadline has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, if one is pending and still ahead.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }
}

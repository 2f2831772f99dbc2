//! Fixed-interval timer polled from an event loop or a thread

use std::time::{Duration, Instant};

/// Periodic timer that fires at most once per poll.
///
/// After firing, the deadline advances by one interval. If the caller fell
/// more than one interval behind, the deadline is re-anchored one interval
/// after `now` so missed firings are dropped rather than replayed.
#[derive(Debug, Clone)]
pub struct FixedTicker {
    interval: Duration,
    deadline: Instant,
    fired: u64,
}

impl FixedTicker {
    /// First firing is one interval after `start`
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            deadline: start + interval,
            fired: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }

        self.fired += 1;
        self.deadline += self.interval;
        if self.deadline <= now {
            log::debug!(
                "ticker ({:?}) fell behind by {:?}, re-anchoring",
                self.interval,
                now - self.deadline
            );
            self.deadline = now + self.interval;
        }
        true
    }

    /// Time left until the next firing, zero if already due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

//! Shared utilities

use std::time::{Duration, Instant};

/// Default redraw period
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

// ============================================================================
// Frame Timer
// ============================================================================

/// Fixed-period tick source for the redraw loop.
///
/// Fires at most once per `poll`. After a stall it does not replay the missed
/// ticks; the schedule restarts from the late tick instead.
pub struct FrameTimer {
    interval: Duration,
    next: Instant,
    overruns: u64,
}

impl FrameTimer {
    /// Timer whose first tick is due immediately
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now,
            overruns: 0,
        }
    }

    /// Returns true if a tick is due at `now`, and schedules the next one
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        let next = self.next + self.interval;
        if now >= next {
            self.overruns += 1;
            log::debug!(
                "frame tick {:?} late, skipping missed ticks",
                now.saturating_duration_since(self.next)
            );
            self.next = now + self.interval;
        } else {
            self.next = next;
        }
        true
    }

    /// Time left until the next tick is due
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Number of times a whole interval or more was missed
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

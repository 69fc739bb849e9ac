//! Tick pacing
//!
//! The loop waits for input until the next tick is due, so the wait budget
//! shrinks by however long the last iteration took.

use std::time::{Duration, Instant};

/// Time between ticks at `speed` ticks per second
pub fn tick_period(speed: u32) -> Duration {
    Duration::from_secs(1) / speed.max(1)
}

#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_tick: Instant,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// How long until the next tick; zero if overdue
    pub fn until_next(&self, now: Instant, speed: u32) -> Duration {
        tick_period(speed).saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    pub fn is_due(&self, now: Instant, speed: u32) -> bool {
        self.until_next(now, speed).is_zero()
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_tick = now;
    }
}

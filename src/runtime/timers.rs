//! Cooperative 1 Hz scheduling.

use std::time::{Duration, Instant};

use crate::config::form::ClockType;

/// Period of every face update loop.
pub const TICK: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Registry of repeating face loops.
///
/// Starting a loop hands out a fresh id; cancelling removes it at once, there being no
/// in-flight work to wait for.
#[derive(Debug, Default)]
pub struct Timers {
    next: u64,
    active: Vec<(TimerId, ClockType)>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, face: ClockType) -> TimerId {
        self.next += 1;
        let id = TimerId(self.next);
        self.active.push((id, face));
        id
    }

    /// Returns whether `id` was running.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.active.len();
        self.active.retain(|(t, _)| *t != id);
        before != self.active.len()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.active.iter().any(|(t, _)| *t == id)
    }

    pub fn active(&self) -> &[(TimerId, ClockType)] {
        &self.active
    }
}

/// Drift-free pacing for the binary's main loop: deadlines advance by whole periods, and a
/// late tick is not followed by a burst of catch-up ticks.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Sleep until the next deadline.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
        }
        self.next += self.period;
        let now = Instant::now();
        if self.next < now {
            self.next = now + self.period;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/timers.rs"]
mod tests;

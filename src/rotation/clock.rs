// SPDX-License-Identifier: GPL-3.0-only

//! Time sources for the rotation controller
//!
//! The controller never reads the system time itself. Callers pass `now`
//! explicitly, usually taken from a [`Clock`]. Tests use [`ManualClock`]
//! to step time deterministically.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of monotonic time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    /// Move time forward by `delta`
    pub fn advance(&self, delta: Duration) {
        self.offset.set(self.offset.get() + delta);
    }

    /// Move time forward to `millis` after the clock was created.
    ///
    /// Moving backwards is ignored; the clock is monotonic.
    pub fn set_millis(&self, millis: u64) {
        let target = Duration::from_millis(millis);
        if target > self.offset.get() {
            self.offset.set(target);
        }
    }

    /// Milliseconds elapsed since the clock was created
    pub fn elapsed_millis(&self) -> u64 {
        self.offset.get().as_millis() as u64
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        let start = clock.now();

        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now() - start, Duration::from_millis(250));
        assert_eq!(clock.elapsed_millis(), 250);
    }

    #[test]
    fn test_manual_clock_never_goes_back() {
        let clock = ManualClock::new();
        clock.set_millis(7000);
        clock.set_millis(5000);
        assert_eq!(clock.elapsed_millis(), 7000);
    }
}

//! Monotonic time seam for cache freshness.
//!
//! Freshness decisions are made against an injected clock so tests can
//! advance time deterministically instead of sleeping.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Source of monotonic "now" for staleness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Production clock reading `Instant::now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new();
        let first = clock.now();
        assert_eq!(first, clock.now());

        clock.advance(Duration::from_secs(61));
        assert_eq!(clock.now() - first, Duration::from_secs(61));
    }
}

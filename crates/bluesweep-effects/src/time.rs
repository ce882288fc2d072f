//! Clock handlers

use bluesweep_core::TimeEffects;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Wall clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeEffects for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Clock stopped at `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(at) }
    }

    /// Jump to `at`.
    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock() = at;
    }

    /// Move forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl TimeEffects for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluesweep_core::time::epoch;

    #[test]
    fn fixed_clock_advances() {
        let clock = FixedClock::new(epoch());
        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now().timestamp(), 5);
        clock.set(epoch());
        assert_eq!(clock.now(), epoch());
    }
}

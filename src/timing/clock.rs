//! Monotonic clock sources

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};
use once_cell::sync::Lazy;

/// Monotonic tick count in nanoseconds, local to the current process
pub type Timestamp = u64;

/// Anchor every `MonotonicClock` reading is measured from
static PROCESS_ANCHOR: Lazy<Instant> = Lazy::new(Instant::now);

/// A source of monotonic timestamps.
///
/// Readings must never decrease between calls within the same process.
pub trait Clock {
    /// Current tick count
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        let nanos = PROCESS_ANCHOR.elapsed().as_nanos();
        u64::try_from(nanos).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    ticks: AtomicU64,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub fn new(start: Timestamp) -> Self {
        Self {
            ticks: AtomicU64::new(start),
        }
    }

    /// Move the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        // The closure always returns `Some`, so the update cannot be rejected
        let previous = self
            .ticks
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| Some(t.saturating_add(nanos)));
        debug_assert!(previous.is_ok());
    }

    /// Jump the clock to `ticks`. Callers are expected to keep it non-decreasing.
    pub fn set(&self, ticks: Timestamp) {
        self.ticks.store(ticks, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.ticks.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock;
        let mut last = clock.now();
        for _ in 0..1_000 {
            let next = clock.now();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn manual_clock_moves_only_when_advanced() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now(), 100);
        assert_eq!(clock.now(), 100);

        clock.advance(Duration::from_micros(3));
        assert_eq!(clock.now(), 3_100);

        clock.set(10_000);
        assert_eq!(clock.now(), 10_000);
    }

    #[test]
    fn manual_clock_saturates_instead_of_wrapping() {
        let clock = ManualClock::new(u64::MAX - 1);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), u64::MAX);
    }

    #[test]
    fn clocks_work_through_references() {
        fn read(clock: impl Clock) -> Timestamp {
            clock.now()
        }

        let clock = ManualClock::new(42);
        assert_eq!(read(&clock), 42);
    }
}

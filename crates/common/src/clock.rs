//! Clock sources for gesture timing.
//!
//! Gesture velocity is measured in pixels per millisecond, so every clock
//! here reports whole milliseconds. The tracker only ever reads a clock; it
//! never schedules anything against it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Millisecond timestamp.
pub type TimestampMs = u64;

/// A source of millisecond timestamps.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> TimestampMs;
}

/// Wall-clock milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        // Clamped for clocks set before 1970.
        chrono::Utc::now().timestamp_millis().max(0) as TimestampMs
    }
}

/// A manually driven clock.
///
/// Clones share the same underlying time, so a host (or a test) can keep a
/// handle and move time forward while the tracker holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at the given time.
    pub fn new(start_ms: TimestampMs) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now_ms: TimestampMs) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    /// Move time forward by `ms`.
    pub fn advance(&self, ms: TimestampMs) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> TimestampMs {
        (**self).now_ms()
    }
}

/// Milliseconds between two timestamps, zero if `now` precedes `start`.
pub fn elapsed_ms(start: TimestampMs, now: TimestampMs) -> TimestampMs {
    now.saturating_sub(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(100);
        let handle = clock.clone();
        handle.advance(50);
        assert_eq!(clock.now_ms(), 150);
        handle.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn test_elapsed_saturates() {
        assert_eq!(elapsed_ms(100, 250), 150);
        assert_eq!(elapsed_ms(250, 100), 0);
    }
}

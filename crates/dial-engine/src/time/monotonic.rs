use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Monotonic millisecond clock.
///
/// Values only need to be comparable with each other; the epoch is
/// implementation defined.
pub trait MonotonicClock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Milliseconds elapsed since this source was created.
#[derive(Debug, Clone)]
pub struct SystemMonotonic {
    origin: Instant,
}

impl SystemMonotonic {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemMonotonic {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemMonotonic {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven monotonic clock for tests and frame-exact rendering.
#[derive(Debug, Default)]
pub struct ManualMonotonic {
    now: AtomicU64,
}

impl ManualMonotonic {
    pub fn new(start: u64) -> Self {
        Self { now: AtomicU64::new(start) }
    }

    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::Release);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::AcqRel);
    }
}

impl MonotonicClock for ManualMonotonic {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let c = ManualMonotonic::new(100);
        c.advance(25);
        assert_eq!(c.now_millis(), 125);
        c.set(7);
        assert_eq!(c.now_millis(), 7);
    }

    #[test]
    fn system_clock_does_not_go_backwards() {
        let c = SystemMonotonic::new();
        let a = c.now_millis();
        let b = c.now_millis();
        assert!(b >= a);
    }
}

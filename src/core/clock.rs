//! Time source abstraction for the throttler.
//!
//! Production code uses [`SystemClock`]. Tests (and downstream crates with
//! the `test-util` feature) can drive a [`ManualClock`] to make cooldown
//! windows deterministic instead of sleeping.

use std::time::Instant;

/// A source of "now" as a monotonic instant.
///
/// The throttler only ever compares instants it obtained from the same
/// clock, so any monotonically non-decreasing source is valid.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// System clock implementation using [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A manually advanced clock for deterministic tests.
///
/// Cloning yields a handle to the same underlying instant, so a test can
/// hold one handle to advance time while the throttler reads another.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: std::sync::Arc<parking_lot::Mutex<Instant>>,
}

#[cfg(any(test, feature = "test-util"))]
impl ManualClock {
    /// Create a clock pinned to the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock pinned to `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: std::sync::Arc::new(parking_lot::Mutex::new(start)),
        }
    }

    /// Advance the clock by `delta`. All handles observe the new instant.
    pub fn advance(&self, delta: std::time::Duration) {
        *self.now.lock() += delta;
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

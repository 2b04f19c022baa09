//! Mutual-exclusion-guarded call throttler
//!
//! This module provides the main [`Throttler`] struct, which suppresses
//! repeated invocations of a work item until the cooldown for the
//! preceding accepted call has fully elapsed.

use super::clock::{Clock, SystemClock};
use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// A throttler that ignores work items until the cooldown for the
/// preceding accepted call is over.
///
/// The window is measured from the timestamp of the last *accepted* call,
/// not from a fixed schedule, and a rejected call never moves it. The
/// boundary is strict: a call arriving when exactly `cooldown` has elapsed
/// is still rejected. A zero cooldown degenerates to always-allow.
///
/// The decision (read the clock, compare, commit the timestamp) happens as
/// one atomic unit under a mutex; the action itself runs on the calling
/// thread *after* the lock is released, so a slow action never blocks
/// other callers and an action may safely call [`execute`](Self::execute)
/// on the same throttler again.
///
/// # Example
///
/// ```
/// use throttlekit::Throttler;
/// use std::time::Duration;
///
/// let throttler = Throttler::new(Duration::from_secs(5));
/// let mut value = 0;
///
/// throttler.execute(|| value += 1);
/// throttler.execute(|| value += 1);
/// throttler.execute(|| value += 1);
///
/// // Only the first call inside the window ran.
/// assert_eq!(value, 1);
/// ```
pub struct Throttler<C: Clock = SystemClock> {
    cooldown: Duration,
    clock: C,
    last_accepted: Mutex<Option<Instant>>,
}

impl Throttler<SystemClock> {
    /// Create a new throttler with the given cooldown, reading time from
    /// the system clock.
    ///
    /// The first call to [`execute`](Self::execute) always runs.
    pub fn new(cooldown: Duration) -> Self {
        Self::with_clock(cooldown, SystemClock::new())
    }
}

impl<C: Clock> Throttler<C> {
    /// Create a new throttler with an explicit time source.
    ///
    /// Useful for deterministic tests, where a manually advanced clock
    /// replaces wall-clock sleeps.
    pub fn with_clock(cooldown: Duration, clock: C) -> Self {
        Throttler {
            cooldown,
            clock,
            last_accepted: Mutex::new(None),
        }
    }

    /// The configured cooldown window.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Submit a work item, running it only if the cooldown for the
    /// preceding accepted call has elapsed.
    ///
    /// Returns `true` if `action` ran, `false` if it was suppressed.
    /// Suppression leaves the window untouched: elapsed time keeps being
    /// measured from the last *accepted* call.
    ///
    /// If `action` panics, the acceptance has already been committed, so
    /// the failed call still counts against the window.
    ///
    /// # Example
    ///
    /// ```
    /// use throttlekit::Throttler;
    /// use std::time::Duration;
    ///
    /// let throttler = Throttler::new(Duration::from_millis(100));
    ///
    /// assert!(throttler.execute(|| println!("sent")));
    /// assert!(!throttler.execute(|| println!("never printed")));
    /// ```
    pub fn execute<F>(&self, action: F) -> bool
    where
        F: FnOnce(),
    {
        let accepted = {
            let mut last_accepted = self.last_accepted.lock();
            let now = self.clock.now();

            // Absent timestamp compares as infinitely elapsed. The strict
            // comparison rejects calls landing exactly on the boundary;
            // zero cooldown must still allow back-to-back calls even when
            // a coarse monotonic clock reports zero elapsed time.
            let accepted = match *last_accepted {
                None => true,
                Some(at) => {
                    self.cooldown.is_zero() || now.duration_since(at) > self.cooldown
                }
            };

            if accepted {
                *last_accepted = Some(now);
            }

            accepted
        };

        // Run the action outside the critical section.
        if accepted {
            tracing::trace!(cooldown_ms = self.cooldown.as_millis() as u64, "accepted");
            action();
        } else {
            tracing::trace!(cooldown_ms = self.cooldown.as_millis() as u64, "suppressed");
        }

        accepted
    }

    /// Clear the recorded acceptance so the next call runs immediately,
    /// regardless of how recently the last accepted call happened.
    pub fn reset(&self) {
        *self.last_accepted.lock() = None;
        tracing::debug!("throttler reset");
    }
}

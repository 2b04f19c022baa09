//! Duration and elapsed-time helpers
//!
//! Conversions between [`Duration`] and the coarser units the rest of the
//! toolkit reasons in, plus an elapsed-window check sharing the
//! throttler's strict boundary convention.

use std::time::{Duration, Instant};

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;
const SECS_PER_WEEK: f64 = 604_800.0;

/// A duration of `minutes` whole minutes.
pub fn minutes(minutes: u64) -> Duration {
    Duration::from_secs(minutes * 60)
}

/// A duration of `hours` whole hours.
pub fn hours(hours: u64) -> Duration {
    Duration::from_secs(hours * 3_600)
}

/// A duration of `days` whole days.
pub fn days(days: u64) -> Duration {
    Duration::from_secs(days * 86_400)
}

/// A duration of `weeks` whole weeks.
pub fn weeks(weeks: u64) -> Duration {
    Duration::from_secs(weeks * 604_800)
}

/// Unit conversions for [`Duration`].
///
/// # Example
///
/// ```
/// use throttlekit::DurationExt;
/// use std::time::Duration;
///
/// assert_eq!(Duration::from_secs(90).as_minutes(), 1.5);
/// assert_eq!(Duration::from_secs(7_200).as_hours(), 2.0);
/// ```
pub trait DurationExt {
    /// Duration expressed in minutes.
    fn as_minutes(&self) -> f64;

    /// Duration expressed in hours.
    fn as_hours(&self) -> f64;

    /// Duration expressed in days.
    fn as_days(&self) -> f64;

    /// Duration expressed in weeks.
    fn as_weeks(&self) -> f64;
}

impl DurationExt for Duration {
    fn as_minutes(&self) -> f64 {
        self.as_secs_f64() / SECS_PER_MINUTE
    }

    fn as_hours(&self) -> f64 {
        self.as_secs_f64() / SECS_PER_HOUR
    }

    fn as_days(&self) -> f64 {
        self.as_secs_f64() / SECS_PER_DAY
    }

    fn as_weeks(&self) -> f64 {
        self.as_secs_f64() / SECS_PER_WEEK
    }
}

/// Elapsed-window check for [`Instant`].
pub trait InstantExt {
    /// Whether strictly more than `window` has passed since this instant.
    ///
    /// Uses the same strict comparison as the throttler: an instant whose
    /// age equals `window` exactly has *not* elapsed.
    fn has_elapsed(&self, window: Duration) -> bool;
}

impl InstantExt for Instant {
    fn has_elapsed(&self, window: Duration) -> bool {
        self.elapsed() > window
    }
}

//! Calendar-date helpers
//!
//! Extension methods on [`chrono::DateTime`] for the date predicates,
//! boundary lookups, and calendar-aware arithmetic the toolkit uses.
//! Boundary and arithmetic helpers return `None` only when the result
//! would be out of chrono's representable range or falls into a local
//! time that does not exist (daylight-saving gaps).

use chrono::{
    DateTime, Datelike, Days, Months, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc, Weekday,
};
use std::fmt::Display;

/// Date predicates, boundaries, arithmetic, and formatting helpers.
pub trait DateTimeExt: Sized {
    /// Whether the date is in the past.
    fn is_past(&self) -> bool;

    /// Whether the date is in the future.
    fn is_future(&self) -> bool;

    /// Whether the date falls on today's date in its own time zone.
    fn is_today(&self) -> bool;

    /// Whether the date falls on a Saturday or Sunday.
    fn is_weekend(&self) -> bool;

    /// Whether the date falls on a weekday.
    fn is_weekday(&self) -> bool;

    /// Whether the date lies strictly between two other dates, in either
    /// order.
    fn is_between(&self, a: &Self, b: &Self) -> bool;

    /// Midnight at the beginning of the day.
    fn start_of_day(&self) -> Option<Self>;

    /// The last second of the day.
    fn end_of_day(&self) -> Option<Self>;

    /// Midnight on the first day of the month.
    fn start_of_month(&self) -> Option<Self>;

    /// The last second of the month.
    fn end_of_month(&self) -> Option<Self>;

    /// Add minutes to the date. Negative values subtract.
    fn add_minutes(&self, minutes: i64) -> Option<Self>;

    /// Add calendar days to the date. Negative values subtract.
    fn add_days(&self, days: i64) -> Option<Self>;

    /// Add calendar months, clamping the day to the end of a shorter
    /// month. Negative values subtract.
    fn add_months(&self, months: i32) -> Option<Self>;

    /// Add calendar years. Negative values subtract.
    fn add_years(&self, years: i32) -> Option<Self>;

    /// The same date if it is in the future, otherwise pushed forward
    /// exactly one day.
    fn next_day_if_past(&self) -> Option<Self>;

    /// Fixed-format date without time, e.g. `2017-05-15`.
    fn short_string(&self) -> String;

    /// Countdown from `from` formatted as `hh:mm:ss`, prefixed with `+`
    /// once the reference has passed the date.
    fn timer_string(&self, from: &Self) -> String;

    /// Decimal representation of the time of day, e.g. 10:45 → 10.75.
    fn time_to_decimal(&self) -> f64;
}

fn localize<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest()
}

impl<Tz: TimeZone> DateTimeExt for DateTime<Tz>
where
    Tz::Offset: Display,
{
    fn is_past(&self) -> bool {
        *self < Utc::now()
    }

    fn is_future(&self) -> bool {
        *self > Utc::now()
    }

    fn is_today(&self) -> bool {
        Utc::now().with_timezone(&self.timezone()).date_naive() == self.date_naive()
    }

    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    fn is_between(&self, a: &Self, b: &Self) -> bool {
        (a < self && self < b) || (b < self && self < a)
    }

    fn start_of_day(&self) -> Option<Self> {
        localize(&self.timezone(), self.date_naive().and_hms_opt(0, 0, 0)?)
    }

    fn end_of_day(&self) -> Option<Self> {
        let next_midnight = self
            .date_naive()
            .checked_add_days(Days::new(1))?
            .and_hms_opt(0, 0, 0)?;
        localize(&self.timezone(), next_midnight - TimeDelta::seconds(1))
    }

    fn start_of_month(&self) -> Option<Self> {
        let first = self.date_naive().with_day(1)?.and_hms_opt(0, 0, 0)?;
        localize(&self.timezone(), first)
    }

    fn end_of_month(&self) -> Option<Self> {
        let first = self.date_naive().with_day(1)?;
        let next_month = first.checked_add_months(Months::new(1))?.and_hms_opt(0, 0, 0)?;
        localize(&self.timezone(), next_month - TimeDelta::seconds(1))
    }

    fn add_minutes(&self, minutes: i64) -> Option<Self> {
        self.clone().checked_add_signed(TimeDelta::minutes(minutes))
    }

    fn add_days(&self, days: i64) -> Option<Self> {
        if days >= 0 {
            self.clone().checked_add_days(Days::new(days as u64))
        } else {
            self.clone().checked_sub_days(Days::new(days.unsigned_abs()))
        }
    }

    fn add_months(&self, months: i32) -> Option<Self> {
        if months >= 0 {
            self.clone().checked_add_months(Months::new(months as u32))
        } else {
            self.clone().checked_sub_months(Months::new(months.unsigned_abs()))
        }
    }

    fn add_years(&self, years: i32) -> Option<Self> {
        self.add_months(years.checked_mul(12)?)
    }

    fn next_day_if_past(&self) -> Option<Self> {
        if self.is_past() {
            self.add_days(1)
        } else {
            Some(self.clone())
        }
    }

    fn short_string(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }

    fn timer_string(&self, from: &Self) -> String {
        let seconds = self.clone().signed_duration_since(from.clone()).num_seconds();
        let prefix = if seconds < 0 { "+" } else { "" };
        let hr = (seconds / 3_600).abs();
        let min = (seconds / 60 % 60).abs();
        let sec = (seconds % 60).abs();
        format!("{prefix}{hr:02}:{min:02}:{sec:02}")
    }

    fn time_to_decimal(&self) -> f64 {
        f64::from(self.hour()) + f64::from(self.minute()) / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_past_and_future() {
        let past = date(2001, 1, 1, 0, 0, 0);
        let future = date(2999, 1, 1, 0, 0, 0);

        assert!(past.is_past());
        assert!(!past.is_future());
        assert!(future.is_future());
        assert!(!future.is_past());
    }

    #[test]
    fn test_today() {
        assert!(Utc::now().is_today());
        assert!(!date(2001, 1, 1, 0, 0, 0).is_today());
    }

    #[test]
    fn test_weekend_and_weekday() {
        // 2024-05-15 was a Wednesday, 2024-05-18 a Saturday.
        let wednesday = date(2024, 5, 15, 12, 0, 0);
        let saturday = date(2024, 5, 18, 12, 0, 0);

        assert!(wednesday.is_weekday());
        assert!(!wednesday.is_weekend());
        assert!(saturday.is_weekend());
        assert!(!saturday.is_weekday());
    }

    #[test]
    fn test_between_is_order_insensitive_and_strict() {
        let a = date(2024, 1, 1, 0, 0, 0);
        let mid = date(2024, 6, 1, 0, 0, 0);
        let b = date(2024, 12, 31, 0, 0, 0);

        assert!(mid.is_between(&a, &b));
        assert!(mid.is_between(&b, &a));
        assert!(!a.is_between(&a, &b));
        assert!(!b.is_between(&a, &b));
        assert!(!date(2025, 1, 1, 0, 0, 0).is_between(&a, &b));
    }

    #[test]
    fn test_day_boundaries() {
        let d = date(2024, 5, 15, 10, 30, 45);

        assert_eq!(d.start_of_day().unwrap(), date(2024, 5, 15, 0, 0, 0));
        assert_eq!(d.end_of_day().unwrap(), date(2024, 5, 15, 23, 59, 59));
    }

    #[test]
    fn test_month_boundaries() {
        let d = date(2024, 5, 15, 10, 30, 45);

        assert_eq!(d.start_of_month().unwrap(), date(2024, 5, 1, 0, 0, 0));
        assert_eq!(d.end_of_month().unwrap(), date(2024, 5, 31, 23, 59, 59));

        // February in a leap year.
        let feb = date(2024, 2, 10, 8, 0, 0);
        assert_eq!(feb.end_of_month().unwrap(), date(2024, 2, 29, 23, 59, 59));
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2024, 5, 15, 10, 30, 0);

        assert_eq!(d.add_minutes(90).unwrap(), date(2024, 5, 15, 12, 0, 0));
        assert_eq!(d.add_minutes(-30).unwrap(), date(2024, 5, 15, 10, 0, 0));
        assert_eq!(d.add_days(20).unwrap(), date(2024, 6, 4, 10, 30, 0));
        assert_eq!(d.add_days(-15).unwrap(), date(2024, 4, 30, 10, 30, 0));
        assert_eq!(d.add_months(2).unwrap(), date(2024, 7, 15, 10, 30, 0));
        assert_eq!(d.add_years(1).unwrap(), date(2025, 5, 15, 10, 30, 0));
    }

    #[test]
    fn test_add_months_clamps_short_months() {
        let jan31 = date(2024, 1, 31, 9, 0, 0);
        assert_eq!(jan31.add_months(1).unwrap(), date(2024, 2, 29, 9, 0, 0));
    }

    #[test]
    fn test_next_day_if_past() {
        let past = date(2001, 6, 1, 12, 0, 0);
        assert_eq!(past.next_day_if_past().unwrap(), date(2001, 6, 2, 12, 0, 0));

        let future = date(2999, 6, 1, 12, 0, 0);
        assert_eq!(future.next_day_if_past().unwrap(), future);
    }

    #[test]
    fn test_short_string() {
        assert_eq!(date(2017, 5, 15, 9, 30, 0).short_string(), "2017-05-15");
        assert_eq!(date(2024, 1, 3, 0, 0, 0).short_string(), "2024-01-03");
    }

    #[test]
    fn test_timer_string() {
        let from = date(2024, 5, 15, 10, 0, 0);

        let ahead = date(2024, 5, 15, 11, 30, 5);
        assert_eq!(ahead.timer_string(&from), "01:30:05");

        // Reference past the target counts up with a plus prefix.
        let behind = date(2024, 5, 15, 9, 58, 30);
        assert_eq!(behind.timer_string(&from), "+00:01:30");

        assert_eq!(from.timer_string(&from), "00:00:00");
    }

    #[test]
    fn test_time_to_decimal() {
        assert_eq!(date(2024, 5, 15, 10, 45, 0).time_to_decimal(), 10.75);
        assert_eq!(date(2024, 5, 15, 0, 0, 59).time_to_decimal(), 0.0);
    }
}

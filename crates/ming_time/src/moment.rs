//! Minute-resolution local date-time.
//!
//! `LocalMoment` is the canonical time value used throughout the engine.
//! Offset arithmetic works in fractional minutes since the civil epoch
//! and floors the result, which reproduces millisecond-based clock
//! arithmetic exactly at minute granularity.

use crate::calendar::{civil_from_days, days_from_civil};

/// A local calendar date and clock time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Whole minutes since the civil epoch 1970-01-01 00:00.
    pub fn epoch_minutes(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) * 1440
            + self.hour as i64 * 60
            + self.minute as i64
    }

    /// Moment from whole minutes since the civil epoch.
    pub fn from_epoch_minutes(total: i64) -> Self {
        let days = total.div_euclid(1440);
        let rem = total.rem_euclid(1440) as u32;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: rem / 60,
            minute: rem % 60,
        }
    }

    /// Add a (possibly fractional, possibly negative) number of minutes.
    ///
    /// The result is floored to the containing minute.
    pub fn add_minutes(&self, minutes: f64) -> Self {
        let shifted = (self.epoch_minutes() as f64 + minutes).floor() as i64;
        Self::from_epoch_minutes(shifted)
    }
}

impl std::fmt::Display for LocalMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_minutes_roundtrip() {
        let m = LocalMoment::new(1990, 6, 15, 14, 30);
        assert_eq!(LocalMoment::from_epoch_minutes(m.epoch_minutes()), m);
    }

    #[test]
    fn add_zero_is_identity() {
        let m = LocalMoment::new(2000, 1, 1, 0, 0);
        assert_eq!(m.add_minutes(0.0), m);
    }

    #[test]
    fn fractional_negative_offset_floors() {
        // 14:30 minus 0.2 minutes lands inside 14:29
        let m = LocalMoment::new(1990, 6, 15, 14, 30);
        let shifted = m.add_minutes(-0.2);
        assert_eq!(shifted.hour, 14);
        assert_eq!(shifted.minute, 29);
    }

    #[test]
    fn fractional_positive_offset_floors() {
        // 14:30 plus 0.9 minutes still displays as 14:30
        let m = LocalMoment::new(1990, 6, 15, 14, 30);
        assert_eq!(m.add_minutes(0.9), m);
    }

    #[test]
    fn offset_across_midnight() {
        let m = LocalMoment::new(1999, 12, 31, 23, 50);
        let shifted = m.add_minutes(20.0);
        assert_eq!(shifted, LocalMoment::new(2000, 1, 1, 0, 10));
    }

    #[test]
    fn offset_backward_across_midnight() {
        let m = LocalMoment::new(2000, 1, 1, 0, 10);
        let shifted = m.add_minutes(-20.0);
        assert_eq!(shifted, LocalMoment::new(1999, 12, 31, 23, 50));
    }

    #[test]
    fn display_format() {
        let m = LocalMoment::new(1990, 6, 15, 14, 29);
        assert_eq!(m.to_string(), "1990-06-15 14:29");
    }
}

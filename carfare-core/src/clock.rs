//! Duration and clock-window utilities.
//!
//! All instants are local wall-clock times ([`NaiveDateTime`]); rental
//! providers bill on the clock shown at the counter, not on UTC.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

const MILLIS_PER_MINUTE: f64 = 60_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Elapsed time between two instants, in fractional hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elapsed {
    /// Elapsed hours (may be fractional).
    pub hours: f64,
    /// Elapsed minutes (may be fractional).
    pub minutes: f64,
}

impl Elapsed {
    /// Creates an elapsed value from whole minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let minutes = minutes as f64;
        Self {
            hours: minutes / 60.0,
            minutes,
        }
    }

    /// Number of started 24-hour days, never less than one.
    pub fn started_days(&self) -> u64 {
        ceil_units(self.hours / 24.0).max(1)
    }
}

/// Computes `end - start`.
///
/// A negative window is a caller error; requests are validated before they
/// reach this function.
pub fn elapsed(start: NaiveDateTime, end: NaiveDateTime) -> Elapsed {
    #[allow(clippy::cast_precision_loss)]
    let millis = (end - start).num_milliseconds() as f64;
    Elapsed {
        hours: millis / MILLIS_PER_HOUR,
        minutes: millis / MILLIS_PER_MINUTE,
    }
}

/// Returns true if the clock hour of `instant` is strictly below `hour`, or
/// the instant sits exactly on `hour:00`.
///
/// The `hour:00` inclusion is a business rule of the night packs that use it.
/// Seconds are ignored.
pub fn is_before_hour(instant: NaiveDateTime, hour: u32) -> bool {
    instant.hour() < hour || (instant.hour() == hour && instant.minute() == 0)
}

/// Returns true if the clock hour of `instant` is `hour` or later.
pub fn is_at_or_after_hour(instant: NaiveDateTime, hour: u32) -> bool {
    instant.hour() >= hour
}

/// Rounds a non-negative quantity up to the next whole unit.
///
/// Negative and NaN inputs count as zero units.
pub fn ceil_units(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let units = value.ceil() as u64;
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_elapsed_whole_hours() {
        let e = elapsed(at(1, 9, 0), at(1, 12, 0));
        assert_eq!(e.hours, 3.0);
        assert_eq!(e.minutes, 180.0);
    }

    #[test]
    fn test_elapsed_fractional() {
        let e = elapsed(at(1, 9, 0), at(1, 10, 20));
        assert!((e.hours - 80.0 / 60.0).abs() < 1e-9);
        assert_eq!(e.minutes, 80.0);
    }

    #[test]
    fn test_elapsed_across_days() {
        let e = elapsed(at(1, 9, 0), at(2, 15, 0));
        assert_eq!(e.hours, 30.0);
    }

    #[test]
    fn test_is_before_hour_includes_exact_boundary() {
        assert!(is_before_hour(at(1, 6, 59), 7));
        assert!(is_before_hour(at(1, 7, 0), 7));
        assert!(!is_before_hour(at(1, 7, 1), 7));
        assert!(!is_before_hour(at(1, 8, 0), 7));
    }

    #[test]
    fn test_is_before_midnight_only_at_midnight() {
        assert!(is_before_hour(at(1, 0, 0), 0));
        assert!(!is_before_hour(at(1, 0, 15), 0));
        assert!(!is_before_hour(at(1, 23, 45), 0));
    }

    #[test]
    fn test_is_at_or_after_hour() {
        assert!(is_at_or_after_hour(at(1, 21, 0), 21));
        assert!(is_at_or_after_hour(at(1, 23, 59), 21));
        assert!(!is_at_or_after_hour(at(1, 20, 59), 21));
    }

    #[test]
    fn test_ceil_units() {
        assert_eq!(ceil_units(0.0), 0);
        assert_eq!(ceil_units(-1.0), 0);
        assert_eq!(ceil_units(f64::NAN), 0);
        assert_eq!(ceil_units(1.0), 1);
        assert_eq!(ceil_units(1.01), 2);
    }

    #[test]
    fn test_started_days() {
        assert_eq!(Elapsed::from_minutes(60).started_days(), 1);
        assert_eq!(Elapsed::from_minutes(24 * 60).started_days(), 1);
        assert_eq!(Elapsed::from_minutes(24 * 60 + 1).started_days(), 2);
    }
}

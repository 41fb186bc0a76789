//! Julian Date and Julian century conversions.
//!
//! Calendar dates are proleptic Gregorian. The event pipeline works at day
//! granularity: the Julian Date of a calendar date is always the value at
//! 0h UT, whatever time of day the caller supplied.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::calendar::DateLike;
use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` may carry a fractional part for time of day; an integral value
/// gives the Julian Date at 0h UT (e.g. 2010-01-01 → 2455197.5).
///
/// Meeus, *Astronomical Algorithms*, ch. 7.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date at 0h UT of the calendar date carried by `date`.
///
/// Time of day is discarded, so every timestamp on the same calendar date
/// maps to the same value.
pub fn julian_day<D: DateLike>(date: D) -> Result<f64, TimeError> {
    let date = date.calendar_date()?;
    Ok(calendar_to_jd(date.year(), date.month(), date.day() as f64))
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian Date of an instant, keeping its UTC time-of-day fraction.
///
/// Not used by the rise/set pipeline, which is defined per calendar date.
pub fn instant_julian_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    let utc = instant.with_timezone(&Utc);
    let seconds = utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 * 1e-9;
    calendar_to_jd(
        utc.year(),
        utc.month(),
        utc.day() as f64 + seconds / SECONDS_PER_DAY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
        assert_eq!(julian_century(jd), 0.0);
    }

    #[test]
    fn new_year_2010() {
        let date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        let jd = julian_day(date).unwrap();
        assert_eq!(jd, 2_455_197.5);
        assert!((julian_century(jd) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn meeus_examples() {
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
        assert!((calendar_to_jd(1987, 6, 19.5) - 2_446_966.0).abs() < 1e-9);
        assert!((calendar_to_jd(1988, 1, 27.0) - 2_447_187.5).abs() < 1e-9);
    }

    #[test]
    fn leap_day_is_contiguous() {
        let feb28 = calendar_to_jd(2024, 2, 28.0);
        let feb29 = calendar_to_jd(2024, 2, 29.0);
        let mar1 = calendar_to_jd(2024, 3, 1.0);
        assert_eq!(feb29 - feb28, 1.0);
        assert_eq!(mar1 - feb29, 1.0);
    }

    #[test]
    fn time_of_day_is_discarded() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let noon = est.with_ymd_and_hms(2010, 1, 1, 12, 0, 0).unwrap();
        let midnight = est.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(julian_day(noon).unwrap(), julian_day(midnight).unwrap());
        assert_eq!(julian_day(noon).unwrap(), 2_455_197.5);
    }

    #[test]
    fn instant_keeps_time_of_day() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let noon = est.with_ymd_and_hms(2010, 1, 1, 12, 0, 0).unwrap();
        let jd = instant_julian_day(&noon);
        assert!((jd - (2_455_198.0 + 5.0 / 24.0)).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn century_is_monotonic() {
        let a = julian_century(2_457_023.5);
        let b = julian_century(2_457_024.5);
        assert!(b > a);
        assert!((b - a - 1.0 / DAYS_PER_JULIAN_CENTURY).abs() < 1e-15);
    }
}

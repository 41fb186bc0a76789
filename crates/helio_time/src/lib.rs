//! Calendar and Julian-day support for the NOAA solar calculator.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Date conversion (day granularity for the
//!   solar pipeline, instant granularity on request)
//! - Julian centuries since J2000.0
//! - Normalisation of dates, timestamps, optional and textual inputs to a
//!   calendar date via [`DateLike`]
//! - UTC instants from a date plus minutes after midnight

pub mod calendar;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use calendar::{DateLike, parse_calendar_date};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, instant_julian_day,
    julian_century, julian_day,
};
pub use utc_time::{TimeOfDay, date_at_minutes, midnight_utc, minutes_to_time_of_day};

/// Calendar date type used throughout the workspace.
pub use chrono::NaiveDate as CalendarDate;

/// Julian centuries since J2000.0 for the calendar date carried by `date`.
///
/// Shorthand for `julian_century(julian_day(date)?)`.
pub fn date_to_centuries<D: DateLike>(date: D) -> Result<f64, TimeError> {
    Ok(julian_century(julian_day(date)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centuries_from_text() {
        let t = date_to_centuries("2010-01-01").unwrap();
        assert!((t - 0.1).abs() < 1e-12);
    }

    #[test]
    fn centuries_reject_garbage() {
        assert!(matches!(
            date_to_centuries("not a date"),
            Err(TimeError::InvalidInput(_))
        ));
    }
}

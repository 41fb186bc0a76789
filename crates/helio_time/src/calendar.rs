//! Normalisation of date-like inputs to a calendar date.
//!
//! Every solar computation is defined per calendar date. Callers may hand in
//! a bare date, a naive or zoned timestamp, an optional value, or text; all of
//! them are reduced to a [`NaiveDate`] here, discarding any time of day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::TimeError;

/// Naive datetime layouts accepted from text, tried in order.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A value that carries a proleptic-Gregorian calendar date.
pub trait DateLike {
    /// The calendar date of this value, with any time of day dropped.
    fn calendar_date(&self) -> Result<NaiveDate, TimeError>;
}

impl DateLike for NaiveDate {
    fn calendar_date(&self) -> Result<NaiveDate, TimeError> {
        Ok(*self)
    }
}

impl DateLike for NaiveDateTime {
    fn calendar_date(&self) -> Result<NaiveDate, TimeError> {
        Ok(self.date())
    }
}

/// A zoned timestamp contributes the wall-clock date in its own offset,
/// not the UTC date of the same instant.
impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn calendar_date(&self) -> Result<NaiveDate, TimeError> {
        Ok(self.date_naive())
    }
}

impl<T: DateLike> DateLike for Option<T> {
    fn calendar_date(&self) -> Result<NaiveDate, TimeError> {
        match self {
            Some(inner) => inner.calendar_date(),
            None => Err(TimeError::invalid("no date supplied")),
        }
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn calendar_date(&self) -> Result<NaiveDate, TimeError> {
        (**self).calendar_date()
    }
}

impl DateLike for str {
    fn calendar_date(&self) -> Result<NaiveDate, TimeError> {
        parse_calendar_date(self)
    }
}

impl DateLike for String {
    fn calendar_date(&self) -> Result<NaiveDate, TimeError> {
        parse_calendar_date(self)
    }
}

/// Parse `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive
/// `YYYY-MM-DD[T ]hh:mm:ss[.fff]` timestamp into its calendar date.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, TimeError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimeError::invalid("empty date string"));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    log::trace!("rejecting date input {s:?}");
    Err(TimeError::invalid(format!(
        "expected YYYY-MM-DD or an ISO 8601 timestamp, got {s:?}"
    )))
}

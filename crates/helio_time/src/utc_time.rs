//! UTC instants built from a calendar date plus minutes after midnight.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

const NANOS_PER_MINUTE: f64 = 60.0e9;

/// 00:00:00 UTC on `date`.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::default()).and_utc()
}

/// `date` at UTC midnight plus `minutes`, which may be fractional or fall
/// outside `[0, 1440)`.
///
/// Sub-second precision is kept to the nanosecond. Returns `None` for a
/// non-finite offset or one outside chrono's representable range.
pub fn date_at_minutes(date: NaiveDate, minutes: f64) -> Option<DateTime<Utc>> {
    if !minutes.is_finite() {
        return None;
    }
    let nanos = (minutes * NANOS_PER_MINUTE).round();
    if nanos.abs() >= i64::MAX as f64 {
        return None;
    }
    midnight_utc(date).checked_add_signed(Duration::nanoseconds(nanos as i64))
}

/// Wall-clock breakdown of a minutes-after-midnight value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDay {
    /// Whole days the offset spills before (negative) or after (positive) the date.
    pub day_offset: i64,
    pub hour: u32,
    pub minute: u32,
    /// Seconds within the minute, fractional part preserved.
    pub second: f64,
}

/// Split minutes after UTC midnight into hours, minutes and seconds.
///
/// Offsets outside a single day wrap around and report the spill in
/// `day_offset`, so -30.0 is 23:30:00 on the previous day.
pub fn minutes_to_time_of_day(minutes: f64) -> TimeOfDay {
    let day_offset = (minutes / 1440.0).floor();
    let within = minutes - day_offset * 1440.0;
    let hour = (within / 60.0).floor();
    let minute = (within - hour * 60.0).floor();
    let second = (within - hour * 60.0 - minute) * 60.0;
    TimeOfDay {
        day_offset: day_offset as i64,
        hour: hour as u32,
        minute: minute as u32,
        second,
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour,
            self.minute,
            self.second.floor() as u32
        )?;
        if self.day_offset != 0 {
            write!(f, " ({:+}d)", self.day_offset)?;
        }
        Ok(())
    }
}

//! Property tests over dates and mid-latitude locations.

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};
use proptest::prelude::*;

use helio_core::{
    GeoCoordinate, equation_of_time_for_date, solar_noon, solar_noon_minutes, sun_times, sunrise,
    sunrise_minutes, sunset, sunset_minutes,
};

/// Dates between 1950-01-01 and 2049-12-31.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..36_524).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Latitudes where the Sun rises and sets on every day of the year.
fn mid_latitude() -> impl Strategy<Value = f64> {
    -60.0f64..60.0
}

fn any_longitude() -> impl Strategy<Value = f64> {
    -180.0f64..=180.0
}

proptest! {
    #[test]
    fn sunrise_before_noon_before_sunset(
        date in any_date(),
        lat in mid_latitude(),
        lon in any_longitude(),
    ) {
        let rise = sunrise(date, lat, lon).unwrap();
        let noon = solar_noon(date, lat, lon).unwrap();
        let set = sunset(date, lat, lon).unwrap();
        prop_assert!(rise < noon, "{rise} !< {noon}");
        prop_assert!(noon < set, "{noon} !< {set}");
    }

    #[test]
    fn symmetric_about_noon(
        date in any_date(),
        lat in mid_latitude(),
        lon in any_longitude(),
    ) {
        let rise = sunrise_minutes(date, lat, lon).unwrap();
        let noon = solar_noon_minutes(date, lat, lon).unwrap();
        let set = sunset_minutes(date, lat, lon).unwrap();
        prop_assert!(((noon - rise) - (set - noon)).abs() < 1e-9);
    }

    #[test]
    fn time_of_day_is_irrelevant(
        date in any_date(),
        seconds in 0u32..86_400,
        offset_hours in -12i32..=14,
        lat in mid_latitude(),
        lon in any_longitude(),
    ) {
        let tz = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let local = date.and_hms_opt(seconds / 3600, (seconds / 60) % 60, seconds % 60).unwrap();
        let stamp = tz.from_local_datetime(&local).unwrap();
        prop_assert_eq!(sunrise(stamp, lat, lon).unwrap(), sunrise(date, lat, lon).unwrap());
        prop_assert_eq!(sunset(local, lat, lon).unwrap(), sunset(date, lat, lon).unwrap());
    }

    #[test]
    fn deterministic(
        date in any_date(),
        lat in -90.0f64..=90.0,
        lon in any_longitude(),
    ) {
        let loc = GeoCoordinate::new(lat, lon);
        prop_assert_eq!(sun_times(date, &loc).unwrap(), sun_times(date, &loc).unwrap());
    }

    #[test]
    fn equation_of_time_is_bounded(date in any_date()) {
        let eot = equation_of_time_for_date(date).unwrap();
        prop_assert!(eot.abs() < 17.0, "eot = {eot}");
    }
}

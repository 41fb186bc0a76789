//! Solar noon, sunrise and sunset from the NOAA solar-position formulas.
//!
//! This crate provides:
//! - Low-order orbital elements of the Sun as functions of Julian centuries
//! - Equation of time and the sunrise/sunset hour angle
//! - Event times as minutes after UTC midnight or as UTC instants, with polar
//!   day and night reported as errors (or as [`Daylight`] variants from
//!   [`sun_times`])
//!
//! Every function is pure; calls share no state and may run concurrently.
//!
//! ```
//! use helio_core::{solar_noon_minutes, sunrise};
//!
//! let noon = solar_noon_minutes("2010-01-01", 40.75, -73.99).unwrap();
//! assert!((noon - 1019.27).abs() < 1.0 / 60.0);
//!
//! let rise = sunrise("2010-01-01T12:00:00-05:00", 40.75, -73.99).unwrap();
//! assert_eq!(rise.to_rfc3339_opts(chrono::SecondsFormat::Secs, true), "2010-01-01T12:20:05Z");
//! ```

pub mod angle;
pub mod equation_of_time;
pub mod error;
pub mod hour_angle;
pub mod orbit;
pub mod riseset;
pub mod riseset_types;

pub use angle::{degrees_to_radians, radians_to_degrees};
pub use equation_of_time::{equation_of_time, equation_of_time_for};
pub use error::SolarError;
pub use hour_angle::{SOLAR_ZENITH_DEG, cos_hour_angle, hour_angle};
pub use orbit::{
    OrbitalElements, apparent_longitude, declination, eccentricity_of_earth_orbit,
    equation_of_center, geometric_mean_anomaly, geometric_mean_longitude,
    mean_obliquity_of_ecliptic, oblique_correction, obliquity_y, true_longitude,
};
pub use riseset::{
    declination_for_date, equation_of_time_for_date, event_minutes, event_time, solar_noon,
    solar_noon_minutes, sun_times, sunrise, sunrise_minutes, sunset, sunset_minutes,
};
pub use riseset_types::{Daylight, GeoCoordinate, HorizonCondition, SolarEvent, SunTimes};

// Re-export the date layer so callers need only this crate.
pub use helio_time::{
    CalendarDate, DateLike, TimeError, TimeOfDay, julian_century, julian_day,
    minutes_to_time_of_day,
};

//! Types for solar noon, sunrise and sunset calculations.
//!
//! Provides the observer coordinate, event kinds, the horizon conditions that
//! rule out sunrise/sunset, and the aggregate result returned by
//! [`crate::riseset::sun_times`].

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Geographic coordinate of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive and west negative. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a new coordinate. No range validation is performed.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// The three daily solar events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Upper limb of the Sun appears at the refracted horizon.
    Sunrise,
    /// The Sun crosses the local meridian.
    SolarNoon,
    /// Upper limb of the Sun disappears below the refracted horizon.
    Sunset,
}

impl SolarEvent {
    /// All events in chronological order.
    pub const ALL: [SolarEvent; 3] = [Self::Sunrise, Self::SolarNoon, Self::Sunset];

    /// Multiplier applied to the hour angle when offsetting from solar noon.
    pub fn hour_angle_sign(self) -> f64 {
        match self {
            Self::Sunrise => -1.0,
            Self::SolarNoon => 0.0,
            Self::Sunset => 1.0,
        }
    }

    /// Whether the event needs the hour angle (and so can fail near the poles).
    pub fn needs_horizon_crossing(self) -> bool {
        !matches!(self, Self::SolarNoon)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::SolarNoon => "solar noon",
            Self::Sunset => "sunset",
        }
    }
}

impl std::fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why the Sun does not cross the horizon on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizonCondition {
    /// `cos H > 1`: the Sun stays below the horizon all day (polar night).
    NeverRises,
    /// `cos H < -1`: the Sun stays above the horizon all day (midnight sun).
    NeverSets,
    /// The hour-angle argument or event time is not a finite number.
    NonFinite,
}

impl std::fmt::Display for HorizonCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeverRises => f.write_str("sun never rises (polar night)"),
            Self::NeverSets => f.write_str("sun never sets (midnight sun)"),
            Self::NonFinite => f.write_str("non-finite coordinate"),
        }
    }
}

/// Sunrise and sunset for one date, or the reason they do not exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Daylight {
    Events {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// Polar night.
    NeverRises,
    /// Midnight sun.
    NeverSets,
}

/// All solar events for one calendar date and location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub date: NaiveDate,
    pub location: GeoCoordinate,
    /// Always defined, even in polar day or night.
    pub solar_noon: DateTime<Utc>,
    pub daylight: Daylight,
}

impl SunTimes {
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        match self.daylight {
            Daylight::Events { sunrise, .. } => Some(sunrise),
            _ => None,
        }
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        match self.daylight {
            Daylight::Events { sunset, .. } => Some(sunset),
            _ => None,
        }
    }

    /// Time between sunrise and sunset; a full day under the midnight sun
    /// and zero during polar night.
    pub fn day_length(&self) -> Duration {
        match self.daylight {
            Daylight::Events { sunrise, sunset } => sunset - sunrise,
            Daylight::NeverRises => Duration::zero(),
            Daylight::NeverSets => Duration::days(1),
        }
    }
}

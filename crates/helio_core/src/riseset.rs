//! Solar noon, sunrise and sunset for a calendar date and location.
//!
//! Closed-form NOAA pipeline: calendar date → Julian day → Julian century →
//! orbital elements → equation of time and hour angle → minutes after UTC
//! midnight → UTC instant.
//!
//! Longitude is east positive (west negative) and is subtracted when forming
//! solar noon. Any time of day on the date argument is ignored, so every
//! timestamp on the same calendar date gives the same answer.

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, trace};

use helio_time::{DateLike, date_at_minutes, julian_century, julian_day};

use crate::equation_of_time::equation_of_time_for;
use crate::error::SolarError;
use crate::hour_angle::hour_angle;
use crate::orbit::OrbitalElements;
use crate::riseset_types::{Daylight, GeoCoordinate, HorizonCondition, SolarEvent, SunTimes};

/// Minutes after UTC midnight at which the mean Sun transits Greenwich.
const MEAN_NOON_MINUTES: f64 = 720.0;

/// Minutes of time per degree of Earth rotation.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Normalise `date` and evaluate the orbital elements at its 0h UT.
fn elements_for<D: DateLike>(date: D) -> Result<(NaiveDate, OrbitalElements), SolarError> {
    let date = date.calendar_date()?;
    let t = julian_century(julian_day(date)?);
    let elements = OrbitalElements::at_century(t);
    trace!("{date}: T = {t:.10}, elements = {elements:?}");
    Ok((date, elements))
}

fn noon_minutes(elements: &OrbitalElements, longitude_deg: f64) -> f64 {
    MEAN_NOON_MINUTES - MINUTES_PER_DEGREE * longitude_deg - equation_of_time_for(elements)
}

fn horizon_failure(
    latitude_deg: f64,
    longitude_deg: f64,
    condition: HorizonCondition,
) -> SolarError {
    SolarError::InvalidCoordinates {
        latitude_deg,
        longitude_deg,
        condition,
    }
}

fn minutes_for(
    event: SolarEvent,
    elements: &OrbitalElements,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, SolarError> {
    let noon = noon_minutes(elements, longitude_deg);
    if !event.needs_horizon_crossing() {
        return Ok(noon);
    }
    let h = hour_angle(latitude_deg, elements.declination).map_err(|condition| {
        debug!(
            "no {event} at {latitude_deg}, {longitude_deg} (declination {:.4}°): {condition}",
            elements.declination
        );
        horizon_failure(latitude_deg, longitude_deg, condition)
    })?;
    Ok(noon + event.hour_angle_sign() * MINUTES_PER_DEGREE * h)
}

fn instant_for(
    date: NaiveDate,
    minutes: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<DateTime<Utc>, SolarError> {
    date_at_minutes(date, minutes)
        .ok_or_else(|| horizon_failure(latitude_deg, longitude_deg, HorizonCondition::NonFinite))
}

/// Minutes after UTC midnight of `event` on the calendar date of `date`.
///
/// # Errors
/// * [`SolarError::InvalidInput`] if `date` does not carry a calendar date.
/// * [`SolarError::InvalidCoordinates`] for sunrise/sunset when the Sun does
///   not cross the horizon that day (never for solar noon).
pub fn event_minutes<D: DateLike>(
    event: SolarEvent,
    date: D,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, SolarError> {
    let (_, elements) = elements_for(date)?;
    minutes_for(event, &elements, latitude_deg, longitude_deg)
}

/// UTC instant of `event` on the calendar date of `date`.
///
/// Same failure modes as [`event_minutes`].
pub fn event_time<D: DateLike>(
    event: SolarEvent,
    date: D,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<DateTime<Utc>, SolarError> {
    let (date, elements) = elements_for(date)?;
    let minutes = minutes_for(event, &elements, latitude_deg, longitude_deg)?;
    instant_for(date, minutes, latitude_deg, longitude_deg)
}

/// Solar noon in minutes after UTC midnight.
///
/// `720 − 4·λ − E`. The latitude does not enter the result; it is accepted
/// so all event functions share one signature.
pub fn solar_noon_minutes<D: DateLike>(
    date: D,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, SolarError> {
    event_minutes(SolarEvent::SolarNoon, date, latitude_deg, longitude_deg)
}

/// Sunrise in minutes after UTC midnight: solar noon less `4·H`.
pub fn sunrise_minutes<D: DateLike>(
    date: D,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, SolarError> {
    event_minutes(SolarEvent::Sunrise, date, latitude_deg, longitude_deg)
}

/// Sunset in minutes after UTC midnight: solar noon plus `4·H`.
pub fn sunset_minutes<D: DateLike>(
    date: D,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, SolarError> {
    event_minutes(SolarEvent::Sunset, date, latitude_deg, longitude_deg)
}

/// Solar noon as a UTC instant. Defined at every latitude.
pub fn solar_noon<D: DateLike>(
    date: D,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<DateTime<Utc>, SolarError> {
    event_time(SolarEvent::SolarNoon, date, latitude_deg, longitude_deg)
}

/// Sunrise as a UTC instant.
pub fn sunrise<D: DateLike>(
    date: D,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<DateTime<Utc>, SolarError> {
    event_time(SolarEvent::Sunrise, date, latitude_deg, longitude_deg)
}

/// Sunset as a UTC instant.
pub fn sunset<D: DateLike>(
    date: D,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<DateTime<Utc>, SolarError> {
    event_time(SolarEvent::Sunset, date, latitude_deg, longitude_deg)
}

/// Solar declination in degrees on the calendar date of `date`.
pub fn declination_for_date<D: DateLike>(date: D) -> Result<f64, SolarError> {
    Ok(elements_for(date)?.1.declination)
}

/// Equation of time in minutes on the calendar date of `date`.
pub fn equation_of_time_for_date<D: DateLike>(date: D) -> Result<f64, SolarError> {
    Ok(equation_of_time_for(&elements_for(date)?.1))
}

/// Solar noon, sunrise and sunset for one date, evaluating the orbital
/// elements once.
///
/// Polar day and night are reported through [`Daylight`] rather than as an
/// error; only an unusable date or a non-finite coordinate fails.
pub fn sun_times<D: DateLike>(date: D, location: &GeoCoordinate) -> Result<SunTimes, SolarError> {
    let GeoCoordinate {
        latitude_deg,
        longitude_deg,
    } = *location;
    let (date, elements) = elements_for(date)?;

    let noon = noon_minutes(&elements, longitude_deg);
    let solar_noon = instant_for(date, noon, latitude_deg, longitude_deg)?;

    let daylight = match hour_angle(latitude_deg, elements.declination) {
        Ok(h) => {
            let offset = MINUTES_PER_DEGREE * h;
            Daylight::Events {
                sunrise: instant_for(date, noon - offset, latitude_deg, longitude_deg)?,
                sunset: instant_for(date, noon + offset, latitude_deg, longitude_deg)?,
            }
        }
        Err(HorizonCondition::NeverRises) => Daylight::NeverRises,
        Err(HorizonCondition::NeverSets) => Daylight::NeverSets,
        Err(condition @ HorizonCondition::NonFinite) => {
            return Err(horizon_failure(latitude_deg, longitude_deg, condition));
        }
    };
    debug!("{date} at {latitude_deg}, {longitude_deg}: noon {solar_noon}, {daylight:?}");

    Ok(SunTimes {
        date,
        location: *location,
        solar_noon,
        daylight,
    })
}

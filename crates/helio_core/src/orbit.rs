//! Low-order solar orbital elements as functions of Julian centuries.
//!
//! Coefficients follow the NOAA solar calculator spreadsheet (itself after
//! Meeus, *Astronomical Algorithms*, ch. 25). Every function is total over
//! the real line and returns degrees unless noted.

use crate::angle::{degrees_to_radians, radians_to_degrees};

/// Longitude of the Moon's ascending node used by the nutation and
/// aberration corrections, in degrees (unreduced).
#[inline]
fn node_longitude_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Mean obliquity of the ecliptic.
pub fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity corrected for nutation.
pub fn oblique_correction(t: f64, mean_obliquity: f64) -> f64 {
    mean_obliquity + 0.00256 * degrees_to_radians(node_longitude_deg(t)).cos()
}

/// Geometric mean anomaly of the Sun.
///
/// Not reduced modulo 360; downstream terms only ever take its sine or cosine.
pub fn geometric_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Geometric mean longitude of the Sun, in `[0, 360)`.
pub fn geometric_mean_longitude(t: f64) -> f64 {
    (280.46646 + t * (36000.76983 + t * 0.0003032)).rem_euclid(360.0)
}

/// Eccentricity of Earth's orbit (dimensionless).
pub fn eccentricity_of_earth_orbit(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of center: three-term sine series in the mean anomaly.
pub fn equation_of_center(mean_anomaly: f64, t: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.00028
}

/// True longitude of the Sun.
pub fn true_longitude(mean_longitude: f64, equation_of_center: f64) -> f64 {
    mean_longitude + equation_of_center
}

/// Apparent longitude of the Sun (true longitude less nutation and aberration).
pub fn apparent_longitude(true_longitude: f64, t: f64) -> f64 {
    true_longitude - 0.00569 - 0.00478 * degrees_to_radians(node_longitude_deg(t)).sin()
}

/// Declination of the Sun.
pub fn declination(oblique_correction: f64, apparent_longitude: f64) -> f64 {
    let sin_decl = degrees_to_radians(oblique_correction).sin()
        * degrees_to_radians(apparent_longitude).sin();
    radians_to_degrees(sin_decl.asin())
}

/// `tan²(ε/2)` for the corrected obliquity ε; only the equation of time uses it.
pub fn obliquity_y(oblique_correction: f64) -> f64 {
    let half = degrees_to_radians(oblique_correction / 2.0).tan();
    half * half
}

/// Every orbital quantity for one instant, evaluated in a single pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Julian centuries since J2000.0 the elements were evaluated at.
    pub julian_century: f64,
    pub mean_obliquity: f64,
    pub oblique_correction: f64,
    pub mean_anomaly: f64,
    pub mean_longitude: f64,
    pub eccentricity: f64,
    pub equation_of_center: f64,
    pub true_longitude: f64,
    pub apparent_longitude: f64,
    pub declination: f64,
    pub y: f64,
}

impl OrbitalElements {
    /// Evaluate all elements at `t` Julian centuries since J2000.0.
    pub fn at_century(t: f64) -> Self {
        let mean_obliquity = mean_obliquity_of_ecliptic(t);
        let oblique_correction = oblique_correction(t, mean_obliquity);
        let mean_anomaly = geometric_mean_anomaly(t);
        let mean_longitude = geometric_mean_longitude(t);
        let eccentricity = eccentricity_of_earth_orbit(t);
        let equation_of_center = equation_of_center(mean_anomaly, t);
        let true_longitude = true_longitude(mean_longitude, equation_of_center);
        let apparent_longitude = apparent_longitude(true_longitude, t);
        let declination = declination(oblique_correction, apparent_longitude);
        let y = obliquity_y(oblique_correction);

        Self {
            julian_century: t,
            mean_obliquity,
            oblique_correction,
            mean_anomaly,
            mean_longitude,
            eccentricity,
            equation_of_center,
            true_longitude,
            apparent_longitude,
            declination,
            y,
        }
    }
}

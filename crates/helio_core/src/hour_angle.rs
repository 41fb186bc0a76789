//! Sunrise/sunset hour angle and the polar domain check.

use crate::angle::{degrees_to_radians, radians_to_degrees};
use crate::riseset_types::HorizonCondition;

/// Solar zenith at sunrise/sunset in degrees: 90° plus 34' of standard
/// refraction and 16' of solar semidiameter.
pub const SOLAR_ZENITH_DEG: f64 = 90.833;

/// Cosine of the sunrise hour angle, before any domain check.
///
/// `cos H = cos(z) / (cos φ · cos δ) − tan φ · tan δ`
pub fn cos_hour_angle(latitude_deg: f64, declination_deg: f64) -> f64 {
    let phi = degrees_to_radians(latitude_deg);
    let decl = degrees_to_radians(declination_deg);
    degrees_to_radians(SOLAR_ZENITH_DEG).cos() / (phi.cos() * decl.cos())
        - phi.tan() * decl.tan()
}

/// Half-arc between sunrise and sunset, in degrees.
///
/// Fails when `cos H` leaves `[-1, 1]`: the Sun does not cross the horizon
/// at this latitude for this declination. The value is never clamped.
pub fn hour_angle(latitude_deg: f64, declination_deg: f64) -> Result<f64, HorizonCondition> {
    let cos_h = cos_hour_angle(latitude_deg, declination_deg);
    if cos_h.is_nan() {
        return Err(HorizonCondition::NonFinite);
    }
    if cos_h > 1.0 {
        return Err(HorizonCondition::NeverRises);
    }
    if cos_h < -1.0 {
        return Err(HorizonCondition::NeverSets);
    }
    Ok(radians_to_degrees(cos_h.acos()))
}

//! Degree/radian conversion.
//!
//! Every orbital formula is stated in degrees while `f64` trigonometry works
//! in radians; all crossings go through this pair.

use std::f64::consts::PI;

/// Degrees to radians.
#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Radians to degrees.
#[inline]
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

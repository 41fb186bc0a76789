//! Equation of time: apparent minus mean solar time, in minutes.
//!
//! A function of the date only. The observer's longitude enters the event
//! times separately (see [`crate::riseset`]).

use crate::angle::{degrees_to_radians, radians_to_degrees};
use crate::orbit::OrbitalElements;

/// Equation of time in minutes at `t` Julian centuries since J2000.0.
pub fn equation_of_time(t: f64) -> f64 {
    equation_of_time_for(&OrbitalElements::at_century(t))
}

/// Equation of time in minutes from already evaluated orbital elements.
///
/// `E = 4·deg( y·sin2L − 2e·sinM + 4ey·sinM·cos2L − ½y²·sin4L − 1.25e²·sin2M )`
pub fn equation_of_time_for(elements: &OrbitalElements) -> f64 {
    let y = elements.y;
    let e = elements.eccentricity;
    let l = degrees_to_radians(elements.mean_longitude);
    let m = degrees_to_radians(elements.mean_anomaly);

    let rad = y * (2.0 * l).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l).cos()
        - 0.5 * y * y * (4.0 * l).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    4.0 * radians_to_degrees(rad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_year_2010() {
        let eot = equation_of_time(0.1);
        assert!((eot - (-3.313375921)).abs() < 1e-3, "eot = {eot}");
    }

    #[test]
    fn bounded_over_a_year() {
        // The equation of time never exceeds about ±16.5 minutes.
        for day in 0..366 {
            let t = (5_479.5 + day as f64) / 36_525.0;
            let eot = equation_of_time(t);
            assert!(eot.abs() < 17.0, "day {day}: eot = {eot}");
        }
    }

    #[test]
    fn november_maximum() {
        // 2015-11-03, near the annual maximum of +16.4 min.
        let t = (2_457_329.5 - 2_451_545.0) / 36_525.0;
        let eot = equation_of_time(t);
        assert!(eot > 16.0 && eot < 16.6, "eot = {eot}");
    }
}

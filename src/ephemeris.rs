//! Low-precision solar ephemeris (NOAA solar calculator).
//!
//! Every function takes `t`, Julian centuries since J2000.0, and returns
//! degrees unless noted otherwise. The formulas follow Meeus, "Astronomical
//! Algorithms", chapter 25 (low accuracy), and are good to about a minute of
//! time for dates within a few centuries of 2000.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, tan,
};

/// Geometric mean longitude of the sun, in [0, 360).
#[must_use]
pub fn mean_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(&[280.46646, 36000.76983, 0.0003032], t))
}

/// Geometric mean anomaly of the sun.
#[must_use]
pub fn mean_anomaly(t: f64) -> f64 {
    polynomial(&[357.52911, 35999.05029, -0.0001537], t)
}

/// Eccentricity of the Earth's orbit (unitless).
#[must_use]
pub fn eccentricity(t: f64) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], t)
}

/// Equation of center of the sun.
#[must_use]
pub fn equation_of_center(t: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly(t));
    sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin(2.0 * m) * polynomial(&[0.019993, -0.000101], t)
        + sin(3.0 * m) * 0.000289
}

/// True longitude of the sun.
#[must_use]
pub fn true_longitude(t: f64) -> f64 {
    mean_longitude(t) + equation_of_center(t)
}

/// True anomaly of the sun.
#[must_use]
pub fn true_anomaly(t: f64) -> f64 {
    mean_anomaly(t) + equation_of_center(t)
}

/// Sun-Earth distance in astronomical units.
#[must_use]
pub fn radius_vector(t: f64) -> f64 {
    let e = eccentricity(t);
    let v = degrees_to_radians(true_anomaly(t));
    (1.000001018 * (1.0 - e * e)) / (1.0 + e * cos(v))
}

/// Longitude of the ascending node of the moon's orbit, in radians.
fn omega(t: f64) -> f64 {
    degrees_to_radians(125.04 - 1934.136 * t)
}

/// Apparent longitude of the sun, corrected for nutation and aberration.
#[must_use]
pub fn apparent_longitude(t: f64) -> f64 {
    true_longitude(t) - 0.00569 - 0.00478 * sin(omega(t))
}

/// Mean obliquity of the ecliptic.
#[must_use]
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = polynomial(&[21.448, -46.8150, -0.00059, 0.001813], t);
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation.
#[must_use]
pub fn obliquity_correction(t: f64) -> f64 {
    mean_obliquity(t) + 0.00256 * cos(omega(t))
}

/// Apparent right ascension of the sun, in (-180, 180].
#[must_use]
pub fn right_ascension(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_correction(t));
    let lambda = degrees_to_radians(apparent_longitude(t));
    radians_to_degrees(atan2(cos(epsilon) * sin(lambda), cos(lambda)))
}

/// Apparent declination of the sun.
#[must_use]
pub fn declination(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_correction(t));
    let lambda = degrees_to_radians(apparent_longitude(t));
    radians_to_degrees(asin(sin(epsilon) * sin(lambda)))
}

/// Equation of time in minutes: apparent minus mean solar time.
#[must_use]
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_correction(t));
    let l0 = degrees_to_radians(mean_longitude(t));
    let e = eccentricity(t);
    let m = degrees_to_radians(mean_anomaly(t));

    let y = tan(epsilon / 2.0);
    let y = y * y;

    let sin_2l0 = sin(2.0 * l0);
    let sin_m = sin(m);
    let eot = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);

    4.0 * radians_to_degrees(eot)
}

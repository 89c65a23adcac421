//! Hour-angle solver and rise/set times.
//!
//! All times are [`MinutesUtc`] relative to 00:00 UTC of the date whose Julian
//! Day Number is passed in. A sun that never reaches the requested zenith
//! angle on that date (polar day or polar night) yields `None`.

use crate::ephemeris::{declination, equation_of_time};
use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, tan};
use crate::time::{julian_century, julian_day};
use crate::types::{MINUTES_PER_DAY, MinutesUtc};
use crate::{Crossing, Location, Zenith};

/// Hour angle of the rising sun at a zenith angle, in radians.
///
/// Solves `cos z = sin φ sin δ + cos φ cos δ cos H` for `H`. Returns `None`
/// when the sun stays entirely above or below the zenith angle all day.
///
/// # Example
/// ```
/// # use sunrise_sunset::{riseset::hour_angle_at_rise, Zenith};
/// // At the equator on an equinox the sun rises six hours before noon
/// let h = hour_angle_at_rise(0.0, 0.0, Zenith::Custom(90.0)).unwrap();
/// assert!((h - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
///
/// // Midsummer at 80°N: midnight sun
/// assert_eq!(hour_angle_at_rise(80.0, 23.4, Zenith::SunriseSunset), None);
/// ```
#[must_use]
pub fn hour_angle_at_rise(latitude: f64, declination: f64, zenith: Zenith) -> Option<f64> {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let z = degrees_to_radians(zenith.angle());

    let cos_h = cos(z) / (cos(phi) * cos(delta)) - tan(phi) * tan(delta);
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(acos(cos_h))
}

/// Hour angle of the setting sun at a zenith angle, in radians.
///
/// The negation of [`hour_angle_at_rise`].
#[must_use]
pub fn hour_angle_at_set(latitude: f64, declination: f64, zenith: Zenith) -> Option<f64> {
    hour_angle_at_rise(latitude, declination, zenith).map(|h| -h)
}

/// Solar noon (meridian transit) for the Julian century `t` of a date.
///
/// Two passes: the equation of time is first sampled at the longitude's
/// approximate transit, then again at the first estimate.
#[must_use]
pub fn solar_noon_utc(t: f64, longitude: f64) -> MinutesUtc {
    let base = julian_day(t);
    let transit = |eot: f64| 720.0 - 4.0 * longitude - eot;

    let first = transit(equation_of_time(julian_century(base - longitude / 360.0)));
    let refined = julian_century(base - 0.5 + first / MINUTES_PER_DAY);
    MinutesUtc::from_minutes(transit(equation_of_time(refined)))
}

/// Rise or set time for the date with Julian Day Number `jd`.
///
/// The first estimate samples the sun at solar noon; the second samples it
/// at the first estimate. `None` if either pass has no solution.
#[must_use]
pub fn event_utc(
    jd: f64,
    location: &Location,
    zenith: Zenith,
    crossing: Crossing,
) -> Option<MinutesUtc> {
    let latitude = location.latitude();
    let longitude = location.longitude();

    let time_at = |t: f64| -> Option<f64> {
        let hour_angle = match crossing {
            Crossing::Rising => hour_angle_at_rise(latitude, declination(t), zenith)?,
            Crossing::Setting => hour_angle_at_set(latitude, declination(t), zenith)?,
        };
        Some(720.0 + 4.0 * (-longitude - radians_to_degrees(hour_angle)) - equation_of_time(t))
    };

    let noon = solar_noon_utc(julian_century(jd), longitude).minutes();
    let first = time_at(julian_century(jd + noon / MINUTES_PER_DAY))?;
    let refined = time_at(julian_century(jd + first / MINUTES_PER_DAY))?;
    Some(MinutesUtc::from_minutes(refined))
}

/// Sunrise (or twilight start) for the date with Julian Day Number `jd`.
#[must_use]
pub fn sunrise_utc(jd: f64, location: &Location, zenith: Zenith) -> Option<MinutesUtc> {
    event_utc(jd, location, zenith, Crossing::Rising)
}

/// Sunset (or twilight end) for the date with Julian Day Number `jd`.
#[must_use]
pub fn sunset_utc(jd: f64, location: &Location, zenith: Zenith) -> Option<MinutesUtc> {
    event_utc(jd, location, zenith, Crossing::Setting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const JDN_2016_06_21: f64 = 2_457_561.0;

    fn karekare() -> Location {
        Location::default()
    }

    #[test]
    fn test_hour_angle_symmetry_and_domain() {
        let rise = hour_angle_at_rise(-36.991, 23.43, Zenith::SunriseSunset).unwrap();
        let set = hour_angle_at_set(-36.991, 23.43, Zenith::SunriseSunset).unwrap();
        assert!(rise > 0.0);
        assert_eq!(set, -rise);

        // Polar night for every threshold at the north pole in December
        for zenith in Zenith::STANDARD {
            assert_eq!(hour_angle_at_rise(89.9, -23.4, zenith), None);
        }
        // Higher zenith angles give wider hour angles
        let civil = hour_angle_at_rise(45.0, 10.0, Zenith::CivilTwilight).unwrap();
        let base = hour_angle_at_rise(45.0, 10.0, Zenith::SunriseSunset).unwrap();
        assert!(civil > base);
    }

    #[test]
    fn test_solar_noon_karekare() {
        let t = julian_century(JDN_2016_06_21);
        assert_abs_diff_eq!(solar_noon_utc(t, karekare().longitude()).minutes(), 23.8395, epsilon = 1e-3);
        assert_abs_diff_eq!(solar_noon_utc(t, 0.0).minutes(), 721.8928, epsilon = 1e-3);
    }

    #[test]
    fn test_karekare_winter_solstice() {
        let location = karekare();
        let offset = 12.0 * 60.0;

        let sunrise = sunrise_utc(JDN_2016_06_21, &location, Zenith::SunriseSunset).unwrap();
        let sunset = sunset_utc(JDN_2016_06_21, &location, Zenith::SunriseSunset).unwrap();
        // 07:35:20 and 17:12:33 local
        assert_abs_diff_eq!(sunrise.minutes() + offset, 7.0 * 60.0 + 35.0 + 20.0 / 60.0, epsilon = 0.05);
        assert_abs_diff_eq!(sunset.minutes() + offset, 17.0 * 60.0 + 12.0 + 33.0 / 60.0, epsilon = 0.05);

        let civil = sunrise_utc(JDN_2016_06_21, &location, Zenith::CivilTwilight).unwrap();
        let astro = sunset_utc(JDN_2016_06_21, &location, Zenith::AstronomicalTwilight).unwrap();
        // 07:06:17 and 18:45:51 local
        assert_abs_diff_eq!(civil.minutes() + offset, 7.0 * 60.0 + 6.0 + 17.0 / 60.0, epsilon = 0.05);
        assert_abs_diff_eq!(astro.minutes() + offset, 18.0 * 60.0 + 45.0 + 51.0 / 60.0, epsilon = 0.05);
    }

    #[test]
    fn test_equinox_at_equator_is_symmetric() {
        let location = Location::new(0.0, 0.0).unwrap();
        let jd = 2_457_102.0; // 2015-03-20
        let noon = solar_noon_utc(julian_century(jd), 0.0).minutes();
        let rise = sunrise_utc(jd, &location, Zenith::SunriseSunset).unwrap().minutes();
        let set = sunset_utc(jd, &location, Zenith::SunriseSunset).unwrap().minutes();

        assert_abs_diff_eq!(rise, 364.13, epsilon = 0.05);
        assert_abs_diff_eq!(noon, 727.54, epsilon = 0.05);
        assert_abs_diff_eq!(set, 1090.65, epsilon = 0.05);
        assert!(((noon - rise) - (set - noon)).abs() < 0.5);
    }

    #[test]
    fn test_polar_day_has_no_events() {
        let location = Location::new(70.0, 25.0).unwrap();
        let jd = 2_457_195.0; // 2015-06-21
        for zenith in Zenith::STANDARD {
            assert_eq!(sunrise_utc(jd, &location, zenith), None);
            assert_eq!(sunset_utc(jd, &location, zenith), None);
        }
    }

    #[test]
    fn test_polar_night_keeps_twilight() {
        let location = Location::new(70.0, 25.0).unwrap();
        let jd = 2_457_378.0; // 2015-12-21
        assert_eq!(sunrise_utc(jd, &location, Zenith::SunriseSunset), None);
        assert_eq!(sunset_utc(jd, &location, Zenith::SunriseSunset), None);

        let civil_start = sunrise_utc(jd, &location, Zenith::CivilTwilight).unwrap();
        let civil_end = sunset_utc(jd, &location, Zenith::CivilTwilight).unwrap();
        assert_abs_diff_eq!(civil_start.minutes(), 494.38, epsilon = 0.05);
        assert_abs_diff_eq!(civil_end.minutes(), 741.91, epsilon = 0.05);

        let astro_start = sunrise_utc(jd, &location, Zenith::AstronomicalTwilight).unwrap();
        assert_abs_diff_eq!(astro_start.minutes(), 305.63, epsilon = 0.05);
    }
}

//! Solar events of a day: twilights, sunrise, solar noon and sunset.
//!
//! This is the main entry point. It runs the rise/set calculator for every
//! standard zenith angle, computes solar noon, and falls back to
//! [`PolarSearch`] when the day has no sunrise or sunset.
//!
//! Only sunrise and sunset are searched for. A twilight boundary that is not
//! crossed on the day stays `None`.

use crate::riseset::{event_utc, solar_noon_utc};
use crate::time::ObservationDay;
use crate::types::{HalfDay, MinutesUtc};
use crate::{Crossing, Location, PolarSearch, Result, SolarEvents, Zenith};
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, TimeZone};
use log::trace;

/// Calculates the solar events of a day in minutes after 00:00 UTC.
///
/// # Errors
/// Returns `SearchDirectionUndetermined` or `SearchExhausted` if the day has
/// no sunrise or sunset and the polar search cannot supply one.
///
/// # Example
/// ```
/// # use sunrise_sunset::{noaa, time::ObservationDay, Location, PolarSearch};
/// let day = ObservationDay::from_calendar(2015, 3, 20).unwrap();
/// let equator = Location::new(0.0, 0.0).unwrap();
///
/// let events = noaa::solar_events_for_day(&day, &equator, &PolarSearch::standard()).unwrap();
/// assert!(events.sunrise() < events.solar_noon());
/// assert!(events.solar_noon() < events.sunset());
/// ```
pub fn solar_events_for_day(
    day: &ObservationDay,
    location: &Location,
    search: &PolarSearch,
) -> Result<SolarEvents<MinutesUtc>> {
    let jd = day.julian_day();
    trace!(
        "solar events for JD {jd} at {}, {}",
        location.latitude(),
        location.longitude()
    );

    let half_day = |crossing: Crossing| -> Result<HalfDay<MinutesUtc>> {
        let base = match event_utc(jd, location, Zenith::SunriseSunset, crossing) {
            Some(minutes) => minutes,
            None => search.find(day, location, crossing)?,
        };
        Ok(HalfDay {
            astronomical: event_utc(jd, location, Zenith::AstronomicalTwilight, crossing),
            nautical: event_utc(jd, location, Zenith::NauticalTwilight, crossing),
            civil: event_utc(jd, location, Zenith::CivilTwilight, crossing),
            base,
        })
    };

    let morning = half_day(Crossing::Rising)?;
    let evening = half_day(Crossing::Setting)?;
    let solar_noon = solar_noon_utc(day.julian_century(), location.longitude());

    Ok(SolarEvents::assemble(morning, solar_noon, evening))
}

/// Calculates the solar events of a calendar date in minutes after 00:00 UTC.
///
/// Uses the standard polar search.
///
/// # Errors
/// Returns `InvalidDateTime` for an invalid date, otherwise as
/// [`solar_events_for_day`].
///
/// # Example
/// ```
/// # use sunrise_sunset::{noaa, Location};
/// let events = noaa::solar_events_utc(2016, 6, 21, &Location::default()).unwrap();
///
/// // Sunrise in New Zealand is the previous evening in UTC
/// let (day_offset, _) = events.sunrise().day_and_minutes();
/// assert_eq!(day_offset, -1);
/// ```
pub fn solar_events_utc(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
) -> Result<SolarEvents<MinutesUtc>> {
    let day = ObservationDay::from_calendar(year, month, day)?;
    solar_events_for_day(&day, location, &PolarSearch::standard())
}

/// Calculates the solar events of the local date of `date`.
///
/// Only the date and the UTC offset of `date` matter: all returned
/// timestamps carry that offset, even if the time zone changes offset during
/// the day. Uses the standard polar search.
///
/// # Errors
/// As [`solar_events_with_search`].
///
/// # Example
/// ```
/// # use sunrise_sunset::{noaa, Location};
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let date = "2016-06-21T00:00:00+12:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let events = noaa::solar_events(date, &Location::default()).unwrap();
///
/// assert_eq!(events.sunrise().hour(), 7);
/// assert_eq!(events.sunset().hour(), 17);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_events<Tz: TimeZone>(
    date: DateTime<Tz>,
    location: &Location,
) -> Result<SolarEvents<DateTime<FixedOffset>>> {
    solar_events_with_search(date, location, &PolarSearch::standard())
}

/// Calculates the solar events of the local date of `date` with a custom
/// polar search limit.
///
/// # Errors
/// Returns `InvalidDateTime` if the date cannot be converted, the polar
/// search failures of [`solar_events_for_day`], or `TimestampOutOfRange` if
/// an event cannot be represented as a timestamp.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_events_with_search<Tz: TimeZone>(
    date: DateTime<Tz>,
    location: &Location,
    search: &PolarSearch,
) -> Result<SolarEvents<DateTime<FixedOffset>>> {
    let day = ObservationDay::from_datetime(&date)?;
    solar_events_for_day(&day, location, search)?.try_map(|minutes| day.local_timestamp(minutes))
}

/// Calculates today's solar events in the system's local time zone.
///
/// # Errors
/// As [`solar_events`].
#[cfg(all(feature = "chrono", feature = "std"))]
pub fn solar_events_now(location: &Location) -> Result<SolarEvents<DateTime<FixedOffset>>> {
    solar_events(chrono::Local::now(), location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_karekare_assembly() {
        let events = solar_events_utc(2016, 6, 21, &Location::default()).unwrap();
        let local = |m: &MinutesUtc| m.minutes() + 720.0;

        assert_abs_diff_eq!(local(events.sunrise()), 455.342, epsilon = 0.01);
        assert_abs_diff_eq!(local(events.solar_noon()), 743.840, epsilon = 0.01);
        assert_abs_diff_eq!(local(events.sunset()), 1032.560, epsilon = 0.01);
        assert_abs_diff_eq!(local(events.civil_twilight_start().unwrap()), 426.285, epsilon = 0.01);
        assert_abs_diff_eq!(local(events.nautical_twilight_start().unwrap()), 393.711, epsilon = 0.01);
        assert_abs_diff_eq!(local(events.astronomical_twilight_start().unwrap()), 362.052, epsilon = 0.01);
        assert_abs_diff_eq!(local(events.civil_twilight_end().unwrap()), 1061.617, epsilon = 0.01);
        assert_abs_diff_eq!(local(events.nautical_twilight_end().unwrap()), 1094.191, epsilon = 0.01);
        assert_abs_diff_eq!(local(events.astronomical_twilight_end().unwrap()), 1125.850, epsilon = 0.01);
    }

    #[test]
    fn test_polar_day_keeps_twilights_absent() {
        let location = Location::new(70.0, 25.0).unwrap();
        let events = solar_events_utc(2015, 6, 21, &location).unwrap();

        assert!(events.sunrise().minutes() < 0.0);
        assert!(events.sunset().minutes() >= 1440.0);
        for zenith in [
            Zenith::CivilTwilight,
            Zenith::NauticalTwilight,
            Zenith::AstronomicalTwilight,
        ] {
            assert_eq!(events.rising(zenith), None);
            assert_eq!(events.setting(zenith), None);
        }
    }

    #[test]
    fn test_polar_night_substitutes_base_events_only() {
        let location = Location::new(70.0, 25.0).unwrap();
        let events = solar_events_utc(2015, 12, 21, &location).unwrap();

        assert_eq!(events.sunrise().day_and_minutes().0, 27);
        assert_eq!(events.sunset().day_and_minutes().0, -26);
        assert!(events.civil_twilight_start().is_some());
        assert!(events.astronomical_twilight_end().is_some());
    }

    #[test]
    fn test_search_failure_propagates() {
        let location = Location::new(66.0, 25.0).unwrap();
        let result = solar_events_utc(2015, 6, 21, &location);
        assert!(matches!(
            result,
            Err(Error::SearchDirectionUndetermined {
                crossing: Crossing::Rising,
                ..
            })
        ));

        let day = ObservationDay::from_calendar(2015, 6, 21).unwrap();
        let polar = Location::new(70.0, 25.0).unwrap();
        let short = PolarSearch::new(5).unwrap();
        assert!(matches!(
            solar_events_for_day(&day, &polar, &short),
            Err(Error::SearchExhausted { max_days: 5, .. })
        ));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        assert!(matches!(
            solar_events_utc(2015, 2, 29, &Location::default()),
            Err(Error::InvalidDateTime { .. })
        ));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_timestamps_share_input_offset() {
        let date = "2015-12-21T09:00:00+01:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let location = Location::new(70.0, 25.0).unwrap();
        let events = solar_events(date, &location).unwrap();

        let offsets = events
            .clone()
            .map(|timestamp| timestamp.offset().local_minus_utc());
        assert_eq!(*offsets.sunrise(), 3600);
        assert_eq!(*offsets.solar_noon(), 3600);
        assert_eq!(offsets.civil_twilight_end(), Some(&3600));

        // 2016-01-17 11:03:32 and 2015-11-25 11:16:57 local
        assert_eq!(
            events.sunrise().format("%Y-%m-%d %H:%M").to_string(),
            "2016-01-17 11:03"
        );
        assert_eq!(
            events.sunset().format("%Y-%m-%d %H:%M").to_string(),
            "2015-11-25 11:16"
        );
    }
}

//! Ordering, symmetry and determinism checks over a grid of places and dates.
//!
//! Uses only the numeric API, so these run without the `chrono` feature.

use sunrise_sunset::time::{julian_century, julian_day, julian_day_number};
use sunrise_sunset::{Location, MinutesUtc, SolarEvents, noaa};

fn grid_dates() -> impl Iterator<Item = (i32, u32, u32)> {
    [2000, 2016, 2024].into_iter().flat_map(|year| {
        (1..=12).flat_map(move |month| [1, 4, 7, 10, 13, 16, 19, 22, 25, 28].map(|day| (year, month, day)))
    })
}

fn grid_locations() -> impl Iterator<Item = Location> {
    (-13..=13).flat_map(|lat_step| {
        (-6..=6).map(move |lon_step| {
            Location::new(f64::from(lat_step) * 5.0, f64::from(lon_step) * 30.0).unwrap()
        })
    })
}

fn assert_chain(chain: &[Option<&MinutesUtc>], context: &str) {
    let present: Vec<f64> = chain.iter().flatten().map(|m| m.minutes()).collect();
    for pair in present.windows(2) {
        assert!(pair[0] <= pair[1], "{context}: {:?}", present);
    }
}

fn check_ordering(events: &SolarEvents<MinutesUtc>, context: &str) {
    assert!(events.sunrise() < events.solar_noon(), "{context}: sunrise after noon");
    assert!(events.solar_noon() < events.sunset(), "{context}: sunset before noon");

    assert_chain(
        &[
            events.astronomical_twilight_start(),
            events.nautical_twilight_start(),
            events.civil_twilight_start(),
            Some(events.sunrise()),
        ],
        context,
    );
    assert_chain(
        &[
            Some(events.sunset()),
            events.civil_twilight_end(),
            events.nautical_twilight_end(),
            events.astronomical_twilight_end(),
        ],
        context,
    );
}

#[test]
fn events_are_ordered_outside_polar_latitudes() {
    for location in grid_locations() {
        for (year, month, day) in grid_dates() {
            let events = noaa::solar_events_utc(year, month, day, &location).unwrap();
            let context = format!(
                "{year}-{month:02}-{day:02} at {}, {}",
                location.latitude(),
                location.longitude()
            );
            check_ordering(&events, &context);
        }
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let location = Location::new(51.4779, -0.0015).unwrap();
    for (year, month, day) in grid_dates().take(40) {
        let first = noaa::solar_events_utc(year, month, day, &location).unwrap();
        let second = noaa::solar_events_utc(year, month, day, &location).unwrap();
        assert_eq!(
            first.sunrise().minutes().to_bits(),
            second.sunrise().minutes().to_bits()
        );
        assert_eq!(first, second);
    }
}

#[test]
fn equinox_at_equator_is_symmetric_around_noon() {
    let location = Location::new(0.0, 0.0).unwrap();
    let events = noaa::solar_events_utc(2015, 3, 20, &location).unwrap();

    let morning = events.solar_noon().minutes() - events.sunrise().minutes();
    let afternoon = events.sunset().minutes() - events.solar_noon().minutes();
    assert!((morning - afternoon).abs() < 0.5, "{morning} vs {afternoon}");
    // A little over twelve hours of daylight because of the refraction allowance
    assert!((725.0..730.0).contains(&(morning + afternoon)));
}

#[test]
fn julian_century_round_trip() {
    for (year, month, day) in grid_dates() {
        let jd = julian_day_number(year, month, day).unwrap();
        let round_trip = julian_day(julian_century(jd));
        assert!((round_trip - jd).abs() < 1e-6, "{jd} became {round_trip}");
    }
}

#[test]
fn solar_noon_tracks_longitude() {
    // Four minutes of time per degree of longitude, eastwards earlier
    let west = noaa::solar_events_utc(2016, 6, 21, &Location::new(0.0, -90.0).unwrap()).unwrap();
    let east = noaa::solar_events_utc(2016, 6, 21, &Location::new(0.0, 90.0).unwrap()).unwrap();
    let spread = west.solar_noon().minutes() - east.solar_noon().minutes();
    assert!((spread - 720.0).abs() < 0.5, "spread {spread}");
}

#[test]
fn default_location_is_karekare() {
    let location = Location::default();
    assert!((location.latitude() + 36.991).abs() < 1e-6);
    assert!((location.longitude() - 174.487).abs() < 1e-6);
}

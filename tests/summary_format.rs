#![cfg(feature = "chrono")]

//! Text summary of a day's events.

use chrono::{DateTime, FixedOffset};
use sunrise_sunset::{Location, noaa};

#[test]
fn karekare_winter_solstice_summary() {
    let date = "2016-06-21T00:00:00+12:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let events = noaa::solar_events(date, &Location::default()).unwrap();

    let expected = "\
Astro Twilight 06:02:03 21-06
Naval Twilight 06:33:42 21-06
Civil Twilight 07:06:17 21-06
Sun Rises 07:35:20 21-06
Solar noon  12:23:50 21-06
Sun Sets 17:12:33 21-06
End of Civil Twilight  17:41:37 21-06
Naval Twilight 18:14:11 21-06
Astro Twilight 18:45:51 21-06
";
    assert_eq!(events.to_string(), expected);
}

#[test]
fn midnight_sun_summary_marks_missing_twilights() {
    let date = "2015-06-21T00:00:00+02:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let location = Location::new(70.0, 25.0).unwrap();
    let events = noaa::solar_events(date, &location).unwrap();

    let expected = "\
Astro Twilight Not Found
Naval Twilight Not Found
Civil Twilight Not Found
Sun Rises 00:59:10 15-05
Solar noon  12:21:42 21-06
Sun Sets 23:55:59 27-07
End of Civil Twilight  Not Found
Naval Twilight Not Found
Astro Twilight Not Found
";
    assert_eq!(events.to_string(), expected);
}

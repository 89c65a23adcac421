//! Sunrise and sunset for every day of a year at Karekare, New Zealand,
//! followed by today's full summary.
//!
//! Usage: `cargo run --example karekare_year [year]`

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, TimeZone};
use sunrise_sunset::{Location, noaa};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let year = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 2016,
    };

    let location = Location::default();
    let offset = FixedOffset::east_opt(12 * 3600).ok_or("invalid offset")?;
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or("invalid year")?;

    println!("date\tsunrise\tsunset");
    let mut date = first;
    while date.year() == year {
        let noon = offset
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).ok_or("invalid time")?)
            .single()
            .ok_or("ambiguous local time")?;
        let events = noaa::solar_events(noon, &location)?;
        println!(
            "{}\t{}\t{}",
            date.format("%Y-%m-%d"),
            events.sunrise().format("%H:%M:%S"),
            events.sunset().format("%H:%M:%S")
        );
        date += Duration::days(1);
    }

    println!();
    println!("Today at Karekare ({:.4}, {:.4}):", location.latitude(), location.longitude());
    print!("{}", noaa::solar_events_now(&location)?);

    Ok(())
}

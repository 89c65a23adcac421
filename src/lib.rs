//! # Sunrise Sunset
//!
//! Sunrise, sunset, solar noon and twilight times for any date and place,
//! using the NOAA solar calculator algorithm.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! For a calendar date and a location this library computes nine events:
//! the start and end of astronomical, nautical and civil twilight, sunrise,
//! solar noon and sunset. Accuracy is about a minute for dates within a few
//! centuries of 2000 at latitudes between ±72°.
//!
//! ## Features
//!
//! - Deterministic and stateless: plain functions returning immutable values
//! - Polar support: on days without sunrise or sunset the closest one is
//!   searched for, backward or forward depending on the polar season
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`,
//!   math via native or `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions, local clock
//! - `chrono` (default): Enable `DateTime<Tz>` based API and text summary
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for the public value types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sunrise-sunset = "0.9"
//!
//! # Numeric API only (minutes after midnight UTC)
//! sunrise-sunset = { version = "0.9", default-features = false, features = ["std"] }
//!
//! # Minimal no_std
//! sunrise-sunset = { version = "0.9", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - NOAA Global Monitoring Laboratory, Solar Calculator.
//!   <https://gml.noaa.gov/grad/solcalc/>
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell.
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sunrise_sunset::{noaa, Location};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Karekare, New Zealand, on the winter solstice
//! let date = "2016-06-21T00:00:00+12:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let events = noaa::solar_events(date, &Location::default()).unwrap();
//!
//! println!("Sunrise: {}", events.sunrise());
//! println!("Solar noon: {}", events.solar_noon());
//! println!("Sunset: {}", events.sunset());
//! if let Some(dusk) = events.civil_twilight_end() {
//!     println!("Dusk: {dusk}");
//! }
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use sunrise_sunset::{noaa, Location};
//!
//! let tromso = Location::new(69.65, 18.96).unwrap();
//! let events = noaa::solar_events_utc(2026, 3, 20, &tromso).unwrap();
//!
//! // Minutes after 00:00 UTC on 2026-03-20
//! println!("Sunrise: {:.1}", events.sunrise().minutes());
//! println!("Sunset: {:.1}", events.sunset().minutes());
//! ```
//!
//! ## Polar days and nights
//!
//! Sunrise and sunset are always present in [`SolarEvents`]. When the sun
//! does not rise or set on the requested date (above 66.4° latitude), the
//! closest sunrise or sunset on another date is returned instead: the last
//! sunrise and the next sunset during the midnight sun, the next sunrise and
//! the last sunset during the polar night. Twilight boundaries are never
//! searched for and are `None` when they are not crossed on the date.
//!
//! ## Coordinate System
//!
//! - **Latitude**: north positive (-90° to +90°)
//! - **Longitude**: east positive (-180° to +180°)
//! - **Zenith angle**: 0° = directly overhead, 90° = horizon

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::polar::PolarSearch;
pub use crate::time::ObservationDay;
pub use crate::types::{Crossing, Location, MinutesUtc, SolarEvents, Zenith};

// Algorithm modules
pub mod ephemeris;
pub mod noaa;
pub mod polar;
pub mod riseset;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

/// Version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gets the version of this library.
#[must_use]
pub const fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), "0.9.2");
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_numeric_and_chrono_api_agree() {
        let location = Location::default();
        let numeric = noaa::solar_events_utc(2016, 6, 21, &location).unwrap();

        #[cfg(feature = "chrono")]
        {
            use chrono::{DateTime, FixedOffset, Timelike};

            let date = "2016-06-21T15:00:00+12:00"
                .parse::<DateTime<FixedOffset>>()
                .unwrap();
            let events = noaa::solar_events(date, &location).unwrap();

            let (_, utc_minutes) = numeric.solar_noon().day_and_minutes();
            let noon = events.solar_noon();
            let noon_utc_minutes = f64::from(noon.naive_utc().time().num_seconds_from_midnight()) / 60.0;
            assert!((noon_utc_minutes - utc_minutes).abs() < 1.0 / 60.0 + 1e-9);
        }

        assert!(numeric.sunrise() < numeric.sunset());
    }
}

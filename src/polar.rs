//! Fallback search for sunrise and sunset near the poles.
//!
//! Inside the polar circles the sun can stay above or below the horizon for
//! weeks. When the day has no sunrise or sunset, [`PolarSearch`] walks day by
//! day to the closest one: back to the last sunrise and on to the next sunset
//! in polar summer, on to the next sunrise and back to the last sunset in
//! polar winter.

use crate::riseset::event_utc;
use crate::time::ObservationDay;
use crate::types::MinutesUtc;
use crate::{Crossing, Error, Location, Result, Zenith};
use log::{debug, warn};

/// Latitude beyond which the search direction can be derived from the season.
pub const POLAR_LATITUDE: f64 = 66.4;

/// Polar season of a location on a day of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarSeason {
    /// Midnight sun: the last sunrise is in the past, the next sunset ahead.
    Summer,
    /// Polar night: the next sunrise is ahead, the last sunset in the past.
    Winter,
}

/// Direction of the day-by-day walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// Towards earlier days.
    Backward,
    /// Towards later days.
    Forward,
}

impl SearchDirection {
    /// Gets the signed day step of this direction.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

impl PolarSeason {
    /// Gets the walk direction for a crossing in this season.
    #[must_use]
    pub const fn search_direction(self, crossing: Crossing) -> SearchDirection {
        match (self, crossing) {
            (Self::Summer, Crossing::Rising) | (Self::Winter, Crossing::Setting) => {
                SearchDirection::Backward
            }
            (Self::Summer, Crossing::Setting) | (Self::Winter, Crossing::Rising) => {
                SearchDirection::Forward
            }
        }
    }
}

/// Classifies a latitude and day of the year into a polar season.
///
/// The windows overlap around the equinoxes;
/// summer wins on the overlapping days. Returns `None` within 66.4° of the
/// equator.
///
/// # Example
/// ```
/// # use sunrise_sunset::polar::{polar_season, PolarSeason};
/// assert_eq!(polar_season(70.0, 172), Some(PolarSeason::Summer));
/// assert_eq!(polar_season(70.0, 355), Some(PolarSeason::Winter));
/// assert_eq!(polar_season(-75.0, 355), Some(PolarSeason::Summer));
/// assert_eq!(polar_season(66.0, 172), None);
/// ```
#[must_use]
pub fn polar_season(latitude: f64, day_of_year: u32) -> Option<PolarSeason> {
    let northern_summer = 79 < day_of_year && day_of_year < 267;
    let northern_winter = day_of_year < 83 || day_of_year > 263;

    let north = latitude > POLAR_LATITUDE;
    let south = latitude < -POLAR_LATITUDE;

    if (north && northern_summer) || (south && northern_winter) {
        Some(PolarSeason::Summer)
    } else if (north && northern_winter) || (south && northern_summer) {
        Some(PolarSeason::Winter)
    } else {
        None
    }
}

/// Bounded day-by-day search for the closest sunrise or sunset.
///
/// # Example
/// ```
/// # use sunrise_sunset::{time::ObservationDay, Location, PolarSearch};
/// let day = ObservationDay::from_calendar(2015, 6, 21).unwrap();
/// let tromso = Location::new(70.0, 25.0).unwrap();
///
/// let sunset = PolarSearch::standard().sunset(&day, &tromso).unwrap();
/// let (days_ahead, _) = sunset.day_and_minutes();
/// assert_eq!(days_ahead, 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolarSearch {
    max_days: u32,
}

impl PolarSearch {
    /// Default walk length: a little over a year, so any event that happens
    /// at all is found.
    pub const STANDARD_MAX_DAYS: u32 = 370;

    /// Creates a search walking at most `max_days` days.
    ///
    /// # Errors
    /// Returns `InvalidSearchLimit` if `max_days` is zero.
    pub const fn new(max_days: u32) -> Result<Self> {
        if max_days == 0 {
            return Err(Error::InvalidSearchLimit { value: max_days });
        }
        Ok(Self { max_days })
    }

    /// Creates a search with the default limit of 370 days.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            max_days: Self::STANDARD_MAX_DAYS,
        }
    }

    /// Gets the maximum number of days walked.
    #[must_use]
    pub const fn max_days(&self) -> u32 {
        self.max_days
    }

    /// Finds the closest sunrise for a day without one.
    ///
    /// # Errors
    /// Returns `SearchDirectionUndetermined` outside the polar seasons and
    /// `SearchExhausted` if no sunrise happens within the limit.
    pub fn sunrise(&self, day: &ObservationDay, location: &Location) -> Result<MinutesUtc> {
        self.find(day, location, Crossing::Rising)
    }

    /// Finds the closest sunset for a day without one.
    ///
    /// # Errors
    /// Returns `SearchDirectionUndetermined` outside the polar seasons and
    /// `SearchExhausted` if no sunset happens within the limit.
    pub fn sunset(&self, day: &ObservationDay, location: &Location) -> Result<MinutesUtc> {
        self.find(day, location, Crossing::Setting)
    }

    /// Finds the closest sunrise or sunset in the season's direction.
    ///
    /// The result is relative to 00:00 UTC of `day`, so it carries the
    /// whole-day distance to the day on which the event was found.
    ///
    /// # Errors
    /// See [`PolarSearch::sunrise`] and [`PolarSearch::sunset`].
    pub fn find(
        &self,
        day: &ObservationDay,
        location: &Location,
        crossing: Crossing,
    ) -> Result<MinutesUtc> {
        let latitude = location.latitude();
        let day_of_year = day.day_of_year();

        let Some(season) = polar_season(latitude, day_of_year) else {
            warn!("no {crossing} at latitude {latitude} on day {day_of_year}, outside polar seasons");
            return Err(Error::SearchDirectionUndetermined {
                crossing,
                latitude,
                day_of_year,
            });
        };

        let direction = season.search_direction(crossing);
        debug!(
            "no {crossing} on day {day_of_year} at latitude {latitude}, searching {direction:?} ({season:?})"
        );

        let limit = i32::try_from(self.max_days).unwrap_or(i32::MAX);
        for distance in 1..=limit {
            let offset = direction.step() * distance;
            let jd = day.julian_day() + f64::from(offset);
            if let Some(minutes) = event_utc(jd, location, Zenith::SunriseSunset, crossing) {
                debug!("found {crossing} {distance} days {direction:?}");
                return Ok(minutes.add_days(offset));
            }
        }

        warn!("no {crossing} within {} days {direction:?}", self.max_days);
        Err(Error::SearchExhausted {
            crossing,
            max_days: self.max_days,
        })
    }
}

impl Default for PolarSearch {
    fn default() -> Self {
        Self::standard()
    }
}

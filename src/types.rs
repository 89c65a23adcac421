//! Core data types for sunrise, sunset and twilight calculations.

use crate::error::{check_coordinates, check_zenith_angle};
use crate::math::floor;
use crate::Result;
use core::fmt;

/// Minutes in one day.
pub(crate) const MINUTES_PER_DAY: f64 = 1_440.0;

/// Default latitude: 36°59'27.60" S (Karekare, New Zealand).
pub const DEFAULT_LATITUDE: f64 = -(36.0 + 59.0 / 60.0 + 27.60 / 3600.0);

/// Default longitude: 174°29'13.20" E (Karekare, New Zealand).
pub const DEFAULT_LONGITUDE: f64 = 174.0 + 29.0 / 60.0 + 13.20 / 3600.0;

/// Observer position on the Earth's surface.
///
/// Latitude is north-positive, longitude east-positive, both in degrees.
///
/// # Example
/// ```
/// # use sunrise_sunset::Location;
/// let karekare = Location::new(-36.991, 174.487).unwrap();
/// assert_eq!(karekare.latitude(), -36.991);
///
/// assert!(Location::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLocation")
)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (-90 to +90, north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for Location {
    /// Karekare, New Zealand.
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocation> for Location {
    type Error = crate::Error;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

/// Zenith angle at which a rise/set event is taken to happen.
///
/// Measured from the point directly overhead: 90° is the geometric horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zenith {
    /// Sunrise/sunset: 90.833°, the horizon plus a fixed refraction allowance.
    SunriseSunset,
    /// Civil twilight (96°): when car lights go on and off.
    CivilTwilight,
    /// Nautical twilight (102°): first light at dawn.
    NauticalTwilight,
    /// Astronomical twilight (108°): the sun no longer washes out faint stars.
    AstronomicalTwilight,
    /// Custom zenith angle in degrees.
    Custom(f64),
}

impl Zenith {
    /// All four standard thresholds, from the horizon downwards.
    pub const STANDARD: [Self; 4] = [
        Self::SunriseSunset,
        Self::CivilTwilight,
        Self::NauticalTwilight,
        Self::AstronomicalTwilight,
    ];

    /// Gets the zenith angle in degrees.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => 90.833,
            Self::CivilTwilight => 96.0,
            Self::NauticalTwilight => 102.0,
            Self::AstronomicalTwilight => 108.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom threshold at the given zenith angle.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the angle is outside 0 to 180 degrees.
    pub fn custom(degrees: f64) -> Result<Self> {
        Ok(Self::Custom(check_zenith_angle(degrees)?))
    }
}

/// Direction of a horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossing {
    /// Morning event: sunrise or the start of a twilight.
    Rising,
    /// Evening event: sunset or the end of a twilight.
    Setting,
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rising => f.write_str("sunrise"),
            Self::Setting => f.write_str("sunset"),
        }
    }
}

/// Minutes since 00:00 UTC of the requested date.
///
/// Values outside 0..1440 belong to other days: a sunrise in New Zealand is
/// usually negative, and a polar search result can be weeks away.
///
/// # Example
/// ```
/// # use sunrise_sunset::MinutesUtc;
/// let time = MinutesUtc::from_minutes(-268.5);
/// let (day_offset, minutes) = time.day_and_minutes();
/// assert_eq!(day_offset, -1);
/// assert!((minutes - 1171.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinutesUtc(f64);

impl MinutesUtc {
    /// Creates a new `MinutesUtc` from minutes since midnight UTC.
    #[must_use]
    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    /// Gets the raw minutes value.
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.0
    }

    /// Gets the value as hours since midnight UTC.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.0 / 60.0
    }

    /// Shifts the value by whole days.
    #[must_use]
    pub fn add_days(self, days: i32) -> Self {
        Self(self.0 + f64::from(days) * MINUTES_PER_DAY)
    }

    /// Gets the day offset and normalized minutes (0.0 to < 1440.0).
    ///
    /// The day offset counts whole days from the requested date.
    #[must_use]
    pub fn day_and_minutes(&self) -> (i32, f64) {
        let minutes = self.0;
        if !minutes.is_finite() {
            return (0, minutes);
        }

        let mut day_offset_raw = floor(minutes / MINUTES_PER_DAY);
        let mut normalized = minutes - day_offset_raw * MINUTES_PER_DAY;

        if normalized < 0.0 {
            normalized += MINUTES_PER_DAY;
            day_offset_raw -= 1.0;
        } else if normalized >= MINUTES_PER_DAY {
            normalized -= MINUTES_PER_DAY;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized)
    }
}

/// Solar events of one day at one location.
///
/// Solar noon, sunrise and sunset are always present. Near the poles the
/// sunrise and sunset may come from another day (the closest one on which the
/// event happens); the twilight boundaries are `None` whenever the sun does not
/// cross them on the requested day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarEvents<T> {
    astronomical_twilight_start: Option<T>,
    nautical_twilight_start: Option<T>,
    civil_twilight_start: Option<T>,
    sunrise: T,
    solar_noon: T,
    sunset: T,
    civil_twilight_end: Option<T>,
    nautical_twilight_end: Option<T>,
    astronomical_twilight_end: Option<T>,
}

/// Morning or evening side of [`SolarEvents`]: twilight boundaries from the
/// widest to the narrowest, then the base event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HalfDay<T> {
    pub astronomical: Option<T>,
    pub nautical: Option<T>,
    pub civil: Option<T>,
    pub base: T,
}

impl<T> SolarEvents<T> {
    pub(crate) fn assemble(morning: HalfDay<T>, solar_noon: T, evening: HalfDay<T>) -> Self {
        Self {
            astronomical_twilight_start: morning.astronomical,
            nautical_twilight_start: morning.nautical,
            civil_twilight_start: morning.civil,
            sunrise: morning.base,
            solar_noon,
            sunset: evening.base,
            civil_twilight_end: evening.civil,
            nautical_twilight_end: evening.nautical,
            astronomical_twilight_end: evening.astronomical,
        }
    }

    /// Start of astronomical twilight (sun 18° below the horizon, rising).
    pub const fn astronomical_twilight_start(&self) -> Option<&T> {
        self.astronomical_twilight_start.as_ref()
    }

    /// Start of nautical twilight (sun 12° below the horizon, rising).
    pub const fn nautical_twilight_start(&self) -> Option<&T> {
        self.nautical_twilight_start.as_ref()
    }

    /// Start of civil twilight (sun 6° below the horizon, rising).
    pub const fn civil_twilight_start(&self) -> Option<&T> {
        self.civil_twilight_start.as_ref()
    }

    /// Sunrise.
    pub const fn sunrise(&self) -> &T {
        &self.sunrise
    }

    /// Solar noon: the sun crosses the local meridian.
    pub const fn solar_noon(&self) -> &T {
        &self.solar_noon
    }

    /// Sunset.
    pub const fn sunset(&self) -> &T {
        &self.sunset
    }

    /// End of civil twilight.
    pub const fn civil_twilight_end(&self) -> Option<&T> {
        self.civil_twilight_end.as_ref()
    }

    /// End of nautical twilight.
    pub const fn nautical_twilight_end(&self) -> Option<&T> {
        self.nautical_twilight_end.as_ref()
    }

    /// End of astronomical twilight (sky is fully dark).
    pub const fn astronomical_twilight_end(&self) -> Option<&T> {
        self.astronomical_twilight_end.as_ref()
    }

    /// Gets the rising event for a threshold.
    ///
    /// Custom thresholds are not part of the assembled day and return `None`.
    pub const fn rising(&self, zenith: Zenith) -> Option<&T> {
        match zenith {
            Zenith::SunriseSunset => Some(&self.sunrise),
            Zenith::CivilTwilight => self.civil_twilight_start(),
            Zenith::NauticalTwilight => self.nautical_twilight_start(),
            Zenith::AstronomicalTwilight => self.astronomical_twilight_start(),
            Zenith::Custom(_) => None,
        }
    }

    /// Gets the setting event for a threshold.
    ///
    /// Custom thresholds are not part of the assembled day and return `None`.
    pub const fn setting(&self, zenith: Zenith) -> Option<&T> {
        match zenith {
            Zenith::SunriseSunset => Some(&self.sunset),
            Zenith::CivilTwilight => self.civil_twilight_end(),
            Zenith::NauticalTwilight => self.nautical_twilight_end(),
            Zenith::AstronomicalTwilight => self.astronomical_twilight_end(),
            Zenith::Custom(_) => None,
        }
    }

    /// Converts every timestamp with `f`, keeping absent events absent.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SolarEvents<U> {
        SolarEvents {
            astronomical_twilight_start: self.astronomical_twilight_start.map(&mut f),
            nautical_twilight_start: self.nautical_twilight_start.map(&mut f),
            civil_twilight_start: self.civil_twilight_start.map(&mut f),
            sunrise: f(self.sunrise),
            solar_noon: f(self.solar_noon),
            sunset: f(self.sunset),
            civil_twilight_end: self.civil_twilight_end.map(&mut f),
            nautical_twilight_end: self.nautical_twilight_end.map(&mut f),
            astronomical_twilight_end: self.astronomical_twilight_end.map(&mut f),
        }
    }

    /// Fallible version of [`SolarEvents::map`].
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F: FnMut(T) -> core::result::Result<U, E>>(
        self,
        mut f: F,
    ) -> core::result::Result<SolarEvents<U>, E> {
        Ok(SolarEvents {
            astronomical_twilight_start: self.astronomical_twilight_start.map(&mut f).transpose()?,
            nautical_twilight_start: self.nautical_twilight_start.map(&mut f).transpose()?,
            civil_twilight_start: self.civil_twilight_start.map(&mut f).transpose()?,
            sunrise: f(self.sunrise)?,
            solar_noon: f(self.solar_noon)?,
            sunset: f(self.sunset)?,
            civil_twilight_end: self.civil_twilight_end.map(&mut f).transpose()?,
            nautical_twilight_end: self.nautical_twilight_end.map(&mut f).transpose()?,
            astronomical_twilight_end: self.astronomical_twilight_end.map(&mut f).transpose()?,
        })
    }
}

#[cfg(feature = "chrono")]
const NOT_FOUND: &str = "Not Found";

#[cfg(feature = "chrono")]
struct EventTime<'a, Tz: chrono::TimeZone>(Option<&'a chrono::DateTime<Tz>>);

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> fmt::Display for EventTime<'_, Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(time) => write!(f, "{}", time.format("%H:%M:%S %d-%m")),
            None => f.write_str(NOT_FOUND),
        }
    }
}

/// Nine-line summary, one event per line, `HH:MM:SS DD-MM` in the
/// timestamps' own offset and `Not Found` for absent twilight boundaries.
#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> fmt::Display for SolarEvents<chrono::DateTime<Tz>>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Astro Twilight {}", EventTime(self.astronomical_twilight_start()))?;
        writeln!(f, "Naval Twilight {}", EventTime(self.nautical_twilight_start()))?;
        writeln!(f, "Civil Twilight {}", EventTime(self.civil_twilight_start()))?;
        writeln!(f, "Sun Rises {}", EventTime(Some(self.sunrise())))?;
        writeln!(f, "Solar noon  {}", EventTime(Some(self.solar_noon())))?;
        writeln!(f, "Sun Sets {}", EventTime(Some(self.sunset())))?;
        writeln!(f, "End of Civil Twilight  {}", EventTime(self.civil_twilight_end()))?;
        writeln!(f, "Naval Twilight {}", EventTime(self.nautical_twilight_end()))?;
        writeln!(f, "Astro Twilight {}", EventTime(self.astronomical_twilight_end()))
    }
}

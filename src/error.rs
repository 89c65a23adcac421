//! Error types for the sunrise/sunset library.

use crate::types::Crossing;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while computing solar events.
///
/// A sun that simply does not reach a zenith angle on a given day is not an
/// error: the calculators report it as `None`. The only failures after valid
/// input are the two polar search variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid zenith angle for a custom rise/set threshold.
    InvalidZenithAngle {
        /// The invalid zenith angle value provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDateTime {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// UTC offset of a full day or more.
    InvalidUtcOffset {
        /// The offending offset in seconds.
        seconds: i32,
    },
    /// Polar search limit of zero days.
    InvalidSearchLimit {
        /// The invalid limit provided.
        value: u32,
    },
    /// The base event is missing but the location/date matches neither polar season.
    SearchDirectionUndetermined {
        /// Which event was being searched for.
        crossing: Crossing,
        /// Observer latitude in degrees.
        latitude: f64,
        /// Day of year of the requested date.
        day_of_year: u32,
    },
    /// The polar search walked its full budget without finding the event.
    SearchExhausted {
        /// Which event was being searched for.
        crossing: Crossing,
        /// Number of days walked.
        max_days: u32,
    },
    /// A computed instant cannot be represented as a calendar timestamp.
    TimestampOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidZenithAngle { value } => {
                write!(
                    f,
                    "invalid zenith angle {value}° (must be between 0° and 180°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::InvalidUtcOffset { seconds } => {
                write!(f, "invalid UTC offset {seconds}s (must be less than one day)")
            }
            Self::InvalidSearchLimit { value } => {
                write!(f, "invalid polar search limit {value} (must be at least one day)")
            }
            Self::SearchDirectionUndetermined {
                crossing,
                latitude,
                day_of_year,
            } => {
                write!(
                    f,
                    "cannot find {crossing}: no search direction for latitude {latitude}° on day {day_of_year}"
                )
            }
            Self::SearchExhausted { crossing, max_days } => {
                write!(f, "cannot find {crossing} within {max_days} days")
            }
            Self::TimestampOutOfRange => {
                write!(f, "timestamp out of representable range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid zenith angle error.
    #[must_use]
    pub const fn invalid_zenith_angle(value: f64) -> Self {
        Self::InvalidZenithAngle { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Returns true for the failures raised by the polar search.
    #[must_use]
    pub const fn is_search_failure(&self) -> bool {
        matches!(
            self,
            Self::SearchDirectionUndetermined { .. } | Self::SearchExhausted { .. }
        )
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a zenith angle to be within the range [0, 180] degrees.
///
/// # Errors
/// Returns `InvalidZenithAngle` if the angle is not finite or outside the range.
pub fn check_zenith_angle(zenith: f64) -> Result<f64> {
    if !(0.0..=180.0).contains(&zenith) {
        return Err(Error::invalid_zenith_angle(zenith));
    }
    Ok(zenith)
}

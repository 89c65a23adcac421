//! Calendar and Julian day arithmetic.
//!
//! The solver works on the integral Julian Day Number (JDN) of the requested
//! civil date, i.e. the Julian date at 12:00 UT of that date, and expresses
//! event times as minutes after 00:00 UTC of the same date.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
#[cfg(feature = "chrono")]
use crate::types::MinutesUtc;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, Offset, TimeZone};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: i32 = 86_400;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days between 0001-01-01 (proleptic Gregorian) and JDN 0.
#[cfg(feature = "chrono")]
const JDN_OF_CE_DAY_ZERO: f64 = 1_721_425.0;

/// Converts a Julian date to Julian centuries since J2000.0.
///
/// JC = (JD - 2451545.0) / 36525
///
/// # Example
/// ```
/// # use sunrise_sunset::time::julian_century;
/// assert_eq!(julian_century(2_451_545.0), 0.0);
/// assert_eq!(julian_century(2_488_070.0), 1.0);
/// ```
#[must_use]
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JDN) / DAYS_PER_CENTURY
}

/// Converts Julian centuries since J2000.0 back to a Julian date.
#[must_use]
pub fn julian_day(julian_century: f64) -> f64 {
    julian_century * DAYS_PER_CENTURY + J2000_JDN
}

/// Calculates the Julian Day Number of a calendar date.
///
/// Dates from 1582-10-15 on are Gregorian, earlier dates Julian. The result
/// is integral: the Julian date at noon UT.
///
/// # Errors
/// Returns `InvalidDateTime` if month or day are out of range, or for the
/// dates dropped by the Gregorian reform (1582-10-05 through 1582-10-14).
///
/// # Example
/// ```
/// # use sunrise_sunset::time::julian_day_number;
/// assert_eq!(julian_day_number(2000, 1, 1).unwrap(), 2_451_545.0);
/// assert_eq!(julian_day_number(2016, 6, 21).unwrap(), 2_457_561.0);
/// ```
pub fn julian_day_number(year: i32, month: u32, day: u32) -> Result<f64> {
    check_date(year, month, day)?;
    Ok(calculate_julian_day_number(year, month, day))
}

/// Calculates the day of the year (1 for January 1st).
///
/// # Errors
/// Returns `InvalidDateTime` for invalid dates, as [`julian_day_number`] does.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    check_date(year, month, day)?;
    let mut total = day;
    for earlier in 1..month {
        total += days_in_month(year, earlier, 1)?;
    }
    // October 1582 only has 21 days
    if year == 1582 && (month > 10 || (month == 10 && day >= 15)) {
        total -= 10;
    }
    Ok(total)
}

fn check_date(year: i32, month: u32, day: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_datetime("day must be between 1 and 31"));
    }
    if day > days_in_month(year, month, day)? {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }
    Ok(())
}

/// Meeus, "Astronomical Algorithms", chapter 7, evaluated at 12:00 UT.
fn calculate_julian_day_number(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month < 3 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let mut jd = floor(365.25 * (f64::from(y) + 4716.0))
        + floor(30.6001 * f64::from(m + 1))
        + f64::from(day)
        + 0.5
        - 1524.5;

    // JDN 2299161 is 1582-10-15
    if jd >= 2_299_161.0 {
        let a = floor(f64::from(y) / 100.0);
        jd += 2.0 - a + floor(a / 4.0);
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year, is_gregorian_date(year, month, day)) => 29,
        2 => 28,
        _ => return Err(Error::invalid_datetime("month must be between 1 and 12")),
    };
    Ok(days)
}

/// A civil date at a fixed UTC offset, as seen by the solver.
///
/// # Example
/// ```
/// # use sunrise_sunset::time::ObservationDay;
/// let day = ObservationDay::from_calendar(2016, 6, 21)
///     .unwrap()
///     .with_utc_offset(12 * 3600)
///     .unwrap();
/// assert_eq!(day.julian_day(), 2_457_561.0);
/// assert_eq!(day.day_of_year(), 173);
/// assert_eq!(day.utc_offset_fraction(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationDay {
    julian_day: f64,
    day_of_year: u32,
    utc_offset_seconds: i32,
}

impl ObservationDay {
    /// Creates an observation day at UTC from a calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for invalid dates.
    pub fn from_calendar(year: i32, month: u32, day: u32) -> Result<Self> {
        Ok(Self {
            julian_day: julian_day_number(year, month, day)?,
            day_of_year: day_of_year(year, month, day)?,
            utc_offset_seconds: 0,
        })
    }

    /// Creates an observation day from the local date of a chrono `DateTime`.
    ///
    /// The offset in effect at `datetime` is frozen for the whole day, so
    /// every rendered event shares it even across a DST change.
    ///
    /// chrono dates are proleptic Gregorian, also before 1582, so the Julian
    /// Day Number is counted from chrono's day number rather than read as a
    /// calendar date.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if the offset is a full day or more.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self> {
        let local = datetime.date_naive();
        let offset = datetime.offset().fix().local_minus_utc();
        Self {
            julian_day: f64::from(local.num_days_from_ce()) + JDN_OF_CE_DAY_ZERO,
            day_of_year: local.ordinal(),
            utc_offset_seconds: 0,
        }
        .with_utc_offset(offset)
    }

    /// Sets the fixed UTC offset used when rendering timestamps.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` unless the offset is strictly within one day.
    pub const fn with_utc_offset(self, seconds: i32) -> Result<Self> {
        if seconds <= -SECONDS_PER_DAY || seconds >= SECONDS_PER_DAY {
            return Err(Error::InvalidUtcOffset { seconds });
        }
        Ok(Self {
            utc_offset_seconds: seconds,
            ..self
        })
    }

    /// Gets the Julian Day Number of the date.
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Gets the Julian century of the date at noon UT.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        julian_century(self.julian_day)
    }

    /// Gets the day of the year (1-366).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Gets the UTC offset in seconds.
    #[must_use]
    pub const fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_seconds
    }

    /// Gets the UTC offset as a fraction of a day.
    #[must_use]
    pub fn utc_offset_fraction(&self) -> f64 {
        f64::from(self.utc_offset_seconds) / f64::from(SECONDS_PER_DAY)
    }

    /// Converts minutes after 00:00 UTC of this date into a local timestamp.
    ///
    /// The timestamp carries this day's fixed offset and is rounded down to
    /// the millisecond. Its date is the proleptic Gregorian date of the
    /// Julian Day Number.
    ///
    /// # Errors
    /// Returns `TimestampOutOfRange` if the instant cannot be represented.
    #[cfg(feature = "chrono")]
    pub fn local_timestamp(
        &self,
        minutes: MinutesUtc,
    ) -> Result<chrono::DateTime<chrono::FixedOffset>> {
        let minutes = minutes.minutes();
        if !minutes.is_finite() {
            return Err(Error::TimestampOutOfRange);
        }

        let days_from_ce = (self.julian_day - JDN_OF_CE_DAY_ZERO) as i32;
        let midnight_utc = chrono::NaiveDate::from_num_days_from_ce_opt(days_from_ce)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or(Error::TimestampOutOfRange)?
            .and_utc();

        let millis = floor(minutes * 60_000.0) as i64;
        let instant = chrono::TimeDelta::try_milliseconds(millis)
            .and_then(|delta| midnight_utc.checked_add_signed(delta))
            .ok_or(Error::TimestampOutOfRange)?;

        let offset = chrono::FixedOffset::east_opt(self.utc_offset_seconds)
            .ok_or(Error::InvalidUtcOffset {
                seconds: self.utc_offset_seconds,
            })?;
        Ok(instant.with_timezone(&offset))
    }
}

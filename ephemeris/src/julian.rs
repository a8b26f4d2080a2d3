//! Julian Date conversions
//!
//! Calendar instants are converted to UTC first; no TT/UTC offset is applied.

use thiserror::Error;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

pub use crate::constants::{J2000, SECONDS_PER_DAY};

const NANOS_PER_DAY: f64 = 8.64e13;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("Invalid argument: Julian Date must be finite, got {0}")]
    NonFinite(f64),

    #[error("Julian Date {0} is outside the representable calendar range")]
    OutOfRange(f64),
}

/// Julian Date of a calendar instant.
///
/// Uses the Julian Day Number of the UTC date (which begins at noon) plus
/// the fraction of the day elapsed since noon.
pub fn julian_date(datetime: OffsetDateTime) -> f64 {
    let utc = datetime.to_offset(UtcOffset::UTC);
    let day_number = utc.date().to_julian_day() as f64;

    day_number
        + (utc.hour() as f64 - 12.0) / 24.0
        + utc.minute() as f64 / 1440.0
        + utc.second() as f64 / SECONDS_PER_DAY
        + utc.nanosecond() as f64 / NANOS_PER_DAY
}

/// Julian Date of the current system time
pub fn julian_date_now() -> f64 {
    julian_date(OffsetDateTime::now_utc())
}

/// UTC instant for a Julian Date, rounded to the nearest nanosecond.
///
/// # Errors
/// * `TimeError::NonFinite` - NaN or infinite input
/// * `TimeError::OutOfRange` - the date falls outside what `time::Date` supports
pub fn datetime_from_julian(julian_date: f64) -> Result<OffsetDateTime, TimeError> {
    if !julian_date.is_finite() {
        return Err(TimeError::NonFinite(julian_date));
    }

    // Civil days start at midnight, half a day before the Julian day
    let shifted = julian_date + 0.5;
    let day_number = shifted.floor();
    if day_number < i32::MIN as f64 || day_number > i32::MAX as f64 {
        return Err(TimeError::OutOfRange(julian_date));
    }

    let date = Date::from_julian_day(day_number as i32)
        .map_err(|_| TimeError::OutOfRange(julian_date))?;
    let nanos = ((shifted - day_number) * NANOS_PER_DAY).round() as i64;

    date.midnight()
        .assume_utc()
        .checked_add(Duration::nanoseconds(nanos))
        .ok_or(TimeError::OutOfRange(julian_date))
}

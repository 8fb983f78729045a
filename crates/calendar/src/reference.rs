//! Reference-date parsing and year-range validation.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Default input format: day/month/year, e.g. `01/01/1980`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Earliest year accepted by default.
pub const DEFAULT_MIN_YEAR: i32 = 1901;

/// Parses a date string with a `chrono` format string.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CalendarError::Parse`] if the input does not match `format` or
/// names a day that does not exist (e.g. `31/02/1980`).
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), format).map_err(|_| CalendarError::Parse {
        input: input.to_string(),
        format: format.to_string(),
    })
}

/// Inclusive range of accepted reference-date years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Creates a range accepting years `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearRange`] if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidYearRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates a range from `min` up to and including the year of `today`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearRange`] if `min` is after
    /// `today`'s year.
    pub fn up_to(min: i32, today: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(min, today.year())
    }

    /// Smallest accepted year.
    pub fn min(self) -> i32 {
        self.min
    }

    /// Largest accepted year.
    pub fn max(self) -> i32 {
        self.max
    }

    /// Returns `true` if `year` lies within the range.
    pub fn contains(self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Passes `date` through if its year is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] otherwise.
    pub fn check(self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let year = date.year();
        if !self.contains(year) {
            return Err(CalendarError::YearOutOfRange {
                year,
                min: self.min,
                max: self.max,
            });
        }
        Ok(date)
    }
}

/// Parses a reference date and validates its year.
///
/// # Errors
///
/// Returns [`CalendarError::Parse`] or [`CalendarError::YearOutOfRange`].
pub fn parse_reference(
    input: &str,
    format: &str,
    range: YearRange,
) -> Result<NaiveDate, CalendarError> {
    let date = parse_date(input, format)?;
    let date = range.check(date)?;
    tracing::debug!(%date, "parsed reference date");
    Ok(date)
}

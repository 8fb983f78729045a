//! Error types for the carpe-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the carpe-calendar crate.
///
/// Covers reference-date parsing, year-range validation, and day offsets
/// that leave the range `chrono` can represent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an input string does not match the expected date format.
    #[error("cannot parse date {input:?} with format {format:?}")]
    Parse {
        /// The rejected input string.
        input: String,
        /// The `chrono` format string that was applied.
        format: String,
    },

    /// Returned when a date's year falls outside the accepted range.
    #[error("year {year} is outside the accepted range {min}..={max}")]
    YearOutOfRange {
        /// The year of the rejected date.
        year: i32,
        /// Smallest accepted year.
        min: i32,
        /// Largest accepted year.
        max: i32,
    },

    /// Returned when a year range has `min > max`.
    #[error("invalid year range: min {min} is after max {max}")]
    InvalidYearRange {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },

    /// Returned when adding a day offset leaves the representable calendar.
    #[error("adding {days} days to {date} leaves the representable calendar")]
    DateOverflow {
        /// The date the offset was applied to.
        date: NaiveDate,
        /// The offending offset in days.
        days: i64,
    },
}

//! # carpe-calendar
//!
//! Calendar-day arithmetic on the proleptic Gregorian calendar.
//!
//! Every date is a [`chrono::NaiveDate`] interpreted as UTC midnight, so day
//! differences are exact and there is no time-of-day or timezone component.
//!
//! ## Architecture
//!
//! ```text
//! "01/01/1980" ──parse_reference()──> NaiveDate (year checked by YearRange)
//!                                         │
//! today_utc() ──────────────────────> elapsed_days(reference, today) -> i64
//!                                         │
//!                     add_days() / add_fractional_days() -> NaiveDate
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use carpe_calendar::{
//!     DEFAULT_DATE_FORMAT, YearRange, add_days, elapsed_days, parse_reference,
//! };
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
//! let range = YearRange::up_to(1901, today).unwrap();
//! let birthday = parse_reference("01/01/1980", DEFAULT_DATE_FORMAT, range).unwrap();
//!
//! assert_eq!(elapsed_days(birthday, today), 15871);
//! assert_eq!(add_days(today, 5).unwrap(), NaiveDate::from_ymd_opt(2023, 6, 20).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Elapsed days, checked offsets, UTC today |
//! | `reference` | Reference-date parsing and year ranges |
//! | `error` | Error types |

mod date;
mod error;
mod reference;

pub use date::{add_days, add_fractional_days, elapsed_days, round_days, today_utc};
pub use error::CalendarError;
pub use reference::{
    DEFAULT_DATE_FORMAT, DEFAULT_MIN_YEAR, YearRange, parse_date, parse_reference,
};

//! Day arithmetic on Gregorian calendar dates.

use chrono::{Days, NaiveDate, Utc};

use crate::error::CalendarError;

/// Returns the current calendar day in UTC.
///
/// Callers that need several results to agree on "today" should call this
/// once and pass the value along.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whole days from `reference` to `today`.
///
/// Negative when `reference` lies after `today`. Both dates are treated as
/// UTC midnight, so the result is exact and never truncated.
pub fn elapsed_days(reference: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(reference).num_days()
}

/// Adds a signed number of days to `date`.
///
/// # Errors
///
/// Returns [`CalendarError::DateOverflow`] if the result is outside the
/// range `chrono` can represent.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or(CalendarError::DateOverflow { date, days })
}

/// Rounds a fractional day count to whole days, half away from zero.
///
/// Returns `None` for non-finite input or values outside `i64`.
pub fn round_days(days: f64) -> Option<i64> {
    let rounded = days.round();
    if !rounded.is_finite() || rounded.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}

/// Adds a fractional number of days to `date`, rounded to the nearest day.
///
/// # Errors
///
/// Returns [`CalendarError::DateOverflow`] if `days` is not finite or the
/// result is outside the representable calendar.
pub fn add_fractional_days(date: NaiveDate, days: f64) -> Result<NaiveDate, CalendarError> {
    let whole = round_days(days).ok_or(CalendarError::DateOverflow {
        date,
        days: if days.is_sign_negative() { i64::MIN } else { i64::MAX },
    })?;
    add_days(date, whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn elapsed_same_day_is_zero() {
        let d = ymd(2023, 6, 15);
        assert_eq!(elapsed_days(d, d), 0);
    }

    #[test]
    fn elapsed_across_leap_years() {
        // 43 years with 11 leap days, plus Jan 1 -> Jun 15.
        assert_eq!(elapsed_days(ymd(1980, 1, 1), ymd(2023, 6, 15)), 15871);
    }

    #[test]
    fn elapsed_negative_for_future_reference() {
        assert_eq!(elapsed_days(ymd(2023, 6, 20), ymd(2023, 6, 15)), -5);
    }

    #[test]
    fn add_days_positive() {
        assert_eq!(add_days(ymd(2023, 6, 15), 5).unwrap(), ymd(2023, 6, 20));
    }

    #[test]
    fn add_days_negative() {
        assert_eq!(add_days(ymd(2024, 3, 1), -1).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn add_days_zero() {
        assert_eq!(add_days(ymd(2024, 3, 1), 0).unwrap(), ymd(2024, 3, 1));
    }

    #[test]
    fn add_days_overflow() {
        let err = add_days(NaiveDate::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            CalendarError::DateOverflow {
                date: NaiveDate::MAX,
                days: 1,
            }
        );
    }

    #[test]
    fn add_days_underflow() {
        assert!(add_days(NaiveDate::MIN, -1).is_err());
    }

    #[test]
    fn round_days_half_away_from_zero() {
        assert_eq!(round_days(0.5), Some(1));
        assert_eq!(round_days(2.49), Some(2));
        assert_eq!(round_days(-0.5), Some(-1));
        assert_eq!(round_days(15922.57), Some(15923));
    }

    #[test]
    fn round_days_rejects_non_finite() {
        assert_eq!(round_days(f64::NAN), None);
        assert_eq!(round_days(f64::INFINITY), None);
        assert_eq!(round_days(1e300), None);
    }

    #[test]
    fn add_fractional_rounds() {
        let base = ymd(1980, 1, 1);
        // 181 Mercury years = 15922.57 days -> 15923.
        let got = add_fractional_days(base, 181.0 * 87.97).unwrap();
        assert_eq!(got, add_days(base, 15923).unwrap());
    }

    #[test]
    fn add_fractional_non_finite_is_overflow() {
        assert!(matches!(
            add_fractional_days(ymd(2000, 1, 1), f64::INFINITY),
            Err(CalendarError::DateOverflow { days: i64::MAX, .. })
        ));
    }

    #[test]
    fn today_is_stable_within_a_call() {
        let a = today_utc();
        let b = today_utc();
        assert!(b >= a);
        assert!(elapsed_days(a, b) <= 1);
    }
}

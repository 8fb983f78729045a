//! Closed-form next-orbit computation.

use carpe_calendar::{CalendarError, add_fractional_days, elapsed_days};
use chrono::NaiveDate;
use tracing::trace;

use crate::body::Body;

/// The next completed orbit of a body, counted from a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orbit {
    ordinal: u64,
    date: NaiveDate,
    days_to_go: i64,
}

impl Orbit {
    /// Which orbit this is (1 = first orbit after the reference date).
    ///
    /// 0 when the reference date itself is still ahead.
    pub fn ordinal(&self) -> u64 {
        self.ordinal
    }

    /// Calendar date the orbit completes.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days from today until [`date`](Self::date).
    pub fn days_to_go(&self) -> i64 {
        self.days_to_go
    }
}

/// Whole orbits of length `period_days` completed after `elapsed` days.
///
/// Clamped below at -1 so that a reference date in the future yields the
/// reference date itself as the next milestone instead of an earlier one.
pub fn orbits_completed(elapsed: i64, period_days: f64) -> i64 {
    let completed = (elapsed as f64 / period_days).floor() as i64;
    completed.max(-1)
}

impl Body {
    /// The first orbit of this body completing after `today`.
    ///
    /// The orbit date is `reference + (k + 1) * period` with the fractional
    /// offset rounded to the nearest whole day, where `k` is
    /// [`orbits_completed`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`] if the orbit date is not
    /// representable.
    pub fn next_orbit(
        self,
        reference: NaiveDate,
        today: NaiveDate,
    ) -> Result<Orbit, CalendarError> {
        let elapsed = elapsed_days(reference, today);
        let completed = orbits_completed(elapsed, self.period_days());
        let ordinal = (completed + 1) as u64;
        let date = add_fractional_days(reference, ordinal as f64 * self.period_days())?;
        let days_to_go = elapsed_days(today, date);
        trace!(body = self.name(), elapsed, ordinal, %date, "next orbit");
        Ok(Orbit {
            ordinal,
            date,
            days_to_go,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::find_body;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn completed_floor() {
        assert_eq!(orbits_completed(15871, 87.97), 180);
        assert_eq!(orbits_completed(0, 87.97), 0);
        assert_eq!(orbits_completed(87, 87.97), 0);
        assert_eq!(orbits_completed(88, 87.97), 1);
    }

    #[test]
    fn completed_clamped_for_future_reference() {
        assert_eq!(orbits_completed(-1, 87.97), -1);
        assert_eq!(orbits_completed(-1000, 87.97), -1);
    }

    #[test]
    fn mercury_example() {
        let mercury = find_body("Mercury").unwrap();
        let orbit = mercury.next_orbit(ymd(1980, 1, 1), ymd(2023, 6, 15)).unwrap();
        // round(181 * 87.97) = round(15922.57) = 15923 = 15871 + 52.
        assert_eq!(orbit.ordinal(), 181);
        assert_eq!(orbit.days_to_go(), 52);
        assert_eq!(orbit.date(), ymd(2023, 8, 6));
    }

    #[test]
    fn born_today() {
        let venus = find_body("Venus").unwrap();
        let today = ymd(2023, 6, 15);
        let orbit = venus.next_orbit(today, today).unwrap();
        assert_eq!(orbit.ordinal(), 1);
        // round(224.7) = 225.
        assert_eq!(orbit.days_to_go(), 225);
    }

    #[test]
    fn future_reference_points_at_reference() {
        let pluto = find_body("Pluto").unwrap();
        let today = ymd(2023, 6, 15);
        let reference = ymd(2023, 7, 1);
        let orbit = pluto.next_orbit(reference, today).unwrap();
        assert_eq!(orbit.ordinal(), 0);
        assert_eq!(orbit.date(), reference);
        assert_eq!(orbit.days_to_go(), 16);
    }

    #[test]
    fn overflow_is_reported() {
        let pluto = find_body("Pluto").unwrap();
        let err = pluto.next_orbit(NaiveDate::MAX, NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, CalendarError::DateOverflow { .. }));
    }
}

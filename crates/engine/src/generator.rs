//! Uniform view over sequence and orbital generators.

use carpe_calendar::{CalendarError, add_days};
use carpe_orbit::{BODIES, Body};
use carpe_sequence::Sequence;
use chrono::NaiveDate;
use tracing::debug;

use crate::milestone::{Category, Milestone};

/// One milestone source: a searched sequence or a planet's orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Generator {
    Sequence(Sequence),
    Orbit(Body),
}

impl Generator {
    /// All fifteen generators in output order: the seven sequences, then the
    /// bodies by ascending orbital period.
    pub fn all() -> impl Iterator<Item = Generator> {
        Sequence::ALL
            .into_iter()
            .map(Generator::Sequence)
            .chain(BODIES.into_iter().map(Generator::Orbit))
    }

    /// Label carried by the milestone.
    pub fn name(self) -> &'static str {
        match self {
            Generator::Sequence(seq) => seq.name(),
            Generator::Orbit(body) => body.name(),
        }
    }

    pub fn category(self) -> Category {
        match self {
            Generator::Sequence(seq) if seq.is_aesthetic() => Category::Aesthetic,
            Generator::Sequence(_) => Category::Mathematical,
            Generator::Orbit(_) => Category::Astronomical,
        }
    }

    /// Computes this generator's milestone.
    ///
    /// `elapsed` must equal `today - reference` in days. Returns `Ok(None)`
    /// when the sequence has no element beyond `elapsed`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`] when the milestone date is
    /// outside the representable calendar.
    pub fn evaluate(
        self,
        reference: NaiveDate,
        today: NaiveDate,
        elapsed: i64,
    ) -> Result<Option<Milestone>, CalendarError> {
        let (ordinal, days_to_go, date) = match self {
            Generator::Sequence(seq) => {
                let Some(hit) = seq.next_after(elapsed) else {
                    return Ok(None);
                };
                let days_to_go = hit.days_after(elapsed);
                (hit.ordinal(), days_to_go, add_days(today, days_to_go)?)
            }
            Generator::Orbit(body) => {
                let orbit = body.next_orbit(reference, today)?;
                (orbit.ordinal(), orbit.days_to_go(), orbit.date())
            }
        };
        debug!(generator = self.name(), ordinal, days_to_go, %date, "milestone");
        Ok(Some(Milestone {
            category: self.category(),
            kind: self.name(),
            ordinal,
            days_to_go,
            date,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fifteen_generators_in_order() {
        let names: Vec<&str> = Generator::all().map(Generator::name).collect();
        assert_eq!(
            names,
            vec![
                "Pi", "Euler", "Perfect", "Prime", "Square", "Repdigit", "Round", "Mercury",
                "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
            ]
        );
    }

    #[test]
    fn categories() {
        assert_eq!(
            Generator::Sequence(Sequence::Prime).category(),
            Category::Mathematical
        );
        assert_eq!(
            Generator::Sequence(Sequence::Round).category(),
            Category::Aesthetic
        );
        assert_eq!(Generator::Orbit(BODIES[0]).category(), Category::Astronomical);
    }

    #[test]
    fn square_example() {
        let m = Generator::Sequence(Sequence::Square)
            .evaluate(ymd(1980, 1, 1), ymd(2023, 6, 15), 15871)
            .unwrap()
            .unwrap();
        assert_eq!(m.ordinal, 126);
        assert_eq!(m.days_to_go, 5);
        assert_eq!(m.date, ymd(2023, 6, 20));
    }

    #[test]
    fn perfect_past_table_is_exhausted() {
        let today = ymd(2023, 6, 15);
        let reference = add_days(today, -40_000_000).unwrap();
        let outcome = Generator::Sequence(Sequence::Perfect).evaluate(reference, today, 40_000_000);
        assert_eq!(outcome, Ok(None));
    }

    #[test]
    fn unrepresentable_date_is_an_overflow() {
        let err = Generator::Sequence(Sequence::Square)
            .evaluate(NaiveDate::MAX, NaiveDate::MAX, 0)
            .unwrap_err();
        assert_eq!(
            err,
            CalendarError::DateOverflow {
                date: NaiveDate::MAX,
                days: 1,
            }
        );
    }
}

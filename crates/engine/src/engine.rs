//! The milestone engine.

use carpe_calendar::{CalendarError, elapsed_days, parse_date, today_utc};
use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::generator::Generator;
use crate::milestone::{Milestone, Milestones, SkipReason, Skipped};

/// Computes milestones relative to a fixed "today".
///
/// "Today" is captured once at construction, so every generator of every
/// computation on the same engine agrees on it.
#[derive(Debug, Clone)]
pub struct Engine {
    today: NaiveDate,
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine pinned to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine pinned to the current UTC calendar day.
    pub fn today_utc() -> Self {
        Self::new(today_utc())
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes every milestone for `reference`.
    ///
    /// Generators that cannot produce a milestone are listed in
    /// [`Milestones::skipped`] and do not affect the others.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidReferenceDate`] if a year range is
    /// configured and `reference` falls outside it, or if every generator's
    /// milestone date lies outside the representable calendar.
    pub fn compute(&self, reference: NaiveDate) -> Result<Milestones, EngineError> {
        let invalid = |source: CalendarError| EngineError::InvalidReferenceDate {
            reference: reference.to_string(),
            source,
        };
        if let Some(range) = self.config.year_range() {
            range.check(reference).map_err(invalid)?;
        }

        let today = self.today;
        let elapsed = elapsed_days(reference, today);
        let generators: Vec<Generator> = Generator::all().collect();
        let evaluate = |g: &Generator| g.evaluate(reference, today, elapsed);

        let outcomes: Vec<Result<Option<Milestone>, CalendarError>> = if self.config.parallel() {
            generators.par_iter().map(evaluate).collect()
        } else {
            generators.iter().map(evaluate).collect()
        };

        let mut milestones = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        let mut first_overflow = None;
        for (generator, outcome) in generators.iter().zip(outcomes) {
            let reason = match outcome {
                Ok(Some(m)) => {
                    milestones.push(m);
                    continue;
                }
                Ok(None) => SkipReason::Exhausted,
                Err(err) => {
                    first_overflow.get_or_insert(err);
                    SkipReason::DateOutOfRange
                }
            };
            warn!(generator = generator.name(), %reason, "skipping milestone");
            skipped.push(Skipped {
                kind: generator.name(),
                reason,
            });
        }

        let unanchored = skipped
            .iter()
            .all(|s| s.reason == SkipReason::DateOutOfRange);
        if let (true, Some(source)) = (milestones.is_empty() && unanchored, first_overflow) {
            return Err(invalid(source));
        }

        info!(
            %reference,
            %today,
            elapsed,
            n_milestones = milestones.len(),
            n_skipped = skipped.len(),
            "computed milestones"
        );
        Ok(Milestones::new(reference, today, elapsed, milestones, skipped))
    }

    /// Parses `input` with the `chrono` format `format`, then computes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidReferenceDate`] if parsing fails, and
    /// otherwise under the same conditions as [`Engine::compute`].
    pub fn compute_str(&self, input: &str, format: &str) -> Result<Milestones, EngineError> {
        let reference =
            parse_date(input, format).map_err(|source| EngineError::InvalidReferenceDate {
                reference: input.to_string(),
                source,
            })?;
        self.compute(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpe_calendar::YearRange;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn elapsed_is_recorded() {
        let engine = Engine::new(ymd(2023, 6, 15));
        let result = engine.compute(ymd(1980, 1, 1)).unwrap();
        assert_eq!(result.elapsed_days(), 15871);
        assert_eq!(result.today(), ymd(2023, 6, 15));
        assert_eq!(result.reference(), ymd(1980, 1, 1));
        assert_eq!(result.len(), 15);
        assert!(result.skipped().is_empty());
    }

    #[test]
    fn year_range_rejects_reference() {
        let range = YearRange::new(1901, 2023).unwrap();
        let engine = Engine::new(ymd(2023, 6, 15))
            .with_config(EngineConfig::new().with_year_range(range));
        let err = engine.compute(ymd(1900, 5, 1)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidReferenceDate {
                reference: "1900-05-01".to_string(),
                source: CalendarError::YearOutOfRange {
                    year: 1900,
                    min: 1901,
                    max: 2023,
                },
            }
        );
    }

    #[test]
    fn compute_str_parses() {
        let engine = Engine::new(ymd(2023, 6, 15));
        let result = engine.compute_str("01/01/1980", "%d/%m/%Y").unwrap();
        assert_eq!(result.elapsed_days(), 15871);
    }

    #[test]
    fn compute_str_rejects_garbage() {
        let engine = Engine::new(ymd(2023, 6, 15));
        let err = engine.compute_str("1980-01-01", "%d/%m/%Y").unwrap_err();
        assert!(matches!(
            &err,
            EngineError::InvalidReferenceDate {
                reference,
                source: CalendarError::Parse { .. },
            } if reference == "1980-01-01"
        ));
        assert_eq!(err.to_string(), "invalid reference date \"1980-01-01\"");
    }

    #[test]
    fn calendar_edge_rejects_reference() {
        let engine = Engine::new(NaiveDate::MAX);
        let err = engine.compute(NaiveDate::MAX).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidReferenceDate {
                reference: NaiveDate::MAX.to_string(),
                source: CalendarError::DateOverflow {
                    date: NaiveDate::MAX,
                    days: 1,
                },
            }
        );
    }

    #[test]
    fn near_calendar_edge_rejects_reference() {
        let today = NaiveDate::MAX;
        let reference = today - chrono::Days::new(100);
        let err = Engine::new(today).compute(reference).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidReferenceDate {
                source: CalendarError::DateOverflow { .. },
                ..
            }
        ));
    }
}

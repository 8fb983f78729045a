//! Milestone records and computation results.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Broad family a milestone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Number-theoretic or constant-derived sequences.
    Mathematical,
    /// Numbers that look notable in decimal.
    Aesthetic,
    /// Orbits of the planets.
    Astronomical,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Mathematical => "Mathematical",
            Category::Aesthetic => "Aesthetic",
            Category::Astronomical => "Astronomical",
        };
        f.write_str(s)
    }
}

/// One upcoming milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub category: Category,
    /// Generator label, e.g. `"Prime"` or `"Mercury"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// How many-th occurrence this is; see each generator for the base.
    pub ordinal: u64,
    /// Days from today; `date == today + days_to_go`.
    pub days_to_go: i64,
    pub date: NaiveDate,
}

/// Why a generator produced no milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkipReason {
    /// The sequence has no element beyond the elapsed days.
    Exhausted,
    /// The milestone date is outside the representable calendar.
    DateOutOfRange,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Exhausted => f.write_str("no further element in sequence"),
            SkipReason::DateOutOfRange => f.write_str("date outside representable calendar"),
        }
    }
}

/// A generator left out of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skipped {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub reason: SkipReason,
}

/// Output of one [`Engine::compute`](crate::Engine::compute) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestones {
    reference: NaiveDate,
    today: NaiveDate,
    elapsed_days: i64,
    milestones: Vec<Milestone>,
    skipped: Vec<Skipped>,
}

impl Milestones {
    pub(crate) fn new(
        reference: NaiveDate,
        today: NaiveDate,
        elapsed_days: i64,
        milestones: Vec<Milestone>,
        skipped: Vec<Skipped>,
    ) -> Self {
        Self {
            reference,
            today,
            elapsed_days,
            milestones,
            skipped,
        }
    }

    /// The reference date the milestones are counted from.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// The "today" every milestone is relative to.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// `today - reference` in whole days.
    pub fn elapsed_days(&self) -> i64 {
        self.elapsed_days
    }

    /// Milestones in generator order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Generators that produced no milestone, in generator order.
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Number of milestones.
    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    /// `true` if every generator was skipped.
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// Looks up a milestone by its label.
    pub fn get(&self, kind: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.kind == kind)
    }

    /// The nearest milestone that is today or later; ties keep generator order.
    pub fn soonest(&self) -> Option<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| m.days_to_go >= 0)
            .min_by_key(|m| m.days_to_go)
    }

    /// Milestones nearest first: upcoming ones by ascending `days_to_go`,
    /// then past ones, most recent first. Ties keep generator order.
    pub fn by_days_to_go(&self) -> Vec<&Milestone> {
        let mut sorted: Vec<&Milestone> = self.milestones.iter().collect();
        sorted.sort_by_key(|m| (m.days_to_go < 0, m.days_to_go.unsigned_abs()));
        sorted
    }
}

//! Text and JSON rendering of milestone results.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use carpe_engine::{Milestone, Milestones, Skipped};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Order of milestones in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Generator order: sequences, then planets by orbital period.
    Engine,
    /// Nearest milestone first.
    Soonest,
}

/// `n` with its English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
pub fn nth(n: u64) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Long date, e.g. `20 June 2023`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// The congratulation line and the countdown line for one milestone.
pub fn generate_text(milestone: &Milestone) -> (String, String) {
    let congrats = format!(
        "Congratulations! Your {} {} birthday is on {}!",
        nth(milestone.ordinal),
        milestone.kind,
        format_date(milestone.date)
    );
    let countdown = match milestone.days_to_go {
        0 => "That's today!".to_string(),
        1 => "Only 1 day to go!".to_string(),
        d if d < 0 => format!("That was {} days ago.", -d),
        d => format!("Only {d} days to go!"),
    };
    (congrats, countdown)
}

fn ordered(result: &Milestones, sort: SortOrder) -> Vec<&Milestone> {
    match sort {
        SortOrder::Engine => result.milestones().iter().collect(),
        SortOrder::Soonest => result.by_days_to_go(),
    }
}

/// Plain-text report: a header naming the next milestone, then one block
/// per milestone.
pub fn render_text(result: &Milestones, sort: SortOrder) -> String {
    let mut out = format!(
        "{} days since {} (today is {}).\n",
        result.elapsed_days(),
        format_date(result.reference()),
        format_date(result.today())
    );
    if let Some(next) = result.soonest() {
        out.push_str(&format!(
            "Next up: {} {} birthday on {}.\n",
            nth(next.ordinal),
            next.kind,
            format_date(next.date)
        ));
    }
    for milestone in ordered(result, sort) {
        let (congrats, countdown) = generate_text(milestone);
        out.push_str(&format!(
            "\n[{}] {}\n{congrats}\n{countdown}\n",
            milestone.category, milestone.kind
        ));
    }
    for skipped in result.skipped() {
        out.push_str(&format!("\n[skipped] {}: {}\n", skipped.kind, skipped.reason));
    }
    out
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    reference: NaiveDate,
    today: NaiveDate,
    elapsed_days: i64,
    milestones: Vec<&'a Milestone>,
    skipped: &'a [Skipped],
}

/// Pretty-printed JSON document with the milestones in `sort` order.
pub fn render_json(result: &Milestones, sort: SortOrder) -> Result<String> {
    let report = JsonReport {
        reference: result.reference(),
        today: result.today(),
        elapsed_days: result.elapsed_days(),
        milestones: ordered(result, sort),
        skipped: result.skipped(),
    };
    serde_json::to_string_pretty(&report).context("failed to serialize milestones")
}

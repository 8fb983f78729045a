//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};

use carpe_calendar::YearRange;
use carpe_engine::EngineConfig;

use crate::config::*;
use crate::render::{OutputFormat, SortOrder};

/// Parses an output format name into the corresponding enum variant.
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a sort order name into the corresponding enum variant.
pub fn parse_sort_order(s: &str) -> Result<SortOrder> {
    match s.to_lowercase().as_str() {
        "engine" => Ok(SortOrder::Engine),
        "soonest" => Ok(SortOrder::Soonest),
        other => bail!("unknown sort order: {other:?}"),
    }
}

/// Builds the accepted year range; `max_year` defaults to `today`'s year.
pub fn build_year_range(input: &InputToml, today: NaiveDate) -> Result<YearRange> {
    let max = input.max_year.unwrap_or(today.year());
    YearRange::new(input.min_year, max).context("invalid [input] year range")
}

/// Builds an `EngineConfig`; `parallel` from the CLI wins over the file.
pub fn build_engine_config(
    config: &CarpeConfig,
    today: NaiveDate,
    parallel: bool,
) -> Result<EngineConfig> {
    Ok(EngineConfig::new()
        .with_parallel(parallel || config.engine.parallel)
        .with_year_range(build_year_range(&config.input, today)?))
}

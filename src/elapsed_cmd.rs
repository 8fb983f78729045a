//! Elapsed command: days between the reference date and today.

use anyhow::{Context, Result};
use tracing::info_span;

use carpe_calendar::{elapsed_days, parse_reference};
use carpe_engine::Engine;

use crate::cli::ElapsedArgs;
use crate::config::CarpeConfig;
use crate::convert;

pub fn run(args: ElapsedArgs) -> Result<()> {
    let _cmd = info_span!("elapsed").entered();
    let config = CarpeConfig::load(args.reference.config.as_deref())?;
    let today = args.reference.today.map_or_else(Engine::today_utc, Engine::new).today();
    let range = convert::build_year_range(&config.input, today)?;

    let birthday = &args.reference.birthday;
    let reference = parse_reference(birthday, &config.input.date_format, range)
        .with_context(|| format!("invalid reference date {birthday:?}"))?;

    println!("{}", elapsed_days(reference, today));
    Ok(())
}

//! Milestones command: compute and print every upcoming milestone.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use carpe_engine::Engine;

use crate::cli::MilestonesArgs;
use crate::config::CarpeConfig;
use crate::convert;
use crate::render::{self, OutputFormat};

/// Run the milestones pipeline.
pub fn run(args: MilestonesArgs) -> Result<()> {
    let _cmd = info_span!("milestones").entered();
    // 1. Load config and apply CLI overrides
    let config = CarpeConfig::load(args.reference.config.as_deref())?;
    let format = args.format.as_deref().unwrap_or(&config.output.format);
    let format = convert::parse_output_format(format)?;
    let sort = args.sort.as_deref().unwrap_or(&config.output.sort);
    let sort = convert::parse_sort_order(sort)?;

    // 2. Fix "today" once for the whole computation
    let engine = args.reference.today.map_or_else(Engine::today_utc, Engine::new);
    let engine_cfg = convert::build_engine_config(&config, engine.today(), args.parallel)?;
    let engine = engine.with_config(engine_cfg);

    // 3. Compute
    let birthday = &args.reference.birthday;
    info!(
        today = %engine.today(),
        %birthday,
        parallel = engine.config().parallel(),
        "computing milestones"
    );
    let result = engine
        .compute_str(birthday, &config.input.date_format)
        .with_context(|| format!("cannot compute milestones for {birthday:?}"))?;

    // 4. Render
    let rendered = match format {
        OutputFormat::Text => render::render_text(&result, sort),
        OutputFormat::Json => render::render_json(&result, sort)?,
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end()).context("failed to write output")?;

    Ok(())
}

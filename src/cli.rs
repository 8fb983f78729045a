use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Carpe: upcoming prime, square, pi and planetary birthdays.
#[derive(Parser)]
#[command(
    name = "carpe",
    version,
    about = "Find the next notable day counts since a reference date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the next milestone of every sequence and planet.
    Milestones(MilestonesArgs),
    /// Print the number of days elapsed since the reference date.
    Elapsed(ElapsedArgs),
}

/// Reference-date arguments shared by all subcommands.
#[derive(clap::Args)]
pub struct ReferenceArgs {
    /// Reference date (birthday), in the configured format (default DD/MM/YYYY).
    #[arg(short, long)]
    pub birthday: String,

    /// Pin "today" (YYYY-MM-DD) instead of using the current UTC day.
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `milestones` subcommand.
#[derive(clap::Args)]
pub struct MilestonesArgs {
    #[command(flatten)]
    pub reference: ReferenceArgs,

    /// Override output format from config (text or json).
    #[arg(short, long)]
    pub format: Option<String>,

    /// Override ordering from config (engine or soonest).
    #[arg(long)]
    pub sort: Option<String>,

    /// Evaluate generators in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `elapsed` subcommand.
#[derive(clap::Args)]
pub struct ElapsedArgs {
    #[command(flatten)]
    pub reference: ReferenceArgs,
}

mod cli;
mod config;
mod convert;
mod elapsed_cmd;
mod logging;
mod milestones_cmd;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Milestones(args) => milestones_cmd::run(args),
        Command::Elapsed(args) => elapsed_cmd::run(args),
    }
}

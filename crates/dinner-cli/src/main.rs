//! Dinner Planner CLI Application
//!
//! Host binary that runs the application startup once and then formats
//! dates with the installed helper.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{apply_overrides, Args, Commands};
use clap::Parser;
use cli::Cli;
use dinner_core::{Config, StartupHook};
use log::debug;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        time_zone,
        hour_cycle,
        command,
    } = Args::parse();

    let config = Config::load(config_file.as_deref()).context("Failed to load configuration")?;
    let options = apply_overrides(config.format, time_zone, hour_cycle);
    debug!("Starting with {options:?}");

    let app = StartupHook::new(options)
        .run()
        .context("Failed to initialize Dinner Planner")?;
    let cli = Cli::new(app);

    match command {
        Some(Format { dates }) => cli.format_dates(&dates),
        None => cli.show_now(),
    }
}

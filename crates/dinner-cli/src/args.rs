use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dinner_core::{FormatOptions, HourCycle};

/// Command-line host for the Dinner Planner date helpers
///
/// Runs the application startup once, then renders dates in the long,
/// human-readable form used across the Dinner Planner. Settings come from
/// the configuration file and can be overridden per invocation.
#[derive(Parser)]
#[command(version, about, name = "dinner")]
pub struct Args {
    /// Path to the JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/dinner-planner/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Time zone used for display: `system`, `UTC`, or an IANA name such as
    /// `Europe/Paris`
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    /// Clock used for the time of day
    #[arg(long, global = true, value_enum)]
    pub hour_cycle: Option<HourCycleArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Dinner Planner CLI
///
/// Without a command the current time is printed.
#[derive(Subcommand)]
pub enum Commands {
    /// Format one or more dates, one result per line
    #[command(alias = "f")]
    Format {
        /// Dates such as `2024-03-31 17:00` or `2024-03-15T14:05:00Z`
        #[arg(required = true)]
        dates: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HourCycleArg {
    /// 12-hour clock with AM/PM
    H12,
    /// 24-hour clock
    H23,
}

impl From<HourCycleArg> for HourCycle {
    fn from(arg: HourCycleArg) -> Self {
        match arg {
            HourCycleArg::H12 => HourCycle::H12,
            HourCycleArg::H23 => HourCycle::H23,
        }
    }
}

/// Applies command-line overrides on top of configured options.
pub fn apply_overrides(
    mut options: FormatOptions,
    time_zone: Option<String>,
    hour_cycle: Option<HourCycleArg>,
) -> FormatOptions {
    if let Some(time_zone) = time_zone {
        options = options.with_time_zone(time_zone);
    }
    if let Some(hour_cycle) = hour_cycle {
        options = options.with_hour_cycle(hour_cycle.into());
    }
    options
}

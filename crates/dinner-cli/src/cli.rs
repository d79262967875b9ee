//! Command execution for the Dinner Planner CLI.
//!
//! Dates are rendered through the helper registry the startup hook
//! populated, the same way any other post-startup consumer reaches them.

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use dinner_core::{App, DateInput, FORMAT_DATE};
use jiff::Timestamp;
use log::debug;

/// Runs CLI commands against an initialized application.
pub struct Cli {
    app: App,
}

impl Cli {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Prints one formatted line per date.
    pub fn format_dates(&self, dates: &[String]) -> Result<()> {
        let mut out = io::stdout().lock();
        for date in dates {
            writeln!(out, "{}", self.render(date)?)?;
        }
        Ok(())
    }

    /// Prints the current time.
    pub fn show_now(&self) -> Result<()> {
        println!("{}", self.render(Timestamp::now())?);
        Ok(())
    }

    fn render(&self, input: impl Into<DateInput>) -> Result<String> {
        let input = input.into();
        debug!("Formatting {input:?}");
        self.app
            .helpers()
            .call(FORMAT_DATE, input)
            .ok_or_else(|| anyhow!("helper '{FORMAT_DATE}' is not installed"))
    }
}

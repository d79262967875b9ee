//! One-time application startup and the helper registry it populates.
//!
//! The host calls [`StartupHook::run`] once its own setup is finished. The
//! hook logs a single startup message and installs the date formatter into
//! a [`Helpers`] registry owned by the returned [`App`]. Helpers are only
//! reachable through that `App`, so nothing can call them before startup.
//!
//! ```rust
//! use dinner_core::{FormatOptions, StartupHook, FORMAT_DATE};
//!
//! let mut hook = StartupHook::new(FormatOptions::default().with_time_zone("UTC"));
//! let app = hook.run().unwrap();
//!
//! let text = app.helpers().call(FORMAT_DATE, "2024-11-28 16:00");
//! assert_eq!(text.as_deref(), Some("Thursday, November 28, 2024 at 04:00 PM"));
//!
//! // The hook is single-shot.
//! assert!(hook.run().is_err());
//! ```

use std::{collections::BTreeMap, fmt, sync::Arc};

use log::info;

use crate::{
    config::FormatOptions,
    error::{DinnerError, Result},
    formatter::DateFormatter,
    input::DateInput,
};

/// Message logged when startup completes.
pub const STARTUP_MESSAGE: &str = "Dinner Planner application initialized";

/// Well-known name the date formatter is installed under.
pub const FORMAT_DATE: &str = "formatDate";

/// A callable installed in the registry.
pub type Helper = Arc<dyn Fn(DateInput) -> String + Send + Sync>;

/// Name-to-callable registry handed to code that runs after startup.
#[derive(Clone, Default)]
pub struct Helpers {
    entries: BTreeMap<String, Helper>,
}

impl Helpers {
    /// Installs `helper` under `name`.
    ///
    /// # Errors
    ///
    /// Returns `DinnerError::HelperConflict` if the name is taken; the
    /// existing helper is left in place.
    pub fn install(&mut self, name: impl Into<String>, helper: Helper) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(DinnerError::HelperConflict { name });
        }
        self.entries.insert(name, helper);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Helper> {
        self.entries.get(name)
    }

    /// Calls the helper named `name`, if installed.
    pub fn call(&self, name: &str, input: impl Into<DateInput>) -> Option<String> {
        self.get(name).map(|helper| helper(input.into()))
    }

    /// Installed names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Helpers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// The initialized application.
#[derive(Debug, Clone)]
pub struct App {
    formatter: DateFormatter,
    helpers: Helpers,
}

impl App {
    pub fn formatter(&self) -> &DateFormatter {
        &self.formatter
    }

    pub fn helpers(&self) -> &Helpers {
        &self.helpers
    }

    /// Formats `input` with the installed formatter.
    pub fn format_date(&self, input: impl Into<DateInput>) -> String {
        self.formatter.format(input)
    }
}

/// Single-shot initializer.
#[derive(Debug)]
pub struct StartupHook {
    options: FormatOptions,
    has_run: bool,
}

impl StartupHook {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            has_run: false,
        }
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Runs startup: logs [`STARTUP_MESSAGE`] once and installs the date
    /// formatter under [`FORMAT_DATE`].
    ///
    /// # Errors
    ///
    /// Returns `DinnerError::AlreadyInitialized` on a second call and
    /// `DinnerError::Configuration` if the options name an unknown time
    /// zone. Nothing is logged in either case.
    pub fn run(&mut self) -> Result<App> {
        if self.has_run {
            return Err(DinnerError::AlreadyInitialized);
        }

        let formatter = DateFormatter::new(&self.options)?;
        self.has_run = true;
        info!("{STARTUP_MESSAGE}");

        let mut helpers = Helpers::default();
        let installed = formatter.clone();
        helpers.install(
            FORMAT_DATE,
            Arc::new(move |input: DateInput| installed.format(input)),
        )?;

        Ok(App { formatter, helpers })
    }
}

/// Creates a [`StartupHook`] and runs it.
pub fn initialize(options: FormatOptions) -> Result<App> {
    StartupHook::new(options).run()
}

//! Formatter options and the JSON configuration file that carries them.
//!
//! The configuration lives at `$XDG_CONFIG_HOME/dinner-planner/config.json`
//! unless a path is given explicitly:
//!
//! ```json
//! { "time_zone": "Europe/Paris", "hour_cycle": "h23" }
//! ```

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigResultExt, DinnerError, Result};

/// Name used for the host's own time zone.
pub const SYSTEM_TIME_ZONE: &str = "system";

const XDG_PREFIX: &str = "dinner-planner";
const CONFIG_FILE_NAME: &str = "config.json";

/// Clock used for the hour and minute part of a formatted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    /// 12-hour clock with an AM/PM marker (`02:05 PM`)
    #[default]
    H12,
    /// 24-hour clock (`14:05`)
    H23,
}

/// Options controlling how dates are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// `system`, `UTC`, or an IANA time zone name
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    #[serde(default)]
    pub hour_cycle: HourCycle,
}

fn default_time_zone() -> String {
    SYSTEM_TIME_ZONE.to_string()
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            hour_cycle: HourCycle::default(),
        }
    }
}

impl FormatOptions {
    /// Pins the time zone by name.
    pub fn with_time_zone(mut self, name: impl Into<String>) -> Self {
        self.time_zone = name.into();
        self
    }

    /// Sets the hour cycle.
    pub fn with_hour_cycle(mut self, hour_cycle: HourCycle) -> Self {
        self.hour_cycle = hour_cycle;
        self
    }

    /// Resolves the configured time zone name.
    ///
    /// # Errors
    ///
    /// Returns `DinnerError::Configuration` if the name is empty or unknown
    /// to the time zone database.
    pub fn resolve_time_zone(&self) -> Result<TimeZone> {
        let name = self.time_zone.trim();
        if name.is_empty() {
            return Err(DinnerError::configuration("time zone name is empty"));
        }
        if name.eq_ignore_ascii_case(SYSTEM_TIME_ZONE) {
            return Ok(TimeZone::system());
        }
        if name.eq_ignore_ascii_case("UTC") {
            return Ok(TimeZone::UTC);
        }
        TimeZone::get(name).config_context(&format!("unknown time zone '{name}'"))
    }
}

/// On-disk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub format: FormatOptions,
}

impl Config {
    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the XDG
    /// config location is searched and defaults are used when nothing is
    /// found there.
    ///
    /// # Errors
    ///
    /// Returns `DinnerError::FileSystem` if the file cannot be read and
    /// `DinnerError::Serialization` if it is not valid JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::from_file(&path)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| DinnerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = serde_json::from_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Returns the existing configuration file under the XDG config
    /// directories, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX).find_config_file(CONFIG_FILE_NAME)
    }
}

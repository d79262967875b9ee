//! Date helpers for the Dinner Planner application.
//!
//! The crate exposes one long-form date formatter and the startup sequence
//! that makes it available to the rest of the application.
//!
//! # Quick Start
//!
//! The formatter can be imported and called directly:
//!
//! ```rust
//! use dinner_core::format_date;
//!
//! let text = format_date("2024-03-31 17:00");
//! assert_eq!(text, "Sunday, March 31, 2024 at 05:00 PM");
//! ```
//!
//! Hosts that want a pinned time zone, or the helper registry, run the
//! startup hook once and keep the returned [`App`]:
//!
//! ```rust
//! use dinner_core::{initialize, FormatOptions, HourCycle};
//!
//! # fn main() -> dinner_core::Result<()> {
//! let options = FormatOptions::default()
//!     .with_time_zone("UTC")
//!     .with_hour_cycle(HourCycle::H23);
//! let app = initialize(options)?;
//!
//! assert_eq!(
//!     app.format_date("2024-03-15T14:05:00Z"),
//!     "Friday, March 15, 2024 at 14:05"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Input that does not name a valid date renders as
//! [`INVALID_DATE`] instead of failing.

pub mod config;
pub mod display;
pub mod error;
pub mod formatter;
pub mod input;
pub mod startup;

// Re-export commonly used types
pub use config::{Config, FormatOptions, HourCycle};
pub use error::{DinnerError, Result};
pub use formatter::{format_date, DateFormatter, INVALID_DATE};
pub use input::DateInput;
pub use startup::{initialize, App, Helper, Helpers, StartupHook, FORMAT_DATE, STARTUP_MESSAGE};

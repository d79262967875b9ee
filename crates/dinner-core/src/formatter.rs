//! The long-form date formatter.

use jiff::{Zoned, tz::TimeZone};

use crate::{
    config::{FormatOptions, HourCycle},
    display::LongDateTime,
    error::Result,
    input::DateInput,
};

/// Text produced for input that does not name a valid date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Renders [`DateInput`] values as long-form date strings.
///
/// The formatter holds only immutable settings, so a single instance can be
/// shared across threads and called any number of times.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    time_zone: TimeZone,
    hour_cycle: HourCycle,
}

impl DateFormatter {
    /// Creates a formatter from options.
    ///
    /// # Errors
    ///
    /// Returns `DinnerError::Configuration` if the time zone cannot be
    /// resolved.
    pub fn new(options: &FormatOptions) -> Result<Self> {
        let time_zone = options.resolve_time_zone()?;
        Ok(Self::with_time_zone(time_zone, options.hour_cycle))
    }

    /// Creates a formatter for an already resolved time zone.
    pub fn with_time_zone(time_zone: TimeZone, hour_cycle: HourCycle) -> Self {
        Self {
            time_zone,
            hour_cycle,
        }
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn hour_cycle(&self) -> HourCycle {
        self.hour_cycle
    }

    /// Formats `input`, or returns [`INVALID_DATE`] if it cannot be resolved.
    pub fn format(&self, input: impl Into<DateInput>) -> String {
        match self.resolve(input) {
            Some(zoned) => self.display(&zoned).to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    /// Resolves `input` to a zoned datetime in this formatter's time zone.
    pub fn resolve(&self, input: impl Into<DateInput>) -> Option<Zoned> {
        input.into().to_zoned(&self.time_zone)
    }

    /// Wraps an already resolved datetime for display with this formatter's
    /// hour cycle.
    pub fn display<'a>(&self, zoned: &'a Zoned) -> LongDateTime<'a> {
        LongDateTime::new(zoned, self.hour_cycle)
    }
}

impl Default for DateFormatter {
    /// Host time zone, 12-hour clock.
    fn default() -> Self {
        Self::with_time_zone(TimeZone::system(), HourCycle::default())
    }
}

/// Formats `input` with the host time zone and a 12-hour clock.
///
/// ```rust
/// let text = dinner_core::format_date("2024-03-15T14:05:00");
/// assert_eq!(text, "Friday, March 15, 2024 at 02:05 PM");
///
/// assert_eq!(dinner_core::format_date("not a date"), "Invalid Date");
/// ```
pub fn format_date(input: impl Into<DateInput>) -> String {
    DateFormatter::default().format(input)
}

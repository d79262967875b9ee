//! Long-form date display.

use std::fmt;

use jiff::Zoned;

use crate::config::HourCycle;

const LONG_12_HOUR: &str = "%A, %B %-d, %Y at %I:%M %p";
const LONG_24_HOUR: &str = "%A, %B %-d, %Y at %H:%M";

/// A wrapper around `Zoned` that renders the long, human-readable form via
/// the `Display` trait.
///
/// # Format
///
/// Components appear in this order:
/// - Full weekday name (`Friday`)
/// - Full month name and unpadded day (`March 15`)
/// - Four-digit year
/// - Zero-padded hour and minute, either `02:05 PM` or `14:05`
///
/// The time is shown in the zone the `Zoned` value carries.
pub struct LongDateTime<'a> {
    zoned: &'a Zoned,
    hour_cycle: HourCycle,
}

impl<'a> LongDateTime<'a> {
    pub fn new(zoned: &'a Zoned, hour_cycle: HourCycle) -> Self {
        Self { zoned, hour_cycle }
    }
}

impl<'a> fmt::Display for LongDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = match self.hour_cycle {
            HourCycle::H12 => LONG_12_HOUR,
            HourCycle::H23 => LONG_24_HOUR,
        };
        write!(f, "{}", self.zoned.strftime(pattern))
    }
}

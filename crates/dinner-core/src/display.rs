//! Display wrapper types for rendering dates.
//!
//! Formatting goes through wrappers implementing [`std::fmt::Display`], so a
//! rendered date can be written straight into any formatter without an
//! intermediate allocation:
//!
//! ```rust
//! use dinner_core::{display::LongDateTime, HourCycle};
//! use jiff::{civil::date, tz::TimeZone};
//!
//! let zoned = date(2024, 3, 15).at(14, 5, 0, 0).to_zoned(TimeZone::UTC).unwrap();
//! let text = LongDateTime::new(&zoned, HourCycle::H23).to_string();
//! assert_eq!(text, "Friday, March 15, 2024 at 14:05");
//! ```

mod datetime;

pub use datetime::LongDateTime;

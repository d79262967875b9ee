//! Date-like values accepted by the formatter.

use std::borrow::Cow;

use jiff::{Timestamp, Zoned, civil, tz::TimeZone};
use log::debug;

/// A value representing a point in time.
///
/// Conversions exist from strings, [`Timestamp`], [`Zoned`],
/// [`civil::DateTime`] and `i64` milliseconds since the Unix epoch, so
/// callers can pass any of them wherever `impl Into<DateInput>` is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Textual date, parsed when formatted
    Text(String),
    /// Absolute instant
    Timestamp(Timestamp),
    /// Instant with its own time zone; converted to the formatter's zone
    Zoned(Zoned),
    /// Wall-clock time, interpreted in the formatter's zone
    Civil(civil::DateTime),
    /// Milliseconds since the Unix epoch
    Millis(i64),
}

impl DateInput {
    /// Resolves the input to a zoned datetime in `tz`.
    ///
    /// Returns `None` when the input does not name a representable instant.
    pub fn to_zoned(&self, tz: &TimeZone) -> Option<Zoned> {
        match self {
            Self::Text(text) => parse_text(text, tz),
            Self::Timestamp(ts) => Some(ts.to_zoned(tz.clone())),
            Self::Zoned(zoned) => Some(zoned.with_time_zone(tz.clone())),
            Self::Civil(dt) => dt.to_zoned(tz.clone()).ok(),
            Self::Millis(ms) => Timestamp::from_millisecond(*ms)
                .ok()
                .map(|ts| ts.to_zoned(tz.clone())),
        }
    }
}

/// Parses ISO-like text.
///
/// Strings with an offset are instants, date-only strings are midnight UTC,
/// and anything else is wall-clock time in `tz`. A bracketed zone
/// annotation without an offset is rejected.
fn parse_text(text: &str, tz: &TimeZone) -> Option<Zoned> {
    let text = normalize_separator(text.trim());

    if let Ok(ts) = text.parse::<Timestamp>() {
        return Some(ts.to_zoned(tz.clone()));
    }

    // A zone annotation is only meaningful next to an explicit offset.
    if text.contains('[') {
        debug!("Zone annotation without offset in '{text}'");
        return None;
    }

    let parsed = if text.contains(['T', 't']) {
        text.parse::<civil::DateTime>()
            .and_then(|dt| dt.to_zoned(tz.clone()))
    } else {
        text.parse::<civil::Date>()
            .and_then(|date| date.to_zoned(TimeZone::UTC))
            .map(|zoned| zoned.with_time_zone(tz.clone()))
    };

    match parsed {
        Ok(zoned) => Some(zoned),
        Err(e) => {
            debug!("Unparseable date input '{text}': {e}");
            None
        }
    }
}

/// Replaces a space between date and time (`2024-03-31 17:00`) with `T`.
fn normalize_separator(text: &str) -> Cow<'_, str> {
    match (text.get(..10), text.get(10..11), text.get(11..)) {
        (Some(date), Some(" "), Some(time)) if !time.is_empty() => {
            Cow::Owned(format!("{date}T{time}"))
        }
        _ => Cow::Borrowed(text),
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for DateInput {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Timestamp> for DateInput {
    fn from(ts: Timestamp) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Zoned> for DateInput {
    fn from(zoned: Zoned) -> Self {
        Self::Zoned(zoned)
    }
}

impl From<&Zoned> for DateInput {
    fn from(zoned: &Zoned) -> Self {
        Self::Zoned(zoned.clone())
    }
}

impl From<civil::DateTime> for DateInput {
    fn from(dt: civil::DateTime) -> Self {
        Self::Civil(dt)
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        Self::Millis(ms)
    }
}

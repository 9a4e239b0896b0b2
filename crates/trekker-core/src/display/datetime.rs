//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting timestamps in a
//! consistent, human-readable format.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

const SHORT_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A calendar day in French short form, e.g. `15 juin 2024`.
///
/// Trip dates are stored as instants; the day shown is the one the instant
/// falls on in the given time zone.
pub struct ShortDate<'a> {
    timestamp: &'a Timestamp,
    tz: &'a TimeZone,
}

impl<'a> ShortDate<'a> {
    pub fn new(timestamp: &'a Timestamp, tz: &'a TimeZone) -> Self {
        Self { timestamp, tz }
    }
}

impl fmt::Display for ShortDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.timestamp.to_zoned(self.tz.clone()).date();
        let month = SHORT_MONTHS[(date.month() - 1) as usize];
        write!(f, "{} {} {}", date.day(), month, date.year())
    }
}

//! Parsing of `JJ/MM/AAAA` dates typed into the trip form.
//!
//! Parsing is deliberately naive: the input is split on `/` and read by
//! position, and the resulting numbers go through calendar normalization
//! instead of range checks. `31/06/2024` is therefore 1 July 2024 rather than
//! an error, and `0/03/2024` is the last day of February.

use jiff::{civil::Date, tz::TimeZone, Span, Timestamp};

/// Parses a day/month/year string into the instant of local midnight in `tz`.
///
/// Each field is read like a numeric cast: surrounding whitespace is ignored,
/// an empty field counts as `0`, fractional values are truncated and anything
/// else that is not a number makes the whole date invalid. Missing fields make
/// the date invalid; fields after the year are ignored. Years `0..=99` are
/// taken as `1900..=1999`.
///
/// Returns `None` when the input does not describe a representable date.
///
/// # Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use trekker_core::dates::parse_day_month_year;
///
/// let start = parse_day_month_year("15/06/2024", &TimeZone::UTC).unwrap();
/// assert_eq!(start.to_string(), "2024-06-15T00:00:00Z");
///
/// // Day 31 of a 30-day month rolls over into the next month.
/// let rolled = parse_day_month_year("31/06/2024", &TimeZone::UTC).unwrap();
/// assert_eq!(rolled.to_string(), "2024-07-01T00:00:00Z");
///
/// assert!(parse_day_month_year("15-06-2024", &TimeZone::UTC).is_none());
/// ```
pub fn parse_day_month_year(input: &str, tz: &TimeZone) -> Option<Timestamp> {
    let mut parts = input.split('/');
    let day = numeric_field(parts.next()?)?;
    let month = numeric_field(parts.next()?)?;
    let year = numeric_field(parts.next()?)?;

    let date = normalized_date(year, month, day)?;
    date.to_zoned(tz.clone()).ok().map(|zoned| zoned.timestamp())
}

/// Builds a calendar date, rolling excess months into years and excess days
/// into months.
fn normalized_date(year: i64, month: i64, day: i64) -> Option<Date> {
    let year = if (0..=99).contains(&year) {
        1900 + year
    } else {
        year
    };

    let month_index = month.checked_sub(1)?;
    let year = year.checked_add(month_index.div_euclid(12))?;
    let month = month_index.rem_euclid(12) + 1;

    let first = Date::new(i16::try_from(year).ok()?, month as i8, 1).ok()?;
    let offset = Span::new().try_days(day.checked_sub(1)?).ok()?;
    first.checked_add(offset).ok()
}

fn numeric_field(field: &str) -> Option<i64> {
    let field = field.trim();
    if field.is_empty() {
        return Some(0);
    }
    let value: f64 = field.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // Saturating cast; values this large are rejected when building the date.
    Some(value.trunc() as i64)
}

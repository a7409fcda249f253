//! Inversion of user-typed date strings into canonical `YYYY-MM-DD`.

use jiff::civil;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::prefs::DateConvention;

/// Parse a user-typed date under the selected convention.
///
/// Returns the canonical `YYYY-MM-DD` spelling, or `None` when the text
/// does not match the convention's pattern or names a day that does not
/// exist on the calendar (`31.02.2024`). Failures carry no detail; the
/// form layer owns the validation messaging.
///
/// The day-first conventions (`ch`, `eu`) share one grammar and accept
/// `.` and `/` separators interchangeably, matching how the tracker has
/// always treated loosely typed European dates. `us` is month-first with
/// `/` only; `iso` is year-first with `-`. Under `auto`, an
/// already-canonical `YYYY-MM-DD` literal is accepted as-is, and anything
/// else goes through the runtime's generic ISO 8601 conversion, projected
/// to a date in the system timezone.
pub fn parse_input_date(input: &str, convention: DateConvention) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match convention {
        DateConvention::Ch | DateConvention::Eu => {
            let [day, month, year] = split3(input, &['.', '/'])?;
            canonical(field(year, 4, 4)?, field(month, 1, 2)?, field(day, 1, 2)?)
        }
        DateConvention::Us => {
            let [month, day, year] = split3(input, &['/'])?;
            canonical(field(year, 4, 4)?, field(month, 1, 2)?, field(day, 1, 2)?)
        }
        DateConvention::Iso => {
            let [year, month, day] = split3(input, &['-'])?;
            canonical(field(year, 4, 4)?, field(month, 1, 2)?, field(day, 1, 2)?)
        }
        DateConvention::Auto => parse_auto(input),
    }
}

fn parse_auto(input: &str) -> Option<String> {
    if let Some(date) = literal_iso(input) {
        return Some(date);
    }
    // Generic conversions: an instant with offset first, then a civil
    // datetime without one. Instants are projected through the system
    // timezone, consistent with how they would be displayed.
    if let Ok(instant) = input.parse::<Timestamp>() {
        return Some(instant.to_zoned(TimeZone::system()).date().to_string());
    }
    if let Ok(datetime) = input.parse::<civil::DateTime>() {
        return Some(datetime.date().to_string());
    }
    None
}

/// Accept an already-canonical, zero-padded `YYYY-MM-DD` literal.
fn literal_iso(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    if !input.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    canonical(
        field(&input[0..4], 4, 4)?,
        field(&input[5..7], 2, 2)?,
        field(&input[8..10], 2, 2)?,
    )
}

/// Split into exactly three fields on the given separators.
fn split3<'a>(input: &'a str, separators: &[char]) -> Option<[&'a str; 3]> {
    let mut parts = input.split(separators);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some([first, second, third])
}

/// A run of ASCII digits within the allowed width, as a number.
fn field(text: &str, min_width: usize, max_width: usize) -> Option<i16> {
    if text.len() < min_width || text.len() > max_width {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<i16>().ok()
}

/// Construct the calendar date and emit its canonical spelling.
///
/// `civil::Date::new` rejects days that do not exist on the calendar (a
/// 30-day month's day 31, 29 February outside leap years) instead of
/// rolling them into the next month, so construction succeeding is the
/// validity check.
fn canonical(year: i16, month: i16, day: i16) -> Option<String> {
    let date = civil::Date::new(year, i8::try_from(month).ok()?, i8::try_from(day).ok()?).ok()?;
    Some(date.to_string())
}

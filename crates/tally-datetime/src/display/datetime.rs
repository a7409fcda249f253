//! Combined date and time rendering.

use crate::locale::{self, resolve_hour12};
use crate::prefs::{DateConvention, FormatOptions, TimeConvention};

use super::date::format_date;
use super::time::{format_time, time_pattern};
use super::{parse_timestamp, resolve_zone};

/// Render a timestamp as a combined date and time string.
///
/// `iso` and `ch` have no locale-backed combined form, so they are
/// composed from the date and time formatters with a single space
/// between. The locale-backed conventions render in one pass, joining
/// the date and time patterns with `", "`.
pub fn format_date_time(
    ts: Option<&str>,
    time_convention: TimeConvention,
    date_convention: DateConvention,
    options: &FormatOptions,
) -> String {
    let Some(raw) = ts else {
        return String::new();
    };
    let Ok(instant) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    match date_convention {
        DateConvention::Iso | DateConvention::Ch => format!(
            "{} {}",
            format_date(ts, date_convention, options),
            format_time(ts, time_convention, options)
        ),
        DateConvention::Auto | DateConvention::Us | DateConvention::Eu => {
            let pattern = format!(
                "{}, {}",
                locale::date_pattern(date_convention),
                time_pattern(resolve_hour12(time_convention), options.hide_seconds)
            );
            instant
                .to_zoned(resolve_zone(options.timezone.as_deref()))
                .strftime(&pattern)
                .to_string()
        }
    }
}

//! Time-of-day rendering.

use crate::locale::resolve_hour12;
use crate::prefs::{FormatOptions, TimeConvention};

use super::{parse_timestamp, resolve_zone};

/// strftime pattern for a resolved hour cycle.
///
/// Time-of-day rendering is not subject to the date conventions; only the
/// hour cycle and the seconds toggle vary.
pub(crate) fn time_pattern(hour12: bool, hide_seconds: bool) -> &'static str {
    match (hour12, hide_seconds) {
        (true, false) => "%I:%M:%S %p",
        (true, true) => "%I:%M %p",
        (false, false) => "%H:%M:%S",
        (false, true) => "%H:%M",
    }
}

/// Render a timestamp as a time-of-day string.
///
/// The hour cycle is resolved from the convention ([`resolve_hour12`]);
/// absent, unparseable, and bad-timezone inputs degrade the same way as
/// date rendering.
pub fn format_time(
    ts: Option<&str>,
    convention: TimeConvention,
    options: &FormatOptions,
) -> String {
    let Some(raw) = ts else {
        return String::new();
    };
    let Ok(instant) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let pattern = time_pattern(resolve_hour12(convention), options.hide_seconds);
    instant
        .to_zoned(resolve_zone(options.timezone.as_deref()))
        .strftime(pattern)
        .to_string()
}

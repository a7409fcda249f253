//! Coarse relative-time rendering for recent instants.

use jiff::Timestamp;

use crate::prefs::{DateConvention, FormatOptions};

use super::date::format_date;
use super::parse_timestamp;

/// Render a recent timestamp as a coarse age: `"just now"`, `"{n}m ago"`,
/// `"{n}h ago"`, or `"{n}d ago"`. Past one week the age stops being
/// meaningful at a glance and the absolute date is rendered instead,
/// under the ambient convention.
///
/// Deliberately not configurable: recency reads the same regardless of
/// the user's date and time preferences.
pub fn format_relative_time(ts: Option<&str>) -> String {
    let Some(raw) = ts else {
        return String::new();
    };
    let Ok(instant) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    relative_or_date(raw, instant, Timestamp::now())
}

/// Bucket the delta between `instant` and `now` in whole floored minutes.
///
/// Split out from [`format_relative_time`] so tests can pin `now`.
fn relative_or_date(raw: &str, instant: Timestamp, now: Timestamp) -> String {
    let minutes = (now.as_second() - instant.as_second()) / 60;
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d ago");
    }
    format_date(Some(raw), DateConvention::Auto, &FormatOptions::default())
}

//! User-facing rendering of machine timestamps.
//!
//! Timestamps cross the API boundary as ISO 8601 strings (UTC or with an
//! explicit offset), possibly absent. The formatters in this module share
//! one degradation policy, chosen so a bad value or a bad preference can
//! never take down a table full of dates:
//!
//! - absent timestamp renders as the empty string
//! - text that does not parse as an instant is returned unchanged, so the
//!   caller still has something to show
//! - an unrecognized timezone identifier is dropped after one logged
//!   warning and the ambient timezone is used instead
//!
//! ## Module Organization
//!
//! - [`date`]: date-only rendering under a date convention
//! - [`time`]: time-of-day rendering under a resolved hour cycle
//! - [`datetime`]: combined date and time rendering
//! - [`relative`]: coarse "n units ago" rendering for recent instants

pub mod date;
pub mod datetime;
pub mod relative;
pub mod time;

// Re-export the formatter functions for convenience
pub use date::format_date;
pub use datetime::format_date_time;
pub use relative::format_relative_time;
pub use time::format_time;

use jiff::{tz::TimeZone, Timestamp};
use log::warn;

use crate::error::{FormatError, Result};

/// Parse boundary text into an instant.
pub(crate) fn parse_timestamp(raw: &str) -> Result<Timestamp> {
    raw.parse::<Timestamp>()
        .map_err(|_| FormatError::UnparseableTimestamp {
            raw: raw.to_string(),
        })
}

/// Look up an IANA timezone identifier in the platform tz database.
pub(crate) fn lookup_zone(name: &str) -> Result<TimeZone> {
    TimeZone::get(name).map_err(|_| FormatError::UnknownTimezone {
        name: name.to_string(),
    })
}

/// Resolve the timezone a call should render in.
///
/// A broken timezone preference must not block every date display in the
/// application, so an unrecognized identifier is logged and dropped in
/// favor of the system timezone. This is the only place invalidity is
/// masked rather than surfaced; the fallback happens at most once per
/// resolution.
pub(crate) fn resolve_zone(name: Option<&str>) -> TimeZone {
    let Some(name) = name else {
        return TimeZone::system();
    };
    match lookup_zone(name) {
        Ok(zone) => zone,
        Err(err) => {
            warn!("{err}; rendering in system timezone");
            TimeZone::system()
        }
    }
}

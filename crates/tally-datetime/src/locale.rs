//! Ambient locale detection and hour-cycle resolution.
//!
//! The date and time conventions both default to `auto`, which follows
//! whatever the host environment is configured for. POSIX systems expose
//! that through the locale environment variables, consulted in the usual
//! precedence order (`LC_ALL`, then `LC_TIME`, then `LANG`). The
//! environment is re-read on every call so a change is visible on the
//! next render; nothing here is memoized.

use std::env;

use jiff::civil;

use crate::prefs::{DateConvention, TimeConvention};

/// A reference time in the afternoon. Rendering it through a locale's
/// customary time pattern reveals the hour cycle: a 12-hour locale emits
/// a meridiem marker for 13:00, a 24-hour locale does not.
const PROBE_TIME: civil::Time = civil::time(13, 0, 0, 0);

/// Customary rendering patterns for a locale family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LocaleProfile {
    /// strftime pattern for date-only rendering
    pub(crate) date_pattern: &'static str,
    /// strftime pattern for time-of-day rendering in the locale's
    /// customary hour cycle
    pub(crate) time_pattern: &'static str,
}

impl LocaleProfile {
    /// Whether this locale customarily renders times with an AM/PM marker.
    ///
    /// There is no direct "does this locale use 12-hour time" query, so
    /// the fixed afternoon reference time is rendered through the
    /// profile's time pattern and the output inspected for a marker.
    pub(crate) fn uses_meridiem(&self) -> bool {
        PROBE_TIME
            .strftime(self.time_pattern)
            .to_string()
            .contains("PM")
    }
}

/// Resolve the ambient locale profile from the environment.
pub(crate) fn ambient_profile() -> LocaleProfile {
    let locale = env::var("LC_ALL")
        .or_else(|_| env::var("LC_TIME"))
        .or_else(|_| env::var("LANG"))
        .unwrap_or_default();
    profile_for(&locale)
}

/// Map a locale identifier (e.g. `de_CH.UTF-8`) to a rendering profile.
///
/// Unknown locales, `C`, and `POSIX` fall back to unambiguous ISO
/// ordering with a 24-hour clock.
pub(crate) fn profile_for(locale: &str) -> LocaleProfile {
    // lang_COUNTRY.encoding@modifier -> keep lang_COUNTRY
    let tag = locale.split(['.', '@'].as_slice()).next().unwrap_or(locale);
    let lang = tag.split('_').next().unwrap_or(tag);

    match lang {
        "en" if tag.starts_with("en_US") => LocaleProfile {
            date_pattern: "%m/%d/%Y",
            time_pattern: "%I:%M %p",
        },
        // British/Commonwealth English: day-first, 24-hour
        "en" => LocaleProfile {
            date_pattern: "%d/%m/%Y",
            time_pattern: "%H:%M",
        },
        "de" => LocaleProfile {
            date_pattern: "%d.%m.%Y",
            time_pattern: "%H:%M",
        },
        "fr" | "es" | "it" | "pt" | "nl" => LocaleProfile {
            date_pattern: "%d/%m/%Y",
            time_pattern: "%H:%M",
        },
        "ja" | "zh" | "ko" => LocaleProfile {
            date_pattern: "%Y/%m/%d",
            time_pattern: "%H:%M",
        },
        _ => LocaleProfile {
            date_pattern: "%Y-%m-%d",
            time_pattern: "%H:%M",
        },
    }
}

/// Date pattern for a convention. `auto` consults the ambient locale;
/// every other convention is fixed regardless of environment.
pub(crate) fn date_pattern(convention: DateConvention) -> &'static str {
    match convention {
        DateConvention::Us => "%m/%d/%Y",
        DateConvention::Eu => "%d/%m/%Y",
        DateConvention::Iso => "%Y-%m-%d",
        DateConvention::Ch => "%d.%m.%Y",
        DateConvention::Auto => ambient_profile().date_pattern,
    }
}

/// Decide whether to render a 12-hour clock for the given preference.
///
/// Explicit preferences answer directly; `auto` probes the ambient
/// locale. Pure and total — repeated calls under a fixed environment
/// return the same answer.
pub fn resolve_hour12(pref: TimeConvention) -> bool {
    match pref {
        TimeConvention::Hour12 => true,
        TimeConvention::Hour24 => false,
        TimeConvention::Auto => ambient_profile().uses_meridiem(),
    }
}

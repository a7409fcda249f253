//! Preference-bound formatting surface.
//!
//! UI call sites hold a timestamp and want it rendered under whatever the
//! user currently has configured; they should not thread preferences into
//! every call. [`BoundFormatter`] closes over a [`PreferenceSource`] —
//! the capability of reading the settings store's current values — and
//! re-exposes the formatting and parsing functions with those values
//! applied. Preferences are read fresh on every call, never cached, so a
//! settings change is visible on the very next render.

use crate::display;
use crate::parse;
use crate::prefs::{FormatOptions, Preferences};

/// Capability for reading the current user preferences.
///
/// Blanket-implemented for closures, so the settings store integration
/// is usually just `BoundFormatter::new(|| store.current_prefs())`; a
/// fixed value works the same way with `move || prefs.clone()`.
pub trait PreferenceSource {
    /// The preferences in effect right now.
    fn current(&self) -> Preferences;
}

impl<F> PreferenceSource for F
where
    F: Fn() -> Preferences,
{
    fn current(&self) -> Preferences {
        self()
    }
}

/// Formatting and parsing surface bound to a preference source.
#[derive(Debug, Clone)]
pub struct BoundFormatter<S> {
    source: S,
}

impl<S: PreferenceSource> BoundFormatter<S> {
    /// Bind the formatting surface to a preference source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Render a date under the current date convention.
    pub fn format_date(&self, ts: Option<&str>, options: Option<&FormatOptions>) -> String {
        let prefs = self.source.current();
        display::format_date(ts, prefs.date_format, &merge(&prefs, options))
    }

    /// Render a time of day under the current hour-cycle preference.
    pub fn format_time(&self, ts: Option<&str>, options: Option<&FormatOptions>) -> String {
        let prefs = self.source.current();
        display::format_time(ts, prefs.time_format, &merge(&prefs, options))
    }

    /// Render a combined date and time under the current preferences.
    pub fn format_date_time(&self, ts: Option<&str>, options: Option<&FormatOptions>) -> String {
        let prefs = self.source.current();
        display::format_date_time(
            ts,
            prefs.time_format,
            prefs.date_format,
            &merge(&prefs, options),
        )
    }

    /// Render a coarse relative age; preferences do not apply.
    pub fn format_relative_time(&self, ts: Option<&str>) -> String {
        display::format_relative_time(ts)
    }

    /// Parse user-typed date text under the current date convention.
    pub fn parse_input_date(&self, input: &str) -> Option<String> {
        parse::parse_input_date(input, self.source.current().date_format)
    }
}

/// Merge per-call options over the resolved preferences.
///
/// An explicit timezone in `options` wins; otherwise the preference
/// timezone fills in when it is not `auto`.
fn merge(prefs: &Preferences, options: Option<&FormatOptions>) -> FormatOptions {
    let mut merged = options.cloned().unwrap_or_default();
    if merged.timezone.is_none() {
        merged.timezone = prefs.timezone.name().map(str::to_string);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::TimezoneSelector;

    #[test]
    fn test_merge_precedence() {
        let prefs = Preferences {
            timezone: TimezoneSelector::Named("Europe/Zurich".to_string()),
            ..Preferences::default()
        };

        let merged = merge(&prefs, None);
        assert_eq!(merged.timezone.as_deref(), Some("Europe/Zurich"));

        let override_opts = FormatOptions {
            timezone: Some("America/New_York".to_string()),
            ..FormatOptions::default()
        };
        let merged = merge(&prefs, Some(&override_opts));
        assert_eq!(merged.timezone.as_deref(), Some("America/New_York"));
    }

    #[test]
    fn test_merge_auto_timezone_contributes_nothing() {
        let merged = merge(&Preferences::default(), None);
        assert_eq!(merged.timezone, None);
        assert!(!merged.hide_seconds);
    }
}

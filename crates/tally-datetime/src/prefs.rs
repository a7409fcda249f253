//! User preference model for date and time rendering.
//!
//! The tracker's settings store owns three fields — `date_format`,
//! `time_format`, and `timezone` — all of which default to `auto`. This
//! module mirrors those fields as typed values, along with the per-call
//! [`FormatOptions`] bag that display contexts use to override parts of
//! the resolved behavior for a single call.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Type-safe enumeration of date rendering conventions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum DateConvention {
    /// Follow the ambient locale of the host environment
    #[default]
    Auto,

    /// `MM/DD/YYYY`
    Us,

    /// `DD/MM/YYYY`
    Eu,

    /// `YYYY-MM-DD`
    Iso,

    /// `DD.MM.YYYY`
    Ch,
}

impl FromStr for DateConvention {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DateConvention::Auto),
            "us" => Ok(DateConvention::Us),
            "eu" => Ok(DateConvention::Eu),
            "iso" => Ok(DateConvention::Iso),
            "ch" => Ok(DateConvention::Ch),
            _ => Err(FormatError::InvalidPreference {
                field: "date_format",
                value: s.to_string(),
            }),
        }
    }
}

impl DateConvention {
    /// Convert to the settings store's string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DateConvention::Auto => "auto",
            DateConvention::Us => "us",
            DateConvention::Eu => "eu",
            DateConvention::Iso => "iso",
            DateConvention::Ch => "ch",
        }
    }
}

/// Type-safe enumeration of hour-cycle conventions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimeConvention {
    /// Follow the ambient locale's customary hour cycle
    #[default]
    Auto,

    /// 12-hour clock with AM/PM marker
    #[serde(rename = "12h")]
    Hour12,

    /// 24-hour clock
    #[serde(rename = "24h")]
    Hour24,
}

impl FromStr for TimeConvention {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(TimeConvention::Auto),
            "12h" => Ok(TimeConvention::Hour12),
            "24h" => Ok(TimeConvention::Hour24),
            _ => Err(FormatError::InvalidPreference {
                field: "time_format",
                value: s.to_string(),
            }),
        }
    }
}

impl TimeConvention {
    /// Convert to the settings store's string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeConvention::Auto => "auto",
            TimeConvention::Hour12 => "12h",
            TimeConvention::Hour24 => "24h",
        }
    }
}

/// The user's timezone selection.
///
/// Either the literal `auto` (render in the runtime's local timezone) or
/// an IANA identifier such as `Europe/Zurich`. The identifier is not
/// validated at assignment time; an unknown name surfaces only when a
/// formatter tries to use it, and is then dropped for that call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum TimezoneSelector {
    /// Use the runtime's local timezone
    #[default]
    Auto,

    /// An IANA timezone identifier, carried verbatim
    Named(String),
}

impl TimezoneSelector {
    /// The IANA name carried by an explicit selection, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            TimezoneSelector::Auto => None,
            TimezoneSelector::Named(name) => Some(name),
        }
    }
}

impl From<String> for TimezoneSelector {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("auto") {
            TimezoneSelector::Auto
        } else {
            TimezoneSelector::Named(value)
        }
    }
}

impl From<TimezoneSelector> for String {
    fn from(value: TimezoneSelector) -> Self {
        match value {
            TimezoneSelector::Auto => "auto".to_string(),
            TimezoneSelector::Named(name) => name,
        }
    }
}

/// Current rendering preferences, as read from the settings store.
///
/// Every field defaults to `auto`, matching the store's behavior for
/// users who never touched the format settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct Preferences {
    /// Date rendering convention
    pub date_format: DateConvention,
    /// Hour-cycle convention
    pub time_format: TimeConvention,
    /// Timezone to render in
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub timezone: TimezoneSelector,
}

/// Per-call rendering overrides.
///
/// A display context can diverge from the resolved preferences without
/// discarding them, e.g. showing a trade in the exchange's local time.
/// Merge precedence: a field set here beats the corresponding resolved
/// preference for this call only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct FormatOptions {
    /// One-off IANA timezone override for this call
    pub timezone: Option<String>,
    /// Suppress the seconds component of rendered times
    pub hide_seconds: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_convention_from_str() {
        assert_eq!("us".parse::<DateConvention>().unwrap(), DateConvention::Us);
        assert_eq!("ISO".parse::<DateConvention>().unwrap(), DateConvention::Iso);
        assert_eq!(
            "auto".parse::<DateConvention>().unwrap(),
            DateConvention::Auto
        );

        match "dmy".parse::<DateConvention>() {
            Err(FormatError::InvalidPreference { field, value }) => {
                assert_eq!(field, "date_format");
                assert_eq!(value, "dmy");
            }
            other => panic!("Expected InvalidPreference, got {:?}", other),
        }
    }

    #[test]
    fn test_time_convention_from_str() {
        assert_eq!(
            "12h".parse::<TimeConvention>().unwrap(),
            TimeConvention::Hour12
        );
        assert_eq!(
            "24h".parse::<TimeConvention>().unwrap(),
            TimeConvention::Hour24
        );
        assert!("13h".parse::<TimeConvention>().is_err());
    }

    #[test]
    fn test_as_str_round_trips() {
        for convention in [
            DateConvention::Auto,
            DateConvention::Us,
            DateConvention::Eu,
            DateConvention::Iso,
            DateConvention::Ch,
        ] {
            assert_eq!(convention.as_str().parse::<DateConvention>().unwrap(), convention);
        }
        for convention in [
            TimeConvention::Auto,
            TimeConvention::Hour12,
            TimeConvention::Hour24,
        ] {
            assert_eq!(convention.as_str().parse::<TimeConvention>().unwrap(), convention);
        }
    }

    #[test]
    fn test_timezone_selector_from_string() {
        assert_eq!(TimezoneSelector::from("auto".to_string()), TimezoneSelector::Auto);
        assert_eq!(TimezoneSelector::from("AUTO".to_string()), TimezoneSelector::Auto);
        assert_eq!(
            TimezoneSelector::from("Europe/Zurich".to_string()),
            TimezoneSelector::Named("Europe/Zurich".to_string())
        );
        assert_eq!(TimezoneSelector::Auto.name(), None);
        assert_eq!(
            TimezoneSelector::Named("UTC".to_string()).name(),
            Some("UTC")
        );
    }

    #[test]
    fn test_preferences_settings_payload() {
        let prefs: Preferences = serde_json::from_str(
            r#"{"date_format":"ch","time_format":"24h","timezone":"Europe/Zurich"}"#,
        )
        .unwrap();
        assert_eq!(prefs.date_format, DateConvention::Ch);
        assert_eq!(prefs.time_format, TimeConvention::Hour24);
        assert_eq!(
            prefs.timezone,
            TimezoneSelector::Named("Europe/Zurich".to_string())
        );

        // Unset fields fall back to auto, like the settings store does.
        let defaults: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, Preferences::default());

        let json = serde_json::to_string(&Preferences::default()).unwrap();
        assert_eq!(
            json,
            r#"{"date_format":"auto","time_format":"auto","timezone":"auto"}"#
        );
    }
}

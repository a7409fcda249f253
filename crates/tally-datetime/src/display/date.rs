//! Date-only rendering.

use crate::locale;
use crate::prefs::{DateConvention, FormatOptions};

use super::{parse_timestamp, resolve_zone};

/// Render a timestamp as a date-only string under the given convention.
///
/// `iso`, `us`, `eu`, and `ch` render with fixed field ordering no matter
/// what the host environment is configured for; `auto` follows the
/// ambient locale. The timezone comes from `options` when set, otherwise
/// the system timezone.
pub fn format_date(
    ts: Option<&str>,
    convention: DateConvention,
    options: &FormatOptions,
) -> String {
    let Some(raw) = ts else {
        return String::new();
    };
    let Ok(instant) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let zoned = instant.to_zoned(resolve_zone(options.timezone.as_deref()));
    zoned.strftime(locale::date_pattern(convention)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FormatOptions {
        FormatOptions {
            timezone: Some("UTC".to_string()),
            ..FormatOptions::default()
        }
    }

    #[test]
    fn test_format_date_fixed_conventions() {
        let ts = Some("2024-03-05T12:00:00Z");
        assert_eq!(format_date(ts, DateConvention::Iso, &utc()), "2024-03-05");
        assert_eq!(format_date(ts, DateConvention::Us, &utc()), "03/05/2024");
        assert_eq!(format_date(ts, DateConvention::Eu, &utc()), "05/03/2024");
        assert_eq!(format_date(ts, DateConvention::Ch, &utc()), "05.03.2024");
    }

    #[test]
    fn test_format_date_absent_renders_empty() {
        assert_eq!(format_date(None, DateConvention::Iso, &utc()), "");
    }

    #[test]
    fn test_format_date_unparseable_passes_through() {
        assert_eq!(
            format_date(Some("not-a-date"), DateConvention::Iso, &utc()),
            "not-a-date"
        );
        assert_eq!(format_date(Some(""), DateConvention::Us, &utc()), "");
    }

    #[test]
    fn test_format_date_timezone_shifts_day() {
        // 02:00 UTC on March 6th is still March 5th in New York.
        let ts = Some("2024-03-06T02:00:00Z");
        let new_york = FormatOptions {
            timezone: Some("America/New_York".to_string()),
            ..FormatOptions::default()
        };
        assert_eq!(format_date(ts, DateConvention::Iso, &new_york), "2024-03-05");
        assert_eq!(format_date(ts, DateConvention::Iso, &utc()), "2024-03-06");
    }

    #[test]
    fn test_format_date_invalid_timezone_falls_back() {
        let ts = Some("2024-03-05T12:00:00Z");
        let broken = FormatOptions {
            timezone: Some("Not/AZone".to_string()),
            ..FormatOptions::default()
        };
        assert_eq!(
            format_date(ts, DateConvention::Iso, &broken),
            format_date(ts, DateConvention::Iso, &FormatOptions::default())
        );
    }
}

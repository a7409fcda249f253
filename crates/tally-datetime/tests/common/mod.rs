use tally_datetime::{
    BoundFormatter, DateConvention, FormatOptions, Preferences, TimeConvention, TimezoneSelector,
};

/// Preferences pinned to explicit conventions and UTC so assertions do
/// not depend on the machine running the tests.
pub fn fixed_prefs(date: DateConvention, time: TimeConvention) -> Preferences {
    Preferences {
        date_format: date,
        time_format: time,
        timezone: TimezoneSelector::Named("UTC".to_string()),
    }
}

/// A formatter bound to fixed preferences.
pub fn bound(
    date: DateConvention,
    time: TimeConvention,
) -> BoundFormatter<impl Fn() -> Preferences> {
    let prefs = fixed_prefs(date, time);
    BoundFormatter::new(move || prefs.clone())
}

/// Options carrying only a UTC timezone pin.
pub fn utc() -> FormatOptions {
    FormatOptions {
        timezone: Some("UTC".to_string()),
        ..FormatOptions::default()
    }
}

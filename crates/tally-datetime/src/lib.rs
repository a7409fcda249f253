//! Date/time formatting and parsing for the Tally portfolio tracker.
//!
//! Every value the tracker's API serves carries machine timestamps as
//! ISO 8601 strings in UTC. This crate turns those into user-facing text
//! under the user's configurable combination of date convention, hour
//! cycle, and timezone, and turns user-typed date strings back into
//! canonical `YYYY-MM-DD` form.
//!
//! # Architecture
//!
//! - **Preference model** ([`prefs`]): typed conventions mirroring the
//!   settings store's fields, plus the per-call [`FormatOptions`]
//!   override bag.
//! - **Locale resolution** ([`locale`]): ambient locale detection for the
//!   `auto` conventions and the hour-cycle probe behind
//!   [`resolve_hour12`].
//! - **Display formatters** ([`display`]): date, time, combined, and
//!   relative rendering.
//! - **Parser** ([`parse`]): convention-aware inversion of user input.
//! - **Accessor** ([`accessor`]): [`BoundFormatter`] closes over a
//!   [`PreferenceSource`] so call sites never thread preferences
//!   explicitly.
//!
//! # Degradation policy
//!
//! Formatters never fail: an absent timestamp renders as the empty
//! string, text that is not an instant is passed through unchanged, and
//! an unrecognized timezone identifier falls back to the system timezone
//! after one logged warning. The parser signals invalid input with
//! `None`; nothing in this crate panics or propagates an error for
//! documented inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use tally_datetime::{BoundFormatter, DateConvention, FormatOptions, Preferences};
//!
//! // Bound to fixed preferences here; the application binds a closure
//! // over the live settings store instead.
//! let prefs = Preferences {
//!     date_format: DateConvention::Ch,
//!     ..Preferences::default()
//! };
//! let formatter = BoundFormatter::new(move || prefs.clone());
//!
//! let opts = FormatOptions {
//!     timezone: Some("UTC".to_string()),
//!     ..FormatOptions::default()
//! };
//! assert_eq!(
//!     formatter.format_date(Some("2024-03-05T12:00:00Z"), Some(&opts)),
//!     "05.03.2024"
//! );
//! assert_eq!(
//!     formatter.parse_input_date("29.02.2024"),
//!     Some("2024-02-29".to_string())
//! );
//! ```

pub mod accessor;
pub mod display;
pub mod error;
pub mod locale;
pub mod parse;
pub mod prefs;

// Re-export commonly used types
pub use accessor::{BoundFormatter, PreferenceSource};
pub use display::{format_date, format_date_time, format_relative_time, format_time};
pub use error::{FormatError, Result};
pub use locale::resolve_hour12;
pub use parse::parse_input_date;
pub use prefs::{DateConvention, FormatOptions, Preferences, TimeConvention, TimezoneSelector};

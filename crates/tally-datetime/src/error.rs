//! Error types for the formatting subsystem.

use thiserror::Error;

/// Classification of the failure modes inside the formatting subsystem.
///
/// None of these ever escape a formatter: an absent timestamp renders as
/// the empty string, text that is not an instant is passed back unchanged,
/// and an unrecognized timezone degrades to the ambient timezone after a
/// logged warning. The type is public because preference parsing
/// (`FromStr` on the convention enums) reports through it.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Timezone identifier is not present in the platform tz database
    #[error("unrecognized timezone identifier '{name}'")]
    UnknownTimezone { name: String },
    /// A preference value from the settings store had an unknown spelling
    #[error("invalid {field} preference: '{value}'")]
    InvalidPreference { field: &'static str, value: String },
    /// Boundary text could not be interpreted as an instant
    #[error("not a valid timestamp: '{raw}'")]
    UnparseableTimestamp { raw: String },
}

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;

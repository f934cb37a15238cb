// Error types shared across the crate

use thiserror::Error;

/// Errors surfaced by grid navigation and convention loading.
///
/// Navigation clamping at the year bounds is not an error; `advance` and
/// `retreat` report a clamped step as an ordinary no-op.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// A jump target (or construction input) outside the valid month/year range.
    #[error("invalid target: month {month}, year {year}")]
    InvalidTarget { month: u32, year: i32 },

    /// The calendar backend could not produce a date from the given components.
    #[error("unrepresentable date: {0}")]
    UnrepresentableDate(String),

    /// A calendar convention that fails validation or cannot be parsed.
    #[error("invalid convention: {0}")]
    InvalidConvention(String),
}

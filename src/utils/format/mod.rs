// Date formatting helpers and default locale tables

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Default pattern for the date/string formatter pair (yyyy-MM-dd).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short weekday names, Sunday-first, capitalized.
pub const DEFAULT_WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full month names, January-first.
pub const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a date with a chrono pattern (see [`DEFAULT_DATE_FORMAT`]).
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

/// Parse a date from a string produced by [`format_date`].
pub fn parse_date(input: &str, pattern: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input, pattern)
        .map_err(|e| CalendarError::UnrepresentableDate(format!("{input:?}: {e}")))
}

// Calendar convention model
// Injected at construction instead of reading ambient locale state

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::utils::format::{DEFAULT_DATE_FORMAT, DEFAULT_MONTH_NAMES, DEFAULT_WEEKDAY_NAMES};

/// Calendar convention: week start plus the locale tables a host needs to
/// label the grid.
///
/// Weekday names are stored Sunday-first regardless of `first_day_of_week`;
/// use [`CalendarConvention::weekday_header`] for the rotated header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConvention {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday.
    pub first_day_of_week: u8,
    /// Short weekday names, Sunday-first.
    pub weekday_names: [String; 7],
    /// Full month names, January-first.
    pub month_names: [String; 12],
    /// chrono format pattern for the date/string formatter pair.
    pub date_format: String,
}

impl Default for CalendarConvention {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            weekday_names: DEFAULT_WEEKDAY_NAMES.map(String::from),
            month_names: DEFAULT_MONTH_NAMES.map(String::from),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl CalendarConvention {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.first_day_of_week > 6 {
            return Err(CalendarError::InvalidConvention(format!(
                "first_day_of_week must be 0..=6, got {}",
                self.first_day_of_week
            )));
        }
        Ok(())
    }

    /// The 7-entry header row, rotated so the configured week start comes first.
    pub fn weekday_header(&self) -> Vec<String> {
        let start = self.first_day_of_week as usize;
        (0..7)
            .map(|i| self.weekday_names[(start + i) % 7].clone())
            .collect()
    }

    /// Full name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> Option<&str> {
        let index = month.checked_sub(1)? as usize;
        self.month_names.get(index).map(String::as_str)
    }
}

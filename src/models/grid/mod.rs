// Grid view-state models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which grid the controller generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    Month,
    Week,
}

/// The complete view state a host renders from.
///
/// `visible_days` is derived from the other fields and recomputed by the
/// controller whenever any of them change; it is a cache, not a source of
/// truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    /// The date anchoring the displayed month or week.
    pub reference_date: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub display_mode: DisplayMode,
    pub min_year: i32,
    pub max_year: i32,
    /// Ascending, duplicate-free sequence of dates the grid renders.
    pub visible_days: Vec<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mode_defaults_to_month() {
        assert_eq!(DisplayMode::default(), DisplayMode::Month);
    }

    #[test]
    fn display_mode_serde_round_trip() {
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            mode: DisplayMode,
        }

        let encoded = toml::to_string(&Wrap {
            mode: DisplayMode::Week,
        })
        .unwrap();
        let decoded: Wrap = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.mode, DisplayMode::Week);
    }
}

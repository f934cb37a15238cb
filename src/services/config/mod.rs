// Convention configuration loading
// Hosts ship a TOML file overriding week start, locale tables, or the date
// format; anything absent falls back to the defaults.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::CalendarError;
use crate::models::convention::CalendarConvention;

/// Parse a convention from TOML text.
pub fn convention_from_toml(input: &str) -> Result<CalendarConvention, CalendarError> {
    let convention: CalendarConvention =
        toml::from_str(input).map_err(|e| CalendarError::InvalidConvention(e.to_string()))?;
    convention.validate()?;
    Ok(convention)
}

/// Load a convention from a TOML file. A missing file is not an error; it
/// yields the default convention.
pub fn load_convention(path: &Path) -> Result<CalendarConvention, CalendarError> {
    if !path.exists() {
        info!("no convention file at {}, using defaults", path.display());
        return Ok(CalendarConvention::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| CalendarError::InvalidConvention(format!("{}: {e}", path.display())))?;
    convention_from_toml(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let convention = convention_from_toml("").unwrap();
        assert_eq!(convention, CalendarConvention::default());
    }

    #[test]
    fn partial_input_overrides_only_named_fields() {
        let convention = convention_from_toml("first_day_of_week = 1").unwrap();
        assert_eq!(convention.first_day_of_week, 1);
        assert_eq!(convention.weekday_names[0], "Sun");
        assert_eq!(convention.date_format, "%Y-%m-%d");
    }

    #[test]
    fn full_tables_parse() {
        let input = r#"
first_day_of_week = 1
weekday_names = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]
month_names = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
]
date_format = "%d.%m.%Y"
"#;
        let convention = convention_from_toml(input).unwrap();
        assert_eq!(convention.month_name(3), Some("März"));
        assert_eq!(convention.weekday_header()[0], "Mo");
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            convention_from_toml("first_day_of_week = \"sunday\""),
            Err(CalendarError::InvalidConvention(_))
        ));
    }

    #[test]
    fn out_of_range_week_start_is_rejected() {
        assert!(matches!(
            convention_from_toml("first_day_of_week = 9"),
            Err(CalendarError::InvalidConvention(_))
        ));
    }

    #[test]
    fn wrong_table_arity_is_rejected() {
        assert!(matches!(
            convention_from_toml("weekday_names = [\"Sun\", \"Mon\"]"),
            Err(CalendarError::InvalidConvention(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convention.toml");
        let convention = load_convention(&path).unwrap();
        assert_eq!(convention, CalendarConvention::default());
    }

    #[test]
    fn file_contents_are_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convention.toml");
        fs::write(&path, "first_day_of_week = 6\n").unwrap();
        let convention = load_convention(&path).unwrap();
        assert_eq!(convention.first_day_of_week, 6);
    }
}

//! `YYYYMMDD` date key utilities.

use chrono::NaiveDate;

/// chrono format string for date keys.
pub const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// Parse a `YYYYMMDD` key into a calendar date.
///
/// Returns `None` unless the key is exactly eight ASCII digits naming a real
/// date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Format a calendar date as a `YYYYMMDD` key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Whether `key` is a valid `YYYYMMDD` date.
pub fn is_valid_date_key(key: &str) -> bool {
    parse_date_key(key).is_some()
}

/// The `YYYY` prefix of a date key, if it has one.
pub fn year_of(key: &str) -> Option<&str> {
    key.get(0..4).filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_key() {
        let date = parse_date_key("20240229").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        assert!(parse_date_key("20230229").is_none());
        assert!(parse_date_key("2024-01-01").is_none());
        assert!(parse_date_key("2024011").is_none());
        assert!(parse_date_key("+2024011").is_none());
        assert!(parse_date_key("").is_none());
    }

    #[test]
    fn test_format_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(format_date_key(date), "20250109");
        assert_eq!(parse_date_key(&format_date_key(date)), Some(date));
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("20240115"), Some("2024"));
        assert_eq!(year_of("abc"), None);
        assert_eq!(year_of("ab123456"), None);
    }
}

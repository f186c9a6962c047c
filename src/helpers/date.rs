//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a front-matter date in the formats authors actually write
///
/// Time-of-day and offsets are accepted but only the calendar date is kept.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Format date in full format (like "January 1, 2024")
pub fn long_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-01-10"), Some(ymd(2024, 1, 10)));
        assert_eq!(parse_date(" 2024/03/01 "), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01 09:30"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01T09:30:00"), Some(ymd(2024, 3, 1)));
        assert_eq!(
            parse_date("2024-03-01T23:30:00-08:00"),
            Some(ymd(2024, 3, 1))
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(&ymd(2024, 1, 5)), "January 5, 2024");
        assert_eq!(long_date(&ymd(2024, 3, 15)), "March 15, 2024");
    }
}

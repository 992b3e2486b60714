/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the admin screens
use chrono::{DateTime, Utc};

/// Example: 2024-03-15T14:02:26Z -> "Mar 15, 2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%b %d, %Y %H:%M").to_string()
}

/// Example: 2024-03-15T14:02:26Z -> "Mar 15, 2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %d, %Y").to_string()
}

/// Dash for timestamps the server did not send.
pub fn format_optional_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(&ts("2024-03-15T14:02:26.123Z")),
            "Mar 15, 2024 14:02"
        );
        assert_eq!(
            format_datetime(&ts("2024-12-31T23:59:59+00:00")),
            "Dec 31, 2024 23:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&ts("2024-03-05T00:00:00Z")), "Mar 05, 2024");
    }

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(format_optional_datetime(None), "—");
    }
}

/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format a timestamp to DD.MM.YYYY HH:MM
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Format an optional timestamp, rendering a dash when absent
pub fn format_optional_datetime(dt: &Option<DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => format_datetime(dt),
        None => "—".to_string(),
    }
}

/// Format a timestamp to DD.MM.YYYY
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15.03.2026 14:02");
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(&dt), "31.12.2026");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional_datetime(&None), "—");
        let dt = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_optional_datetime(&Some(dt)), "02.01.2026 03:04");
    }
}

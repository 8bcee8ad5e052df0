/// Utilities for date and time formatting
use chrono::{DateTime, Local, TimeZone, Utc};

/// Today's date as `YYYY-MM-DD`, the value format of date inputs.
pub fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Date portion of an ISO timestamp.
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Wall-clock time of an ISO timestamp in the browser's time zone.
/// Unparseable input is returned unchanged.
pub fn format_time(timestamp: &str) -> String {
    format_time_in(timestamp, &Local)
}

fn format_time_in<Tz>(timestamp: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(tz).format("%H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

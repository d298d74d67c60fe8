use chrono::{DateTime, Utc};

/// Layout expected by the tracking service for every date field
pub const TRACKING_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a UTC timestamp for the tracking service (`YYYY-MM-DD HH:MM:SS`)
pub fn format_tracking(utc_time: DateTime<Utc>) -> String {
    utc_time.format(TRACKING_TIMESTAMP_FORMAT).to_string()
}

/// Format timestamp as ISO 8601 UTC for API responses
pub fn format_iso8601(utc_time: DateTime<Utc>) -> String {
    utc_time.to_rfc3339()
}

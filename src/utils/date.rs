//! Observation dates are stored as milliseconds since the Unix epoch.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Local midnight of `date`, in ms since the epoch.
pub fn date_to_millis(date: NaiveDate) -> i64 {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    match Local.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.timestamp_millis(),
        None => midnight.and_utc().timestamp_millis(),
    }
}

pub fn millis_to_local(ms: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(ms).map(|utc| utc.with_timezone(&Local))
}

/// Format a stored timestamp; out-of-range values print raw.
pub fn millis_to_date_string(ms: i64, format: &str) -> String {
    match millis_to_local(ms) {
        Some(dt) => dt.format(format).to_string(),
        None => ms.to_string(),
    }
}

//! Locale-independent rendering of Unix-epoch timestamps.
//!
//! Output is always `"{Mon} {day}, {year}, {HH}:{MM}:{SS} UTC"` with English
//! month abbreviations and a 24-hour clock, regardless of host locale or TZ.

use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Rendered for instants outside chrono's calendar (roughly ±262,000 years),
/// which is narrower than the ±8.64e15 ms a JS `Date` can hold.
pub const INVALID_DATE: &str = "Invalid Date UTC";

/// Format whole seconds since the epoch.
pub fn format_timestamp(unix: i64) -> String {
    unix.checked_mul(1000)
        .and_then(DateTime::from_timestamp_millis)
        .map_or_else(|| INVALID_DATE.to_string(), render)
}

/// Format fractional seconds since the epoch.
///
/// Milliseconds are truncated toward zero; the rendered second is the floor
/// of the resulting instant, so `-0.5` shows as `23:59:59` on Dec 31, 1969.
pub fn format_timestamp_f64(unix: f64) -> String {
    let millis = (unix * 1000.0).trunc();
    if !millis.is_finite() {
        return INVALID_DATE.to_string();
    }
    // Saturating cast; anything past i64 is rejected by chrono below.
    #[allow(clippy::cast_possible_truncation)]
    let millis = millis as i64;
    DateTime::from_timestamp_millis(millis).map_or_else(|| INVALID_DATE.to_string(), render)
}

fn render(dt: DateTime<Utc>) -> String {
    format!(
        "{month} {day}, {year:04}, {hour:02}:{minute:02}:{second:02} UTC",
        month = MONTHS[dt.month0() as usize],
        day = dt.day(),
        year = dt.year(),
        hour = dt.hour(),
        minute = dt.minute(),
        second = dt.second(),
    )
}

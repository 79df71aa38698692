//! Display Helpers
//!
//! Relative and absolute timestamp formatting shared by every client.

use chrono::{DateTime, Utc};

/// Relative age of `then` as seen at `now`
///
/// Under a minute is "Just now"; a week or more falls back to the date.
/// Timestamps in the future count as "Just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();

    if secs < 60 {
        return "Just now".to_string();
    }

    let minutes = secs / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return plural(days, "day");
    }

    format_date(then)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// `Jan 05, 2024 14:30`
pub fn format_date_time(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y %H:%M").to_string()
}

/// `Jan 05, 2024`
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y").to_string()
}

/// `14:30`
pub fn format_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M").to_string()
}

//! Relative time strings and epoch helpers.

use chrono::{DateTime, Duration, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Human "time ago" string for `then` as seen from `now`.
///
/// Months are 30 days and years 12 months. Seconds are always plural.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return format!("{} seconds ago", seconds);
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return ago(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }

    let days = hours / 24;
    if days < 30 {
        return ago(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return ago(months, "month");
    }

    ago(months / 12, "year")
}

fn ago(amount: i64, unit: &str) -> String {
    let plural = if amount == 1 { "" } else { "s" };
    format!("{} {}{} ago", amount, unit, plural)
}

/// UNIX seconds `days_ago` days before `now`.
///
/// Saturates at the earliest representable time.
pub fn epoch_timestamp(now: DateTime<Utc>, days_ago: u32) -> i64 {
    Duration::try_seconds(i64::from(days_ago) * SECONDS_PER_DAY)
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .timestamp()
}

use time::macros::format_description;
use time::OffsetDateTime;
use tracing::warn;

const MILLIS_PER_DAY: i128 = 86_400_000;

/// Whole days between `timestamp` (unix seconds) and `now`, rounded down.
pub fn elapsed_days(timestamp: i64, now: OffsetDateTime) -> i64 {
    let now_ms = now.unix_timestamp_nanos() / 1_000_000;
    let timestamp_ms = i128::from(timestamp) * 1_000;
    (now_ms - timestamp_ms).div_euclid(MILLIS_PER_DAY) as i64
}

/// Coarse "how long ago" label for a review. Timestamps in the future are
/// reported as "Today".
pub fn format_relative_age(timestamp: i64, now: OffsetDateTime) -> String {
    match elapsed_days(timestamp, now) {
        days if days <= 0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        days @ 2..=6 => format!("{} days ago", days),
        days @ 7..=29 => format!("{} weeks ago", days / 7),
        days @ 30..=364 => format!("{} months ago", days / 30),
        days => format!("{} years ago", days / 365),
    }
}

/// UTC calendar date of `timestamp` as `YYYY-MM-DD`.
pub fn format_calendar_date(timestamp: i64) -> String {
    let date_time = OffsetDateTime::from_unix_timestamp(timestamp)
        .unwrap_or_else(|e| {
            warn!("Timestamp {} out of range ({}), using the epoch date", timestamp, e);
            OffsetDateTime::UNIX_EPOCH
        });

    date_time
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

//! Display helpers derived from post text and timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, never less than one.
pub fn reading_time(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Render a backend timestamp as `"Jan 5, 2024"`.
///
/// Accepts RFC 3339 as well as the naive ISO timestamps the backend emits.
/// Input that cannot be parsed is returned as-is.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Split post content into display paragraphs.
pub fn paragraphs(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

//! Timestamp helpers for anonboard.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current UTC time as an RFC3339 string with microsecond precision.
///
/// Every stored timestamp goes through this single function. The format is
/// fixed-width, so lexicographic comparison of two timestamps matches
/// chronological order and the database can sort on the column directly.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp back into a `DateTime<Utc>`.
///
/// Returns `None` if the string is not valid RFC3339.
pub fn parse(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

//! Day arithmetic shared by the resolver, classifier, and drift detector.

use chrono::{DateTime, Duration, Utc};

use crate::constants::MILLIS_PER_DAY;
use crate::errors::{KithError, KithResult};

/// Fractional days from `earlier` to `later`. Negative when `earlier` is in the future.
pub fn days_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Offset an instant by a fractional number of days (millisecond precision).
pub fn add_days(at: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    at + Duration::milliseconds((days * MILLIS_PER_DAY).round() as i64)
}

/// Round to one decimal place for display and audit fields.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parse an RFC 3339 / ISO-8601 instant coming from the contact store.
///
/// A malformed timestamp is a contract violation and is reported, never coerced.
pub fn parse_timestamp(field: &str, raw: &str) -> KithResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| KithError::InvalidInput {
            field: field.to_string(),
            message: format!("malformed timestamp {raw:?}: {e}"),
        })
}

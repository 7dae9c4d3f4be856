//! Wall-clock helpers.

use chrono::{DateTime, Utc};

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current UTC time truncated to whole milliseconds.
///
/// Millisecond precision is what the journal stores, so timestamps taken here
/// survive a persist/reload unchanged.
#[must_use]
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_ms()).unwrap_or_else(Utc::now)
}

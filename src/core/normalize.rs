use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::core::types::{Interval, NormalizedInterval};

/// Default forward horizon for open-ended intervals.
pub const DEFAULT_OPEN_END_HORIZON_DAYS: i64 = 7;

/// Parses a date string into a millisecond-epoch value.
///
/// Accepted shapes, in order: RFC 3339, `YYYY-MM-DDTHH:MM:SS` without an
/// offset (assumed UTC), bare `YYYY-MM-DD` (midnight UTC). Anything else
/// yields `None`.
#[must_use]
pub fn parse_timestamp_millis(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc).timestamp_millis() as f64);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc().timestamp_millis() as f64);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc().timestamp_millis() as f64);
    }

    None
}

/// Reduces one raw interval to comparable epoch endpoints.
///
/// Returns `None` when `start` does not parse; the record is then excluded
/// from range resolution entirely instead of leaking NaN into layout math.
/// An absent, empty, or unparseable `end` marks the work as ongoing and
/// resolves to `now + horizon`, so it visually extends past the present
/// without claiming a false completion date.
#[must_use]
pub fn normalize_interval(
    interval: &Interval,
    now: DateTime<Utc>,
    horizon: Duration,
) -> Option<NormalizedInterval> {
    let start_ms = parse_timestamp_millis(&interval.start)?;

    let end_ms = interval
        .end
        .as_deref()
        .and_then(parse_timestamp_millis)
        .unwrap_or_else(|| (now + horizon).timestamp_millis() as f64);

    Some(NormalizedInterval {
        start_ms,
        end_ms,
        label: interval.label.clone(),
        color: interval.color.clone(),
    })
}

use chrono::{DateTime, Utc};

use crate::core::types::{NormalizedInterval, ResolvedRange};

/// Half-width of the window handed out when no interval survives
/// normalization or every endpoint collapses onto one instant.
const FALLBACK_HALF_WINDOW_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Reduces all normalized intervals to the global `[min, max]` horizon.
///
/// Takes the minimum of all start values and the maximum of all end values
/// (open ends were already resolved to their forward horizon). Empty or
/// degenerate input falls back to a symmetric ±24h window around `now`, so
/// the coordinate mapper never divides by zero and something always renders.
#[must_use]
pub fn resolve_range<'a, I>(intervals: I, now: DateTime<Utc>) -> ResolvedRange
where
    I: IntoIterator<Item = &'a NormalizedInterval>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for interval in intervals {
        if interval.start_ms.is_finite() {
            min = min.min(interval.start_ms);
        }
        if interval.end_ms.is_finite() {
            max = max.max(interval.end_ms);
        }
    }

    if !min.is_finite() || !max.is_finite() || min >= max {
        let center = now.timestamp_millis() as f64;
        return ResolvedRange {
            min_time: center - FALLBACK_HALF_WINDOW_MS,
            max_time: center + FALLBACK_HALF_WINDOW_MS,
        };
    }

    ResolvedRange {
        min_time: min,
        max_time: max,
    }
}

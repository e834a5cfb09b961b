use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::scale::TimeScale;
use crate::core::types::Tick;

/// Spans at or below this width get date+time labels under the adaptive
/// policy; anything wider gets date-only labels.
const ADAPTIVE_DATETIME_SPAN_MS: f64 = 48.0 * 60.0 * 60.0 * 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickLabelLocale {
    EnUs,
    EsEs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickLabelPolicy {
    /// Date-only labels regardless of span.
    Date,
    /// Date plus wall-clock minutes regardless of span.
    DateTime,
    /// Date+time for spans up to 48 hours, date-only above.
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickLabelConfig {
    pub locale: TickLabelLocale,
    pub policy: TickLabelPolicy,
}

impl Default for TickLabelConfig {
    fn default() -> Self {
        Self {
            locale: TickLabelLocale::EnUs,
            policy: TickLabelPolicy::Adaptive,
        }
    }
}

/// Produces `count + 1` evenly spaced ticks across the resolved range,
/// endpoints inclusive, each carrying a formatted label and its pixel
/// position from the shared scale.
///
/// A `count` of zero yields no ticks rather than a division by zero. Ticks
/// are purely derived from the range and cannot fail independently of the
/// range resolver's fallback behavior.
#[must_use]
pub fn generate_ticks(scale: TimeScale, count: usize, config: TickLabelConfig) -> Vec<Tick> {
    if count == 0 {
        return Vec::new();
    }

    let range = scale.range();
    let span = range.span();

    (0..=count)
        .map(|index| {
            let time = range.min_time + (index as f64) * span / (count as f64);
            Tick {
                time,
                position: scale.time_to_pixel(time),
                label: format_tick_label(time, span, config),
            }
        })
        .collect()
}

/// Formats one axis label. Timestamps outside chrono's representable range
/// degrade to the raw millisecond value instead of failing.
pub(crate) fn format_tick_label(time_ms: f64, span_ms: f64, config: TickLabelConfig) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(time_ms.round() as i64) else {
        return format!("{:.0}", time_ms);
    };

    let wants_time = match config.policy {
        TickLabelPolicy::Date => false,
        TickLabelPolicy::DateTime => true,
        TickLabelPolicy::Adaptive => span_ms <= ADAPTIVE_DATETIME_SPAN_MS,
    };

    let pattern = match (config.locale, wants_time) {
        (TickLabelLocale::EnUs, false) => "%Y-%m-%d",
        (TickLabelLocale::EnUs, true) => "%Y-%m-%d %H:%M",
        (TickLabelLocale::EsEs, false) => "%d/%m/%Y",
        (TickLabelLocale::EsEs, true) => "%d/%m/%Y %H:%M",
    };

    dt.format(pattern).to_string()
}

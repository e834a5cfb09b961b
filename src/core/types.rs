use serde::{Deserialize, Serialize};

/// One dated span of work or allocation, as supplied by upstream data
/// providers (project activities, hardware allocations, migration windows).
///
/// `end` may be absent or empty for ongoing work. `start <= end` is expected
/// but not enforced: violations are absorbed by the bar layout clamps rather
/// than rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// A named lane grouping zero or more intervals, rendered as one row.
///
/// Constructed fresh on every layout pass from upstream data, never mutated
/// in place, discarded once rendering completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub segments: Vec<Interval>,
}

/// An interval reduced to comparable millisecond-epoch endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInterval {
    pub start_ms: f64,
    pub end_ms: f64,
    pub label: Option<String>,
    pub color: Option<String>,
}

/// Global layout horizon across all intervals.
///
/// Invariant: `max_time > min_time` strictly. The range resolver substitutes
/// a fallback window before this type is ever constructed from degenerate
/// input, so consumers may divide by `span()` freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRange {
    pub min_time: f64,
    pub max_time: f64,
}

impl ResolvedRange {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max_time - self.min_time
    }
}

/// Bar geometry for one interval: horizontal extent as percentages of the
/// resolved span, vertical offset in absolute pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub left_percent: f64,
    pub width_percent: f64,
    pub top_position: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One axis marker: a timestamp, its pixel position, and a formatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub time: f64,
    pub position: f64,
    pub label: String,
}

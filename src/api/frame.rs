use serde::{Deserialize, Serialize};

use crate::core::{BarLayout, ResolvedRange, Tick};

/// One row of the output frame: the track identity plus its bar geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    pub id: String,
    pub label: String,
    pub bars: Vec<BarLayout>,
}

/// Complete output of one layout pass.
///
/// Ephemeral: recomputed whenever the input changes, discarded once
/// rendering completes. Track order and per-track bar order are preserved
/// from the input. `now_position` is the unclamped pixel position of the
/// injected current instant, for drawing a today marker; like any other
/// unclamped position it may fall outside the padded canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub range: ResolvedRange,
    pub now_position: f64,
    pub ticks: Vec<Tick>,
    pub tracks: Vec<TrackLayout>,
}

use serde::{Deserialize, Serialize};

use crate::core::types::{BarLayout, NormalizedInterval, ResolvedRange};
use crate::error::{LayoutError, LayoutResult};

/// Visual-safety clamps and row metrics for bar geometry.
///
/// The clamps trade exact proportional accuracy at the extremes for bars
/// that stay visible and interactive: a start marker never pushed off the
/// right edge, very short intervals widened to a clickable floor, very long
/// ones capped so they do not dominate the row.
///
/// Layout functions assume a policy that passed [`LayoutPolicy::validate`];
/// the pipeline validates once per pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPolicy {
    /// Upper clamp for `left_percent`.
    pub max_left_percent: f64,
    /// Width floor before scaling, in percent of the resolved span.
    pub min_width_percent: f64,
    /// Width ceiling before scaling, in percent of the resolved span.
    pub max_width_percent: f64,
    /// Multiplier applied to the width band, for denser or sparser views.
    pub width_scale: f64,
    /// Vertical offset of the first row, in pixels.
    pub header_offset: f64,
    /// Vertical distance between consecutive rows, in pixels.
    pub row_height: f64,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            max_left_percent: 85.0,
            min_width_percent: 12.0,
            max_width_percent: 60.0,
            width_scale: 1.0,
            header_offset: 40.0,
            row_height: 36.0,
        }
    }
}

impl LayoutPolicy {
    pub fn validate(self) -> LayoutResult<Self> {
        if !self.max_left_percent.is_finite()
            || self.max_left_percent < 0.0
            || self.max_left_percent > 100.0
        {
            return Err(LayoutError::InvalidConfig(
                "max left percent must be finite and within [0, 100]".to_owned(),
            ));
        }

        if !self.min_width_percent.is_finite()
            || !self.max_width_percent.is_finite()
            || self.min_width_percent < 0.0
            || self.min_width_percent > self.max_width_percent
        {
            return Err(LayoutError::InvalidConfig(
                "width clamp band must be finite with floor <= ceiling".to_owned(),
            ));
        }

        if !self.width_scale.is_finite() || self.width_scale <= 0.0 {
            return Err(LayoutError::InvalidConfig(
                "width scale must be finite and > 0".to_owned(),
            ));
        }

        if !self.header_offset.is_finite() || !self.row_height.is_finite() || self.row_height <= 0.0
        {
            return Err(LayoutError::InvalidConfig(
                "row metrics must be finite with row height > 0".to_owned(),
            ));
        }

        Ok(self)
    }

    #[must_use]
    pub fn width_floor(self) -> f64 {
        self.min_width_percent * self.width_scale
    }

    #[must_use]
    pub fn width_ceiling(self) -> f64 {
        self.max_width_percent * self.width_scale
    }
}

/// Computes bar geometry for one track's intervals at vertical slot
/// `track_index`.
///
/// Horizontal extent is expressed as percentages of the resolved span so the
/// same layout is reusable at any render width. No failure mode: degenerate
/// and inverted durations are absorbed entirely by the clamps.
#[must_use]
pub fn layout_track(
    intervals: &[NormalizedInterval],
    range: ResolvedRange,
    track_index: usize,
    policy: LayoutPolicy,
) -> Vec<BarLayout> {
    let top_position = policy.header_offset + (track_index as f64) * policy.row_height;

    intervals
        .iter()
        .map(|interval| layout_bar(interval, range, top_position, policy))
        .collect()
}

fn layout_bar(
    interval: &NormalizedInterval,
    range: ResolvedRange,
    top_position: f64,
    policy: LayoutPolicy,
) -> BarLayout {
    let span = range.span();
    let raw_left = (interval.start_ms - range.min_time) / span * 100.0;
    let raw_width = (interval.end_ms - interval.start_ms) / span * 100.0;

    BarLayout {
        left_percent: raw_left.clamp(0.0, policy.max_left_percent),
        width_percent: raw_width.clamp(policy.width_floor(), policy.width_ceiling()),
        top_position,
        label: interval.label.clone(),
        color: interval.color.clone(),
    }
}

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::Track;
use crate::error::LayoutResult;

use super::frame::TimelineFrame;
use super::options::LayoutOptions;
use super::pipeline::compute_layout;

/// Single-entry memoization of the layout pipeline.
///
/// The pipeline is idempotent, so hosts that re-render more often than their
/// data changes can layer this on top of [`compute_layout`] instead of
/// recomputing inside their refresh cycle. The key covers the input tracks,
/// the options, and the injected instant; any change recomputes.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(u64, TimelineFrame)>,
}

impl LayoutCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached frame when the input is unchanged, otherwise
    /// recomputes and stores.
    pub fn lookup_or_compute(
        &mut self,
        tracks: &[Track],
        options: &LayoutOptions,
        now: DateTime<Utc>,
    ) -> LayoutResult<TimelineFrame> {
        let key = layout_input_key(tracks, options, now);
        if let Some((cached_key, frame)) = &self.entry {
            if *cached_key == key {
                trace!(key, "layout cache hit");
                return Ok(frame.clone());
            }
        }

        let frame = compute_layout(tracks, options, now)?;
        self.entry = Some((key, frame.clone()));
        Ok(frame)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

fn layout_input_key(tracks: &[Track], options: &LayoutOptions, now: DateTime<Utc>) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();

    tracks.len().hash(&mut hasher);
    for track in tracks {
        track.id.hash(&mut hasher);
        track.label.hash(&mut hasher);
        track.segments.len().hash(&mut hasher);
        for segment in &track.segments {
            segment.start.hash(&mut hasher);
            segment.end.hash(&mut hasher);
            segment.label.hash(&mut hasher);
            segment.color.hash(&mut hasher);
        }
    }

    hash_options(options, &mut hasher);
    now.timestamp_millis().hash(&mut hasher);

    hasher.finish()
}

fn hash_options(options: &LayoutOptions, hasher: &mut impl Hasher) {
    OrderedFloat(options.canvas.width).hash(hasher);
    OrderedFloat(options.canvas.padding).hash(hasher);
    OrderedFloat(options.policy.max_left_percent).hash(hasher);
    OrderedFloat(options.policy.min_width_percent).hash(hasher);
    OrderedFloat(options.policy.max_width_percent).hash(hasher);
    OrderedFloat(options.policy.width_scale).hash(hasher);
    OrderedFloat(options.policy.header_offset).hash(hasher);
    OrderedFloat(options.policy.row_height).hash(hasher);
    options.tick_count.hash(hasher);
    options.open_end_horizon_days.hash(hasher);
    options.tick_labels.hash(hasher);
}

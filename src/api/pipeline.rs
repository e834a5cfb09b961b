use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::core::{
    NormalizedInterval, TimeScale, Track, generate_ticks, layout_track, normalize_interval,
    resolve_range,
};
use crate::error::LayoutResult;

use super::frame::{TimelineFrame, TrackLayout};
use super::options::LayoutOptions;

/// Runs the full layout pipeline over `tracks` at the injected instant `now`.
///
/// `now` is an explicit parameter rather than a wall-clock read so repeated
/// calls with identical input are bit-identical, which is what makes the
/// optional [`super::LayoutCache`] safe.
///
/// Only configuration can fail; interval data never does. Records whose
/// start date does not parse are dropped during normalization and reported
/// through a debug event, never through the return value.
pub fn compute_layout(
    tracks: &[Track],
    options: &LayoutOptions,
    now: DateTime<Utc>,
) -> LayoutResult<TimelineFrame> {
    let options = options.validate()?;
    let horizon = Duration::days(options.open_end_horizon_days);

    let mut normalized: Vec<Vec<NormalizedInterval>> = Vec::with_capacity(tracks.len());
    let mut skipped_intervals = 0usize;
    for track in tracks {
        let mut segments = Vec::with_capacity(track.segments.len());
        for interval in &track.segments {
            match normalize_interval(interval, now, horizon) {
                Some(segment) => segments.push(segment),
                None => skipped_intervals += 1,
            }
        }
        normalized.push(segments);
    }

    let range = resolve_range(normalized.iter().flatten(), now);
    let scale = TimeScale::new(range, options.canvas);

    let track_layouts: Vec<TrackLayout> = tracks
        .iter()
        .zip(&normalized)
        .enumerate()
        .map(|(index, (track, segments))| TrackLayout {
            id: track.id.clone(),
            label: track.label.clone(),
            bars: layout_track(segments, range, index, options.policy),
        })
        .collect();

    let ticks = generate_ticks(scale, options.tick_count, options.tick_labels);
    let now_position = scale.time_to_pixel(now.timestamp_millis() as f64);

    debug!(
        track_count = tracks.len(),
        skipped_intervals,
        tick_count = ticks.len(),
        "computed timeline layout"
    );

    Ok(TimelineFrame {
        range,
        now_position,
        ticks,
        tracks: track_layouts,
    })
}

use chrono::{Days, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use timeline_layout::core::{
    Canvas, Interval, ResolvedRange, TickLabelConfig, TimeScale, Track, generate_ticks,
};
use timeline_layout::{LayoutOptions, compute_layout};

fn date_string(day_offset: u64) -> String {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base date");
    let date = base
        .checked_add_days(Days::new(day_offset))
        .expect("offset in range");
    date.format("%Y-%m-%d").to_string()
}

proptest! {
    #[test]
    fn bar_geometry_always_respects_the_clamp_bounds(
        spans in prop::collection::vec((0u64..2_000, 0u64..2_000, prop::bool::ANY), 1..40)
    ) {
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let tracks: Vec<Track> = spans
            .iter()
            .enumerate()
            .map(|(index, (start, end, open))| Track {
                id: format!("track-{index}"),
                label: format!("Track {index}"),
                segments: vec![Interval {
                    start: date_string(*start),
                    end: if *open { None } else { Some(date_string(*end)) },
                    label: None,
                    color: None,
                }],
            })
            .collect();

        let options = LayoutOptions::default();
        let frame = compute_layout(&tracks, &options, now).expect("valid options");

        for track in &frame.tracks {
            for bar in &track.bars {
                prop_assert!(bar.left_percent >= 0.0);
                prop_assert!(bar.left_percent <= options.policy.max_left_percent);
                prop_assert!(bar.width_percent >= options.policy.width_floor());
                prop_assert!(bar.width_percent <= options.policy.width_ceiling());
                prop_assert!(bar.top_position.is_finite());
            }
        }
    }

    #[test]
    fn ticks_are_monotonic_and_inclusive_for_any_range(
        min_time in -1.0e12f64..1.0e12,
        span in 1.0e3f64..1.0e12,
        count in 1usize..50
    ) {
        let range = ResolvedRange { min_time, max_time: min_time + span };
        let scale = TimeScale::new(range, Canvas::new(1280.0, 24.0));

        let ticks = generate_ticks(scale, count, TickLabelConfig::default());

        prop_assert_eq!(ticks.len(), count + 1);
        prop_assert_eq!(ticks[0].time, range.min_time);
        prop_assert!((ticks[count].time - range.max_time).abs() <= span * 1e-12);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn scale_round_trip_property(
        min_time in -1.0e12f64..1.0e12,
        span in 1.0e3f64..1.0e12,
        factor in 0.0f64..1.0
    ) {
        let range = ResolvedRange { min_time, max_time: min_time + span };
        let scale = TimeScale::new(range, Canvas::new(1920.0, 32.0));
        let time = min_time + factor * span;

        let px = scale.time_to_pixel(time);
        let recovered = scale.pixel_to_time(px);

        prop_assert!((recovered - time).abs() <= span * 1e-9);
    }

    #[test]
    fn pipeline_is_idempotent_for_arbitrary_input(
        spans in prop::collection::vec((0u64..1_000, 0u64..1_000), 0..20)
    ) {
        let now = Utc.with_ymd_and_hms(2022, 9, 15, 6, 0, 0).unwrap();
        let tracks: Vec<Track> = spans
            .iter()
            .enumerate()
            .map(|(index, (start, end))| Track {
                id: format!("t{index}"),
                label: format!("t{index}"),
                segments: vec![Interval {
                    start: date_string(*start),
                    end: Some(date_string(*end)),
                    label: None,
                    color: None,
                }],
            })
            .collect();

        let options = LayoutOptions::default();
        let first = compute_layout(&tracks, &options, now).expect("valid options");
        let second = compute_layout(&tracks, &options, now).expect("valid options");

        prop_assert_eq!(first, second);
    }
}

use chrono::{TimeZone, Utc};
use timeline_layout::api::{TIMELINE_FRAME_JSON_SCHEMA_V1, TimelineFrameJsonContractV1};
use timeline_layout::core::{Interval, Track};
use timeline_layout::{LayoutOptions, TimelineFrame, compute_layout};

fn sample_frame() -> TimelineFrame {
    let now = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    let tracks = vec![Track {
        id: "dc-migration".to_owned(),
        label: "Datacenter migration".to_owned(),
        segments: vec![Interval {
            start: "2024-01-01".to_owned(),
            end: Some("2024-01-10".to_owned()),
            label: Some("Wave 1".to_owned()),
            color: Some("#19be6b".to_owned()),
        }],
    }];

    compute_layout(&tracks, &LayoutOptions::default(), now).expect("valid options")
}

#[test]
fn versioned_contract_round_trips() {
    let frame = sample_frame();

    let json = frame
        .to_json_contract_v1_pretty()
        .expect("serializable frame");
    let restored = TimelineFrame::from_json_compat_str(&json).expect("parseable payload");

    assert_eq!(frame, restored);
}

#[test]
fn bare_frame_payload_is_accepted() {
    let frame = sample_frame();
    let bare = serde_json::to_string(&frame).expect("serializable frame");

    let restored = TimelineFrame::from_json_compat_str(&bare).expect("parseable payload");
    assert_eq!(frame, restored);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let payload = TimelineFrameJsonContractV1 {
        schema_version: TIMELINE_FRAME_JSON_SCHEMA_V1 + 1,
        frame: sample_frame(),
    };
    let json = serde_json::to_string(&payload).expect("serializable payload");

    assert!(TimelineFrame::from_json_compat_str(&json).is_err());
}

#[test]
fn garbage_payload_is_rejected() {
    assert!(TimelineFrame::from_json_compat_str("{\"nope\": true}").is_err());
}

#[test]
fn input_contract_deserializes_with_optional_fields_absent() {
    let json = r#"{
        "id": "rack-07",
        "label": "Rack 07",
        "segments": [
            {"start": "2024-01-01"},
            {"start": "2024-01-03", "end": "2024-01-05", "label": "Allocation"}
        ]
    }"#;

    let track: Track = serde_json::from_str(json).expect("input contract");
    assert_eq!(track.segments.len(), 2);
    assert_eq!(track.segments[0].end, None);
    assert_eq!(track.segments[1].label.as_deref(), Some("Allocation"));
}

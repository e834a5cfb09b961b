use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

use super::frame::TimelineFrame;

pub const TIMELINE_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON envelope for handing a frame to a webview host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: TimelineFrame,
}

impl TimelineFrame {
    pub fn to_json_contract_v1_pretty(&self) -> LayoutResult<String> {
        let payload = TimelineFrameJsonContractV1 {
            schema_version: TIMELINE_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| LayoutError::Contract(format!("failed to serialize frame contract v1: {e}")))
    }

    /// Accepts either a bare frame or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> LayoutResult<Self> {
        if let Ok(frame) = serde_json::from_str::<TimelineFrame>(input) {
            return Ok(frame);
        }

        let payload: TimelineFrameJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| LayoutError::Contract(format!("failed to parse frame json payload: {e}")))?;
        if payload.schema_version != TIMELINE_FRAME_JSON_SCHEMA_V1 {
            return Err(LayoutError::Contract(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

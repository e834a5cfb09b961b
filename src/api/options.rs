use serde::{Deserialize, Serialize};

use crate::core::{Canvas, DEFAULT_OPEN_END_HORIZON_DAYS, LayoutPolicy, TickLabelConfig};
use crate::error::{LayoutError, LayoutResult};

/// Full configuration for one layout pass.
///
/// Serializable so the hosting console can persist and restore view setup
/// without inventing an ad-hoc format. Validation happens once per pass at
/// the pipeline entry; after that every stage is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub canvas: Canvas,
    #[serde(default)]
    pub policy: LayoutPolicy,
    /// Number of axis segments; the generator emits `tick_count + 1` ticks.
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    /// Forward horizon substituted for open-ended intervals, in days.
    #[serde(default = "default_open_end_horizon_days")]
    pub open_end_horizon_days: i64,
    #[serde(default)]
    pub tick_labels: TickLabelConfig,
}

fn default_tick_count() -> usize {
    6
}

fn default_open_end_horizon_days() -> i64 {
    DEFAULT_OPEN_END_HORIZON_DAYS
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new(Canvas::new(960.0, 16.0))
    }
}

impl LayoutOptions {
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            policy: LayoutPolicy::default(),
            tick_count: default_tick_count(),
            open_end_horizon_days: default_open_end_horizon_days(),
            tick_labels: TickLabelConfig::default(),
        }
    }

    pub fn validate(self) -> LayoutResult<Self> {
        if !self.canvas.is_valid() {
            return Err(LayoutError::InvalidCanvas {
                width: self.canvas.width,
                padding: self.canvas.padding,
            });
        }

        let _ = self.policy.validate()?;

        if self.open_end_horizon_days <= 0 {
            return Err(LayoutError::InvalidConfig(
                "open-end horizon must be at least one day".to_owned(),
            ));
        }

        Ok(self)
    }
}

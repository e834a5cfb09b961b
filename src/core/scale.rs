use serde::{Deserialize, Serialize};

use crate::core::types::ResolvedRange;

/// Horizontal drawing surface: total width and a symmetric edge padding,
/// both in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub padding: f64,
}

impl Canvas {
    #[must_use]
    pub fn new(width: f64, padding: f64) -> Self {
        Self { width, padding }
    }

    /// A canvas is usable when the padded interior retains positive width.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.padding.is_finite()
            && self.width > 0.0
            && self.padding >= 0.0
            && 2.0 * self.padding < self.width
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - 2.0 * self.padding
    }
}

/// Linear map from the resolved time horizon into `[padding, width − padding]`.
///
/// Deliberately unclamped: timestamps outside the horizon map outside the
/// padded canvas. Visual clamping belongs to the bar layout stage, which
/// keeps this transform reusable by the tick generator without distortion.
///
/// Built from a [`ResolvedRange`] (strictly positive span) and a canvas that
/// passed options validation, so both mapping directions are infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    range: ResolvedRange,
    canvas: Canvas,
}

impl TimeScale {
    #[must_use]
    pub fn new(range: ResolvedRange, canvas: Canvas) -> Self {
        Self { range, canvas }
    }

    #[must_use]
    pub fn range(self) -> ResolvedRange {
        self.range
    }

    /// Maps a millisecond-epoch timestamp to a horizontal pixel position.
    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        let normalized = (time - self.range.min_time) / self.range.span();
        self.canvas.padding + normalized * self.canvas.inner_width()
    }

    /// Inverse of [`TimeScale::time_to_pixel`], used by hosts to resolve
    /// pointer positions back into timestamps.
    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.canvas.padding) / self.canvas.inner_width();
        self.range.min_time + normalized * self.range.span()
    }
}

// File: crates/radar-core/src/scale.rs
// Summary: Radial value scale mapping a data range onto [0, radius] pixels.

use crate::geometry::clamp;

/// Linear value → radius mapping, clamped to the plot circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialScale {
    pub radius: f64,
    pub vmin: f64,
    pub vmax: f64,
    // zero-width or non-finite span: every value maps to the center
    degenerate: bool,
}

impl RadialScale {
    pub fn new(radius: f64, vmin: f64, vmax: f64) -> Self {
        let span = vmax - vmin;
        let degenerate = !span.is_finite() || span == 0.0;
        if degenerate {
            log::warn!("degenerate radial range [{vmin}, {vmax}]; values collapse to the center");
        }
        Self { radius, vmin, vmax, degenerate }
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Position of `value` within the range, clamped to [0, 1].
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.degenerate {
            return 0.0;
        }
        clamp((value - self.vmin) / (self.vmax - self.vmin), 0.0, 1.0)
    }

    /// Pixel distance from the center for `value`.
    #[inline]
    pub fn to_radius(&self, value: f64) -> f64 {
        self.radius * self.normalize(value)
    }
}

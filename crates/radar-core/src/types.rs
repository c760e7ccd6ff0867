// File: crates/radar-core/src/types.rs
// Summary: Shared types and constants (margins, container sizes, hover radius).

use serde::{Deserialize, Serialize};

/// Default container width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default container height in pixels.
pub const HEIGHT: f64 = 600.0;
/// Pointer distance beyond which the nearest point no longer counts as hovered.
pub const HOVER_RADIUS: f64 = 50.0;

/// Space reserved around the plot, in pixels (CSS order: top, right, bottom, left).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Same margin on every side.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    /// Overlay the sides set in `patch`, keeping the rest.
    pub fn merged(self, patch: &MarginPatch) -> Self {
        Self {
            top: patch.top.unwrap_or(self.top),
            right: patch.right.unwrap_or(self.right),
            bottom: patch.bottom.unwrap_or(self.bottom),
            left: patch.left.unwrap_or(self.left),
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Partial margin supplied by a caller; unset sides fall back to the defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

// File: crates/radar-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, plot dimensions, polar coordinates).

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::types::Margin;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Plot area derived from a container and its margins.
///
/// `center_x`/`center_y` are relative to the margin box; placing that box at
/// (`margin.left`, `margin.top`) is up to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl ChartDimensions {
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// Usable plot size and the largest circle centered inside it.
pub fn dimensions(container_width: f64, container_height: f64, margin: &Margin) -> ChartDimensions {
    let width = container_width - margin.hsum();
    let height = container_height - margin.vsum();
    let radius = width.min(height) / 2.0;
    ChartDimensions { width, height, radius, center_x: width / 2.0, center_y: height / 2.0 }
}

/// Angle between neighbouring axes for `axis_count` equally spaced spokes.
pub fn angle_slice(axis_count: usize) -> f64 {
    if axis_count == 0 { 0.0 } else { TAU / axis_count as f64 }
}

/// Radial coordinates to screen offsets from the center.
/// Angle 0 points up (12 o'clock) and grows clockwise; screen y grows downward.
#[inline]
pub fn polar_to_cartesian(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

// File: crates/radar-core/src/radial.rs
// Summary: Closed radial line/area generators producing vertices and SVG path data.
// Notes:
// - Coordinates are offsets from the chart center; translate by the center
//   (and margin) when drawing.
// - Path data uses the compact `Mx,yLx,yZ` form.

use std::fmt::Write as _;

use crate::geometry::{polar_to_cartesian, Point};
use crate::scale::RadialScale;
use crate::series::DataPoint;

/// Closed polygon through one vertex per axis.
#[derive(Clone, Copy, Debug)]
pub struct RadialLine {
    scale: RadialScale,
    angle_slice: f64,
}

impl RadialLine {
    /// `angle_slice` is normally `2π / axis_count`.
    pub fn new(radius: f64, angle_slice: f64, min: f64, max: f64) -> Self {
        Self { scale: RadialScale::new(radius, min, max), angle_slice }
    }

    /// Vertex for the point at axis index `i`.
    #[inline]
    pub fn vertex(&self, i: usize, value: f64) -> Point {
        polar_to_cartesian(self.scale.to_radius(value), i as f64 * self.angle_slice)
    }

    pub fn vertices(&self, data: &[DataPoint]) -> Vec<Point> {
        data.iter().enumerate().map(|(i, d)| self.vertex(i, d.value)).collect()
    }

    /// Path data for the closed outline, or `None` when there is nothing to draw.
    pub fn path(&self, data: &[DataPoint]) -> Option<String> {
        if data.is_empty() {
            return None;
        }
        let mut out = String::new();
        write_closed_ring(&mut out, &self.vertices(data));
        Some(out)
    }
}

/// Filled region between the center and the value outline.
#[derive(Clone, Copy, Debug)]
pub struct RadialArea {
    line: RadialLine,
}

impl RadialArea {
    pub fn new(radius: f64, angle_slice: f64, min: f64, max: f64) -> Self {
        Self { line: RadialLine::new(radius, angle_slice, min, max) }
    }

    /// Inner radius is always zero.
    pub fn inner_radius(&self) -> f64 {
        0.0
    }

    pub fn outer_vertices(&self, data: &[DataPoint]) -> Vec<Point> {
        self.line.vertices(data)
    }

    /// Path data: the closed outer ring followed by the closed inner ring,
    /// which sits entirely on the center.
    pub fn path(&self, data: &[DataPoint]) -> Option<String> {
        if data.is_empty() {
            return None;
        }
        let mut out = String::new();
        write_closed_ring(&mut out, &self.outer_vertices(data));
        let inner: Vec<Point> = (0..data.len())
            .rev()
            .map(|i| polar_to_cartesian(self.inner_radius(), i as f64 * self.line.angle_slice))
            .collect();
        write_closed_ring(&mut out, &inner);
        Some(out)
    }
}

fn write_closed_ring(out: &mut String, pts: &[Point]) {
    for (i, p) in pts.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        // writing into a String cannot fail
        let _ = write!(out, "{cmd}{},{}", coord(p.x), coord(p.y));
    }
    if !pts.is_empty() {
        out.push('Z');
    }
}

// Folds -0.0 into 0.0 so the center prints as "0,0".
#[inline]
fn coord(v: f64) -> f64 {
    v + 0.0
}

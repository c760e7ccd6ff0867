// File: crates/radar-core/src/hit.rs
// Summary: Flattened plotted points and nearest-point hover lookup.

use crate::config::Config;
use crate::geometry::{angle_slice, ChartDimensions, Point};
use crate::radial::RadialLine;
use crate::series::{DataPoint, Series};
use crate::types::HOVER_RADIUS;

/// A drawn vertex: screen position plus the data it represents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlottedPoint<'a> {
    pub x: f64,
    pub y: f64,
    pub data_point: &'a DataPoint,
    /// Index into the series list the points were built from.
    pub series_index: usize,
}

/// Result of a hover lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<'a> {
    pub data_point: &'a DataPoint,
    /// `None` when the point's `series_index` is outside the series list.
    pub series: Option<&'a Series>,
}

/// Number of axes on the chart, taken from the first series.
pub fn axis_count(series: &[Series]) -> usize {
    series.first().map(|s| s.data.len()).unwrap_or(0)
}

/// Every vertex of every series, in series order then axis order.
///
/// Coordinates are relative to the margin box (the chart center is at
/// `dims.center_x`, `dims.center_y`), matching pointer positions measured
/// from the top-left of that box.
pub fn plot_points<'a>(series: &'a [Series], dims: &ChartDimensions, config: &Config) -> Vec<PlottedPoint<'a>> {
    let line = RadialLine::new(dims.radius, angle_slice(axis_count(series)), config.min, config.max);
    let center = dims.center();
    let mut out = Vec::with_capacity(series.iter().map(|s| s.data.len()).sum());
    for (series_index, s) in series.iter().enumerate() {
        for (i, d) in s.data.iter().enumerate() {
            let v = line.vertex(i, d.value).offset(center.x, center.y);
            out.push(PlottedPoint { x: v.x, y: v.y, data_point: d, series_index });
        }
    }
    out
}

/// Nearest plotted point to the pointer, if within [`HOVER_RADIUS`].
///
/// Ties keep the earliest point in `points` order.
pub fn find_closest<'a>(pointer_x: f64, pointer_y: f64, series: &'a [Series], points: &[PlottedPoint<'a>]) -> Option<Hit<'a>> {
    let pointer = Point::new(pointer_x, pointer_y);
    let mut min_distance = f64::INFINITY;
    let mut closest: Option<&PlottedPoint<'a>> = None;

    for p in points {
        let distance = pointer.distance(Point::new(p.x, p.y));
        if distance < min_distance {
            min_distance = distance;
            closest = Some(p);
        }
    }

    let p = closest?;
    if min_distance > HOVER_RADIUS {
        return None;
    }
    Some(Hit { data_point: p.data_point, series: series.get(p.series_index) })
}

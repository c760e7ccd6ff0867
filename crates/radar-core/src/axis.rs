// File: crates/radar-core/src/axis.rs
// Summary: Axis spoke layout: spoke end points and label anchors per axis.

use crate::geometry::{polar_to_cartesian, Point};
use crate::series::DataPoint;

/// Default label distance as a multiple of the chart radius.
pub const LABEL_FACTOR: f64 = 1.1;

/// One axis spoke, in offsets from the chart center.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpoke<'a> {
    pub label: &'a str,
    pub angle: f64,
    pub end: Point,
    pub label_anchor: Point,
    /// Whether the axis has children to drill into.
    pub drillable: bool,
}

/// Spokes for the axes of `points`, spaced by `angle_slice`.
pub fn axis_spokes<'a>(points: &'a [DataPoint], radius: f64, angle_slice: f64, label_factor: f64) -> Vec<AxisSpoke<'a>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let angle = i as f64 * angle_slice;
            AxisSpoke {
                label: p.axis.as_str(),
                angle,
                end: polar_to_cartesian(radius, angle),
                label_anchor: polar_to_cartesian(radius * label_factor, angle),
                drillable: p.is_parent(),
            }
        })
        .collect()
}

// File: crates/radar-core/src/hierarchy.rs
// Summary: Bottom-up aggregation of drill-down trees (parent value = mean of children).

use crate::series::DataPoint;

/// Aggregate `point` in place and return its resulting value.
///
/// Post-order: every child is aggregated (and its `value` overwritten) before
/// the parent takes the unweighted mean of its children. Leaves, including
/// points with an empty `children` list, keep their value.
pub fn aggregate(point: &mut DataPoint) -> f64 {
    if point.children.is_empty() {
        return point.value;
    }

    let mut sum = 0.0f64;
    for child in point.children.iter_mut() {
        child.value = aggregate(child);
        sum += child.value;
    }
    let mean = sum / point.children.len() as f64;
    point.value = mean;
    mean
}

/// Aggregate every tree rooted in `points`.
pub fn aggregate_all(points: &mut [DataPoint]) {
    for p in points.iter_mut() {
        aggregate(p);
    }
    if log::log_enabled!(log::Level::Debug) {
        let nodes: usize = points.iter().map(DataPoint::node_count).sum();
        log::debug!("aggregated {} roots ({} nodes)", points.len(), nodes);
    }
}

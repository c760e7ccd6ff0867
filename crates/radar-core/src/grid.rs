// File: crates/radar-core/src/grid.rs
// Summary: Level ring layout helpers (evenly spaced values and radii).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Value at each level ring, innermost first; the outermost ring is `max`.
pub fn level_values(min: f64, max: f64, levels: u32) -> Vec<f64> {
    if levels == 0 { return Vec::new(); }
    linspace(min, max, levels as usize + 1).into_iter().skip(1).collect()
}

/// Pixel radius of each level ring, innermost first.
pub fn level_radii(radius: f64, levels: u32) -> Vec<f64> {
    level_values(0.0, radius, levels)
}

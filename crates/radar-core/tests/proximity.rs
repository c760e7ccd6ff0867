// File: crates/radar-core/tests/proximity.rs
// Purpose: Validate nearest-point hover lookup: cutoff radius, tie order and series lookup.

use radar_core::{dimensions, find_closest, merge, plot_points, DataPoint, Margin, PlottedPoint, Series};

fn pt<'a>(x: f64, y: f64, data_point: &'a DataPoint, series_index: usize) -> PlottedPoint<'a> {
    PlottedPoint { x, y, data_point, series_index }
}

#[test]
fn no_points_no_hit() {
    let series = vec![Series::new("S", Vec::new())];
    assert!(find_closest(0.0, 0.0, &series, &[]).is_none());
}

#[test]
fn everything_too_far_is_no_hit() {
    let a = DataPoint::new("A", 1.0);
    let b = DataPoint::new("B", 2.0);
    let series = vec![Series::new("S", Vec::new())];
    let points = [pt(100.0, 100.0, &a, 0), pt(-60.0, 0.0, &b, 0)];
    assert!(find_closest(0.0, 0.0, &series, &points).is_none());
}

#[test]
fn exact_cutoff_still_counts() {
    let a = DataPoint::new("A", 1.0);
    let series = vec![Series::new("S", Vec::new())];
    let points = [pt(30.0, 40.0, &a, 0)];
    let hit = find_closest(0.0, 0.0, &series, &points).expect("distance 50 is inside");
    assert_eq!(hit.data_point.axis, "A");
    assert!(find_closest(0.0, -0.5, &series, &points).is_none());
}

#[test]
fn zero_distance_wins_over_others() {
    let near = DataPoint::new("near", 1.0);
    let on = DataPoint::new("on", 2.0);
    let series = vec![Series::new("S1", Vec::new()), Series::new("S2", Vec::new())];
    let points = [pt(11.0, 10.0, &near, 0), pt(10.0, 10.0, &on, 1), pt(500.0, 500.0, &near, 0)];
    let hit = find_closest(10.0, 10.0, &series, &points).unwrap();
    assert_eq!(hit.data_point.axis, "on");
    assert_eq!(hit.series.map(|s| s.name.as_str()), Some("S2"));
}

#[test]
fn ties_go_to_the_first_point() {
    let first = DataPoint::new("first", 1.0);
    let second = DataPoint::new("second", 2.0);
    let series = vec![Series::new("S", Vec::new())];
    let points = [pt(-5.0, 0.0, &first, 0), pt(5.0, 0.0, &second, 0)];
    assert_eq!(find_closest(0.0, 0.0, &series, &points).unwrap().data_point.axis, "first");
    let swapped = [points[1], points[0]];
    assert_eq!(find_closest(0.0, 0.0, &series, &swapped).unwrap().data_point.axis, "second");
}

#[test]
fn bad_series_index_still_returns_point() {
    let a = DataPoint::new("A", 1.0);
    let series = vec![Series::new("S", Vec::new())];
    let points = [pt(1.0, 1.0, &a, 7)];
    let hit = find_closest(0.0, 0.0, &series, &points).unwrap();
    assert_eq!(hit.data_point.axis, "A");
    assert!(hit.series.is_none());
}

#[test]
fn plotted_points_sit_on_the_chart() {
    let series = vec![
        Series::new("S1", vec![DataPoint::new("A", 100.0), DataPoint::new("B", 50.0)]),
        Series::new("S2", vec![DataPoint::new("A", 0.0), DataPoint::new("B", 100.0)]),
    ];
    let cfg = merge(None);
    let dims = dimensions(300.0, 300.0, &Margin::uniform(50.0));
    let points = plot_points(&series, &dims, &cfg);
    assert_eq!(points.len(), 4);
    assert_eq!(points.iter().map(|p| p.series_index).collect::<Vec<_>>(), vec![0, 0, 1, 1]);

    // S1/A at full value: straight up from the center (100, 100)
    assert!((points[0].x - 100.0).abs() < 1e-9 && points[0].y.abs() < 1e-9);
    // S2/A at the minimum: on the center
    assert!((points[2].x - 100.0).abs() < 1e-9 && (points[2].y - 100.0).abs() < 1e-9);

    let hit = find_closest(101.0, 2.0, &series, &points).unwrap();
    assert_eq!(hit.series.unwrap().name, "S1");
    assert_eq!(hit.data_point.value, 100.0);
}

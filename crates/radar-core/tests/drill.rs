// File: crates/radar-core/tests/drill.rs
// Purpose: Validate drill-down views built from aggregated series.

use radar_core::{drill_down, drill_path, normalize, ChartInput, DataPoint, Series};

fn team(name: &str, css: f64, rust: f64) -> Series {
    Series::new(
        name,
        vec![
            DataPoint::new("Frontend", 0.0).with_children(vec![
                DataPoint::new("CSS", css),
                DataPoint::new("Design", 0.0)
                    .with_children(vec![DataPoint::new("Color", 10.0), DataPoint::new("Type", 30.0)]),
            ]),
            DataPoint::new("Backend", 0.0).with_children(vec![DataPoint::new("Rust", rust)]),
            DataPoint::new("Ops", 50.0),
        ],
    )
}

#[test]
fn drilling_one_level_keeps_series_identity() {
    let series = normalize(ChartInput::Series(vec![team("A", 60.0, 90.0).with_color("#ff0000"), team("B", 20.0, 40.0)]));
    let view = drill_down(&series, "Frontend");
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].name, "A");
    assert_eq!(view[0].color.as_deref(), Some("#ff0000"));
    assert_eq!(view[0].data.iter().map(|p| p.axis.as_str()).collect::<Vec<_>>(), vec!["CSS", "Design"]);
    // aggregated values carry over
    assert_eq!(view[0].data[1].value, 20.0);
}

#[test]
fn leaf_axes_and_unknown_axes_yield_nothing() {
    let series = normalize(ChartInput::Series(vec![team("A", 60.0, 90.0)]));
    assert!(drill_down(&series, "Ops").is_empty());
    assert!(drill_down(&series, "Nope").is_empty());
}

#[test]
fn trail_descends_several_levels() {
    let series = normalize(ChartInput::Series(vec![team("A", 60.0, 90.0)]));
    let view = drill_path(&series, &["Frontend", "Design"]);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].data.len(), 2);
    assert_eq!(view[0].data[0].axis, "Color");

    let root = drill_path::<&str>(&series, &[]);
    assert_eq!(root, series);
    assert!(drill_path(&series, &["Ops", "Frontend"]).is_empty());
}

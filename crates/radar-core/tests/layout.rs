// File: crates/radar-core/tests/layout.rs
// Purpose: End-to-end check of the RadarChart facade: normalize, merge, lay out, hit-test.

use radar_core::config::DEFAULT_COLOR;
use radar_core::theme::CATEGORY10;
use radar_core::types::{HEIGHT, WIDTH};
use radar_core::{ChartInput, ConfigPatch, DataPoint, RadarChart, Series};

fn points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Speed", 80.0),
        DataPoint::new("Power", 0.0).with_children(vec![DataPoint::new("Lift", 40.0), DataPoint::new("Push", 60.0)]),
        DataPoint::new("Range", 30.0),
    ]
}

#[test]
fn single_series_layout() {
    let chart = RadarChart::new(points().into(), None);
    assert_eq!(chart.series[0].data[1].value, 50.0);

    let layout = chart.layout(300.0, 300.0);
    assert_eq!(layout.dimensions.radius, 100.0);
    assert_eq!(layout.levels.len(), 5);
    assert_eq!(layout.levels[4].value, 100.0);
    assert_eq!(layout.levels[4].radius, 100.0);
    assert_eq!(layout.spokes.len(), 3);
    assert_eq!(layout.shapes.len(), 1);

    let shape = &layout.shapes[0];
    assert_eq!(shape.name, "Default");
    assert_eq!(shape.color, DEFAULT_COLOR);
    assert_eq!(shape.opacity, 0.5);
    assert_eq!(shape.vertices.len(), 3);
    assert!(shape.line_path.as_deref().unwrap().starts_with("M0,-80L"));
    assert!(shape.area_path.is_some());
    assert_eq!(layout.points.len(), 3);
}

#[test]
fn lone_series_with_empty_color_takes_config_color() {
    let blank = RadarChart::new(ChartInput::Series(vec![Series::new("Only", points()).with_color("")]), None);
    assert_eq!(blank.layout(WIDTH, HEIGHT).shapes[0].color, DEFAULT_COLOR);

    let own = RadarChart::new(ChartInput::Series(vec![Series::new("Only", points()).with_color("#000000")]), None);
    assert_eq!(own.layout(WIDTH, HEIGHT).shapes[0].color, "#000000");
}

#[test]
fn multi_series_uses_palette_and_patch() {
    let input = ChartInput::Series(vec![
        Series::new("Mine", points()),
        Series::new("Theirs", points()).with_opacity(0.2),
        Series::new("Ref", points()).with_color("#000000"),
    ]);
    let patch = ConfigPatch { max: Some(200.0), levels: Some(4), ..Default::default() };
    let chart = RadarChart::new(input, Some(&patch));
    let layout = chart.layout(WIDTH, HEIGHT);

    assert_eq!(layout.shapes[0].color, CATEGORY10[0]);
    assert_eq!(layout.shapes[1].color, CATEGORY10[1]);
    assert_eq!(layout.shapes[1].opacity, 0.2);
    assert_eq!(layout.shapes[2].color, "#000000");
    assert_eq!(layout.levels.iter().map(|l| l.value).collect::<Vec<_>>(), vec![50.0, 100.0, 150.0, 200.0]);
    assert_eq!(layout.points.len(), 9);
}

#[test]
fn hover_uses_margin_box_coordinates() {
    let chart = RadarChart::new(points().into(), None);
    let layout = chart.layout(300.0, 300.0);
    // Speed = 80 sits 80px above the center (100, 100)
    let hit = layout.hit(100.0, 22.0).expect("near Speed");
    assert_eq!(hit.data_point.axis, "Speed");
    assert_eq!(hit.series.map(|s| s.name.as_str()), Some("Default"));
    assert!(layout.hit(-200.0, -200.0).is_none());
}

#[test]
fn empty_chart_lays_out_without_shapes() {
    let chart = RadarChart::new(ChartInput::default(), None);
    assert!(chart.is_empty());
    let layout = chart.layout(300.0, 300.0);
    assert!(layout.shapes.is_empty() && layout.points.is_empty() && layout.spokes.is_empty());
    assert_eq!(layout.angle_slice, 0.0);
    assert!(layout.hit(100.0, 100.0).is_none());
}

#[test]
fn drilled_chart_shows_children() {
    let chart = RadarChart::new(points().into(), None);
    let sub = chart.drilled(&["Power"]);
    let layout = sub.layout(300.0, 300.0);
    assert_eq!(layout.spokes.iter().map(|s| s.label).collect::<Vec<_>>(), vec!["Lift", "Push"]);
    assert_eq!(sub.config, chart.config);
}

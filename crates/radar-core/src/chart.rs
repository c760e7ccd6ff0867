// File: crates/radar-core/src/chart.rs
// Summary: RadarChart facade: normalized data + merged config in, renderer-agnostic layout out.

use crate::axis::{axis_spokes, AxisSpoke, LABEL_FACTOR};
use crate::config::{merge, Config, ConfigPatch};
use crate::drill::drill_path;
use crate::geometry::{angle_slice, dimensions, ChartDimensions, Point};
use crate::grid::{level_radii, level_values};
use crate::hit::{axis_count, find_closest, plot_points, Hit, PlottedPoint};
use crate::radial::{RadialArea, RadialLine};
use crate::series::{normalize, ChartInput, Series};
use crate::theme::ColorScale;

/// A concentric level ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelRing {
    pub value: f64,
    pub radius: f64,
}

/// Everything needed to draw one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesShape<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub opacity: f64,
    pub vertices: Vec<Point>,
    pub line_path: Option<String>,
    pub area_path: Option<String>,
}

/// Geometry for one render pass. Shape, ring and spoke coordinates are
/// offsets from the chart center; plotted points are in margin-box space.
#[derive(Clone, Debug)]
pub struct RadarLayout<'a> {
    pub dimensions: ChartDimensions,
    pub angle_slice: f64,
    pub levels: Vec<LevelRing>,
    pub spokes: Vec<AxisSpoke<'a>>,
    pub shapes: Vec<SeriesShape<'a>>,
    pub points: Vec<PlottedPoint<'a>>,
    series: &'a [Series],
}

impl<'a> RadarLayout<'a> {
    /// Hover lookup against this layout's plotted points.
    pub fn hit(&self, pointer_x: f64, pointer_y: f64) -> Option<Hit<'a>> {
        find_closest(pointer_x, pointer_y, self.series, &self.points)
    }
}

/// Normalized, aggregated chart data with its resolved configuration.
#[derive(Clone, Debug)]
pub struct RadarChart {
    pub series: Vec<Series>,
    pub config: Config,
}

impl RadarChart {
    pub fn new(input: ChartInput, patch: Option<&ConfigPatch>) -> Self {
        Self { series: normalize(input), config: merge(patch) }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Chart for the drill-down view below `trail`, sharing this chart's config.
    pub fn drilled<S: AsRef<str>>(&self, trail: &[S]) -> RadarChart {
        RadarChart { series: drill_path(&self.series, trail), config: self.config.clone() }
    }

    /// Lay the chart out in a container of the given pixel size.
    pub fn layout(&self, container_width: f64, container_height: f64) -> RadarLayout<'_> {
        let cfg = &self.config;
        let dims = dimensions(container_width, container_height, &cfg.margin);
        let slice = angle_slice(axis_count(&self.series));

        let levels = level_values(cfg.min, cfg.max, cfg.levels)
            .into_iter()
            .zip(level_radii(dims.radius, cfg.levels))
            .map(|(value, radius)| LevelRing { value, radius })
            .collect();

        let spokes = match self.series.first() {
            Some(s) => axis_spokes(&s.data, dims.radius, slice, LABEL_FACTOR),
            None => Vec::new(),
        };

        let line = RadialLine::new(dims.radius, slice, cfg.min, cfg.max);
        let area = RadialArea::new(dims.radius, slice, cfg.min, cfg.max);
        let colors = ColorScale::new(&self.series);
        let single = self.series.len() == 1;
        let shapes = self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                // a lone series without its own color takes the configured accent
                let own = s.color.as_deref().filter(|c| !c.is_empty());
                let color = if single && own.is_none() { cfg.color.as_str() } else { colors.color(i) };
                SeriesShape {
                    name: s.name.as_str(),
                    color,
                    opacity: s.opacity.unwrap_or(cfg.opacity),
                    vertices: line.vertices(&s.data),
                    line_path: line.path(&s.data),
                    area_path: area.path(&s.data),
                }
            })
            .collect();

        log::debug!(
            "layout {}x{}: radius {:.1}, {} series, {} axes",
            container_width,
            container_height,
            dims.radius,
            self.series.len(),
            axis_count(&self.series)
        );

        RadarLayout {
            dimensions: dims,
            angle_slice: slice,
            levels,
            spokes,
            shapes,
            points: plot_points(&self.series, &dims, cfg),
            series: &self.series,
        }
    }
}

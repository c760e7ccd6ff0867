// File: crates/radar-core/src/lib.rs
// Summary: Core library entry point; exports the radar chart data, geometry and hit-testing API.

pub mod axis;
pub mod chart;
pub mod config;
pub mod drill;
pub mod geometry;
pub mod grid;
pub mod hierarchy;
pub mod hit;
pub mod radial;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use axis::AxisSpoke;
pub use chart::{LevelRing, RadarChart, RadarLayout, SeriesShape};
pub use config::{merge, Config, ConfigError, ConfigPatch};
pub use drill::{drill_down, drill_path};
pub use geometry::{dimensions, ChartDimensions, Point};
pub use hierarchy::{aggregate, aggregate_all};
pub use hit::{find_closest, plot_points, Hit, PlottedPoint};
pub use radial::{RadialArea, RadialLine};
pub use scale::RadialScale;
pub use series::{normalize, ChartInput, DataPoint, Series};
pub use theme::{ColorScale, Rgba};
pub use types::{Margin, MarginPatch};

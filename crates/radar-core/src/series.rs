// File: crates/radar-core/src/series.rs
// Summary: Data model (hierarchical data points, named series) and input shape normalization.
// Notes:
// - Field names serialize in camelCase so payloads produced by a JS front end
//   deserialize unchanged.
// - `ChartInput` decides the input shape once at the boundary; nothing below
//   it re-inspects the structure.

use serde::{Deserialize, Serialize};

use crate::hierarchy::aggregate_all;

/// Name given to the synthetic series wrapping a flat list of points.
pub const DEFAULT_SERIES_NAME: &str = "Default";

/// One axis value, optionally the parent of a drill-down subtree.
///
/// After aggregation a parent's `value` is the mean of its children's values;
/// whatever value the caller supplied for it is discarded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub axis: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DataPoint>,
}

impl DataPoint {
    pub fn new(axis: impl Into<String>, value: f64) -> Self {
        Self {
            axis: axis.into(),
            value,
            description: None,
            rationale: None,
            primary: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<DataPoint>) -> Self {
        self.children = children;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = Some(primary);
        self
    }

    /// True when the point has children to drill into. An empty list counts as none.
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, the point itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DataPoint::node_count).sum::<usize>()
    }
}

/// A named overlay of values across the chart's axes, drawn as one closed polygon.
///
/// Names are unique by convention only. Axis alignment across series is assumed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    pub data: Vec<DataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self { name: name.into(), data, color: None, opacity: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Axis labels in plotting order.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|p| p.axis.as_str())
    }
}

/// Raw chart input: either a flat list of points or a list of named series.
///
/// Deserializing from JSON tries the series shape first (objects carrying
/// `name` and `data`) and falls back to points. An empty array is an empty
/// series list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartInput {
    Series(Vec<Series>),
    Points(Vec<DataPoint>),
}

impl ChartInput {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartInput::Series(s) => s.is_empty(),
            ChartInput::Points(p) => p.is_empty(),
        }
    }
}

impl Default for ChartInput {
    fn default() -> Self {
        ChartInput::Points(Vec::new())
    }
}

impl From<Vec<DataPoint>> for ChartInput {
    fn from(points: Vec<DataPoint>) -> Self { ChartInput::Points(points) }
}

impl From<Vec<Series>> for ChartInput {
    fn from(series: Vec<Series>) -> Self { ChartInput::Series(series) }
}

/// Coerce any input into a list of series with every tree fully aggregated.
///
/// Flat points become a single series named [`DEFAULT_SERIES_NAME`]; series
/// input comes back as given apart from aggregated values. Empty input yields
/// an empty list.
pub fn normalize(input: ChartInput) -> Vec<Series> {
    match input {
        ChartInput::Points(mut points) => {
            if points.is_empty() {
                return Vec::new();
            }
            aggregate_all(&mut points);
            log::debug!("normalized {} flat points into series '{}'", points.len(), DEFAULT_SERIES_NAME);
            vec![Series::new(DEFAULT_SERIES_NAME, points)]
        }
        ChartInput::Series(mut series) => {
            for s in series.iter_mut() {
                aggregate_all(&mut s.data);
            }
            log::debug!("normalized {} series", series.len());
            series
        }
    }
}

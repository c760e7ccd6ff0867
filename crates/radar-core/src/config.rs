// File: crates/radar-core/src/config.rs
// Summary: Chart configuration, partial overrides, default merging and optional validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Margin, MarginPatch};

/// Default accent color for single-series charts.
pub const DEFAULT_COLOR: &str = "#2196F3";

/// Fully defaulted chart configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub min: f64,
    pub max: f64,
    /// Number of concentric level rings.
    pub levels: u32,
    pub color: String,
    /// Fill opacity, 0..=1.
    pub opacity: f64,
    pub stroke_width: f64,
    /// Milliseconds.
    pub animation_duration: u64,
    pub show_axis_labels: bool,
    pub show_axis_lines: bool,
    pub show_level_labels: bool,
    pub interactive: bool,
    pub margin: Margin,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            levels: 5,
            color: DEFAULT_COLOR.to_string(),
            opacity: 0.5,
            stroke_width: 2.0,
            animation_duration: 500,
            show_axis_labels: true,
            show_axis_lines: true,
            show_level_labels: true,
            interactive: true,
            margin: Margin::default(),
        }
    }
}

/// Caller-supplied partial configuration. Unset fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigPatch {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub levels: Option<u32>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    pub stroke_width: Option<f64>,
    pub animation_duration: Option<u64>,
    pub show_axis_labels: Option<bool>,
    pub show_axis_lines: Option<bool>,
    pub show_level_labels: Option<bool>,
    pub interactive: Option<bool>,
    pub margin: Option<MarginPatch>,
}

/// Problems `Config::validate` can report. `merge` never produces them on its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("value range is empty: min and max are both {value}")]
    EmptyRange { value: f64 },
    #[error("value range is inverted: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("value range bounds must be finite (min {min}, max {max})")]
    NonFiniteBound { min: f64, max: f64 },
    #[error("at least one level ring is required")]
    ZeroLevels,
    #[error("opacity {0} is outside 0..=1")]
    InvalidOpacity(f64),
    #[error("{side} margin is negative ({value})")]
    NegativeMargin { side: &'static str, value: f64 },
}

impl Config {
    /// Overlay `patch` on this configuration. The margin is merged side by side.
    pub fn with_patch(self, patch: &ConfigPatch) -> Self {
        let margin = match &patch.margin {
            Some(m) => self.margin.merged(m),
            None => self.margin,
        };
        Self {
            min: patch.min.unwrap_or(self.min),
            max: patch.max.unwrap_or(self.max),
            levels: patch.levels.unwrap_or(self.levels),
            color: patch.color.clone().unwrap_or(self.color),
            opacity: patch.opacity.unwrap_or(self.opacity),
            stroke_width: patch.stroke_width.unwrap_or(self.stroke_width),
            animation_duration: patch.animation_duration.unwrap_or(self.animation_duration),
            show_axis_labels: patch.show_axis_labels.unwrap_or(self.show_axis_labels),
            show_axis_lines: patch.show_axis_lines.unwrap_or(self.show_axis_lines),
            show_level_labels: patch.show_level_labels.unwrap_or(self.show_level_labels),
            interactive: patch.interactive.unwrap_or(self.interactive),
            margin,
        }
    }

    /// Check ranges the geometry relies on. Rendering does not require this to pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min, self.max);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBound { min, max });
        }
        if min == max {
            return Err(ConfigError::EmptyRange { value: min });
        }
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        if self.levels == 0 {
            return Err(ConfigError::ZeroLevels);
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidOpacity(self.opacity));
        }
        let m = &self.margin;
        for (side, value) in [("top", m.top), ("right", m.right), ("bottom", m.bottom), ("left", m.left)] {
            if value < 0.0 {
                return Err(ConfigError::NegativeMargin { side, value });
            }
        }
        Ok(())
    }
}

/// Build a complete configuration from optional partial input.
///
/// Without a patch this is a fresh copy of [`Config::default`]; callers own
/// the result and may mutate it freely.
pub fn merge(patch: Option<&ConfigPatch>) -> Config {
    match patch {
        Some(p) => Config::default().with_patch(p),
        None => Config::default(),
    }
}

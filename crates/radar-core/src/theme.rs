// File: crates/radar-core/src/theme.rs
// Summary: Series color assignment (ordinal Category10 palette) and hex color parsing.

use thiserror::Error;

use crate::series::Series;

/// Ten-color categorical palette, assigned to series names in order of first appearance.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#bcbd22", // olive
    "#17becf", // cyan
];

/// Maps series indices to display colors.
///
/// An explicit, non-empty `Series::color` always wins. Otherwise the color is
/// picked by the series name's position among the distinct names, wrapping
/// after ten. Series sharing a name share a color.
#[derive(Clone, Debug)]
pub struct ColorScale<'a> {
    series: &'a [Series],
    domain: Vec<&'a str>,
}

impl<'a> ColorScale<'a> {
    pub fn new(series: &'a [Series]) -> Self {
        let mut domain: Vec<&'a str> = Vec::new();
        for s in series {
            if !domain.contains(&s.name.as_str()) {
                domain.push(s.name.as_str());
            }
        }
        Self { series, domain }
    }

    /// Distinct series names in palette order.
    pub fn domain(&self) -> &[&'a str] {
        &self.domain
    }

    /// Palette color for `name`; unknown names get [`ColorScale::fallback`].
    pub fn palette_color(&self, name: &str) -> &'static str {
        match self.domain.iter().position(|n| *n == name) {
            Some(i) => CATEGORY10[i % CATEGORY10.len()],
            None => self.fallback(),
        }
    }

    /// Color the palette would hand to the next unseen name.
    pub fn fallback(&self) -> &'static str {
        CATEGORY10[self.domain.len() % CATEGORY10.len()]
    }

    /// Color for the series at `index`. Out-of-range indices get the fallback.
    pub fn color(&self, index: usize) -> &'a str {
        let series: &'a [Series] = self.series;
        match series.get(index) {
            Some(s) => match s.color.as_deref() {
                Some(c) if !c.is_empty() => c,
                _ => self.palette_color(&s.name),
            },
            None => self.fallback(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive), fully opaque.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.strip_prefix('#').ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
        match hex.len() {
            3 => Ok(Self::from_rgba(digit(0) * 17, digit(1) * 17, digit(2) * 17, 255)),
            6 => {
                let byte = |i: usize| digit(i) * 16 + digit(i + 1);
                Ok(Self::from_rgba(byte(0), byte(2), byte(4), 255))
            }
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }

    /// Same color with alpha set from an opacity in 0..=1 (clamped).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` notation with alpha in 0..=1.
    pub fn to_css(&self) -> String {
        let alpha = self.a as f64 / 255.0;
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
    }
}

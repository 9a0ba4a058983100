//! Chart model types
//!
//! This module defines the data structures for a radar (spider) chart:
//! indicators, data series, and colors.

use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// RGBA color representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (fully opaque)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Convert to CSS color string
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }

    /// Same color with alpha given as a 0.0..=1.0 fraction
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self::rgba(self.r, self.g, self.b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    // Predefined colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// One axis of a radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarIndicator {
    /// Axis label
    pub name: String,
    /// Value at the outer ring
    pub max: f64,
}

impl RadarIndicator {
    pub fn new(name: impl Into<String>, max: f64) -> Self {
        Self {
            name: name.into(),
            max,
        }
    }
}

/// A closed polygon of values, one per indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    /// Name of the series
    pub name: String,
    /// Values in indicator order
    pub values: Vec<f64>,
    /// Outline color
    pub line_color: Color,
    /// Optional translucent fill of the enclosed area
    pub area_color: Option<Color>,
}

impl RadarSeries {
    /// Create a new series with a name and values
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            line_color: Color::rgb(79, 129, 189),
            area_color: None,
        }
    }

    /// Set the outline color
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Fill the enclosed area
    pub fn with_area_color(mut self, color: Color) -> Self {
        self.area_color = Some(color);
        self
    }
}

/// A complete radar chart definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    /// Axes, clockwise from the top
    pub indicators: Vec<RadarIndicator>,
    /// Data series drawn over the axes
    pub series: Vec<RadarSeries>,
    /// Outer radius as a fraction of half the shorter surface side
    pub radius_ratio: f64,
    /// Number of concentric split rings
    pub split_number: usize,
    /// Whether transitions are animated (render output is identical either way)
    pub animation: bool,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self {
            indicators: Vec::new(),
            series: Vec::new(),
            radius_ratio: 0.65,
            split_number: 5,
            animation: false,
        }
    }
}

impl RadarChart {
    /// Create an empty radar chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis
    pub fn with_indicator(mut self, indicator: RadarIndicator) -> Self {
        self.indicators.push(indicator);
        self
    }

    /// Add a data series
    pub fn add_series(&mut self, series: RadarSeries) {
        self.series.push(series);
    }

    /// Whether there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Check that every series matches the indicators
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(bad) = self.indicators.iter().find(|i| !(i.max > 0.0)) {
            return Err(ChartError::InvalidData(format!(
                "indicator {:?} has non-positive max {}",
                bad.name, bad.max
            )));
        }

        for series in &self.series {
            if series.values.len() != self.indicators.len() {
                return Err(ChartError::InvalidData(format!(
                    "series {:?} has {} values for {} indicators",
                    series.name,
                    series.values.len(),
                    self.indicators.len()
                )));
            }
            if series.values.iter().any(|v| !v.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series {:?} contains a non-finite value",
                    series.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_chart() -> RadarChart {
        let mut chart = RadarChart::new()
            .with_indicator(RadarIndicator::new("Rust", 100.0))
            .with_indicator(RadarIndicator::new("SQL", 100.0))
            .with_indicator(RadarIndicator::new("Go", 100.0));
        chart.add_series(RadarSeries::new("Skills", vec![90.0, 60.0, 30.0]));
        chart
    }

    #[test]
    fn test_color_hex_round_trip() {
        let color = Color::from_hex("#409EFF").unwrap();
        assert_eq!(color, Color::rgb(0x40, 0x9E, 0xFF));
        assert_eq!(color.to_hex(), "409EFF");
        assert!(Color::from_hex("#12").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
    }

    #[test]
    fn test_color_with_alpha_css() {
        let color = Color::rgb(64, 158, 255).with_alpha(0.6);
        assert_eq!(color.a, 153);
        assert_eq!(color.to_css(), "rgba(64, 158, 255, 0.600)");
    }

    #[test]
    fn test_validate_ok() {
        assert!(skills_chart().validate().is_ok());
    }

    #[test]
    fn test_validate_length_mismatch() {
        let mut chart = skills_chart();
        chart.add_series(RadarSeries::new("Short", vec![1.0]));
        assert!(matches!(chart.validate(), Err(ChartError::InvalidData(_))));
    }

    #[test]
    fn test_validate_rejects_zero_max() {
        let chart = RadarChart::new().with_indicator(RadarIndicator::new("x", 0.0));
        assert!(chart.validate().is_err());
    }

    #[test]
    fn test_defaults_match_skill_chart() {
        let chart = RadarChart::new();
        assert_eq!(chart.radius_ratio, 0.65);
        assert!(!chart.animation);
        assert!(chart.is_empty());
    }
}

//! Radar chart layout calculations
//!
//! This module turns a [`RadarChart`] and a surface size into concrete
//! positions: the center, one axis per indicator, concentric split rings,
//! and one polygon per series.

use crate::error::{ChartError, ChartResult};
use crate::model::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A rectangle in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Shrink the rectangle by the given padding
    pub fn inset(&self, padding: f64) -> Self {
        Self {
            x: self.x + padding,
            y: self.y + padding,
            width: (self.width - 2.0 * padding).max(0.0),
            height: (self.height - 2.0 * padding).max(0.0),
        }
    }

    /// Whether a point lies inside (edges inclusive)
    pub fn contains(&self, point: LayoutPoint) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// A point in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along `angle` (radians, y down)
    pub fn polar(&self, angle: f64, radius: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    pub fn distance_to(&self, other: LayoutPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One axis spoke with its label anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxisLayout {
    pub label: String,
    pub angle: f64,
    /// Outer end of the spoke
    pub end: LayoutPoint,
    /// Where the label is drawn, just beyond the spoke
    pub label_position: LayoutPoint,
}

/// Polygon for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeriesLayout {
    pub series_index: usize,
    pub points: Vec<LayoutPoint>,
}

/// Computed layout for a whole radar chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarLayout {
    /// Full surface bounds
    pub bounds: LayoutRect,
    pub center: LayoutPoint,
    pub radius: f64,
    pub axes: Vec<RadarAxisLayout>,
    /// Concentric rings, innermost first; each has one vertex per axis
    pub rings: Vec<Vec<LayoutPoint>>,
    pub series: Vec<RadarSeriesLayout>,
}

/// Distance between the spoke tip and its label
const LABEL_GAP: f64 = 12.0;

/// Radar layout calculator
pub struct RadarLayoutCalculator {
    /// Surface width in pixels
    width: f64,
    /// Surface height in pixels
    height: f64,
}

impl RadarLayoutCalculator {
    /// Create a calculator for a surface of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Angle of axis `index` out of `count`, starting at 12 o'clock and going clockwise
    pub fn axis_angle(index: usize, count: usize) -> f64 {
        (index as f64) * 2.0 * PI / (count as f64) - PI / 2.0
    }

    /// Calculate the full layout
    pub fn calculate(&self, chart: &RadarChart) -> ChartResult<RadarLayout> {
        chart.validate()?;
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ChartError::Layout(format!(
                "surface has no area ({}x{})",
                self.width, self.height
            )));
        }

        let bounds = LayoutRect::new(0.0, 0.0, self.width, self.height);
        let center = LayoutPoint::new(bounds.center_x(), bounds.center_y());
        let radius = self.width.min(self.height) / 2.0 * chart.radius_ratio;
        let count = chart.indicators.len();

        let mut layout = RadarLayout {
            bounds,
            center,
            radius,
            ..Default::default()
        };

        if count == 0 {
            return Ok(layout);
        }

        layout.axes = chart
            .indicators
            .iter()
            .enumerate()
            .map(|(i, indicator)| {
                let angle = Self::axis_angle(i, count);
                RadarAxisLayout {
                    label: indicator.name.clone(),
                    angle,
                    end: center.polar(angle, radius),
                    label_position: center.polar(angle, radius + LABEL_GAP),
                }
            })
            .collect();

        let splits = chart.split_number.max(1);
        layout.rings = (1..=splits)
            .map(|step| {
                let ring_radius = radius * step as f64 / splits as f64;
                layout
                    .axes
                    .iter()
                    .map(|axis| center.polar(axis.angle, ring_radius))
                    .collect()
            })
            .collect();

        layout.series = chart
            .series
            .iter()
            .enumerate()
            .map(|(series_index, series)| {
                let points = series
                    .values
                    .iter()
                    .zip(&chart.indicators)
                    .zip(&layout.axes)
                    .map(|((value, indicator), axis)| {
                        let fraction = value.clamp(0.0, indicator.max) / indicator.max;
                        center.polar(axis.angle, radius * fraction)
                    })
                    .collect();
                RadarSeriesLayout {
                    series_index,
                    points,
                }
            })
            .collect();

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chart(values: Vec<f64>) -> RadarChart {
        let mut chart = RadarChart::new();
        for i in 0..values.len() {
            chart = chart.with_indicator(RadarIndicator::new(format!("axis{}", i), 100.0));
        }
        chart.add_series(RadarSeries::new("Skills", values));
        chart
    }

    #[test]
    fn test_first_axis_points_up() {
        let layout = RadarLayoutCalculator::new(400.0, 300.0)
            .calculate(&chart(vec![50.0, 50.0, 50.0, 50.0]))
            .unwrap();

        assert_eq!(layout.center, LayoutPoint::new(200.0, 150.0));
        assert!((layout.radius - 97.5).abs() < 1e-9);
        let top = layout.axes[0].end;
        assert!((top.x - 200.0).abs() < 1e-9);
        assert!((top.y - 52.5).abs() < 1e-9);
        // Clockwise: second of four axes points right
        assert!(layout.axes[1].end.x > 200.0);
    }

    #[test]
    fn test_rings_and_series_shape() {
        let layout = RadarLayoutCalculator::new(300.0, 300.0)
            .calculate(&chart(vec![100.0, 0.0, 50.0]))
            .unwrap();

        assert_eq!(layout.rings.len(), 5);
        assert!(layout.rings.iter().all(|ring| ring.len() == 3));
        let points = &layout.series[0].points;
        assert!((points[0].distance_to(layout.center) - layout.radius).abs() < 1e-9);
        assert!(points[1].distance_to(layout.center) < 1e-9);
        assert!((points[2].distance_to(layout.center) - layout.radius / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_values_outside_range_are_clamped() {
        let layout = RadarLayoutCalculator::new(200.0, 200.0)
            .calculate(&chart(vec![250.0, -10.0, 40.0]))
            .unwrap();
        let points = &layout.series[0].points;
        assert!((points[0].distance_to(layout.center) - layout.radius).abs() < 1e-9);
        assert!(points[1].distance_to(layout.center) < 1e-9);
    }

    #[test]
    fn test_empty_chart_has_no_axes() {
        let layout = RadarLayoutCalculator::new(200.0, 200.0)
            .calculate(&RadarChart::new())
            .unwrap();
        assert!(layout.axes.is_empty());
        assert!(layout.rings.is_empty());
    }

    #[test]
    fn test_zero_size_surface_is_rejected() {
        let result = RadarLayoutCalculator::new(0.0, 300.0).calculate(&chart(vec![1.0]));
        assert!(matches!(result, Err(ChartError::Layout(_))));
    }

    proptest! {
        #[test]
        fn series_points_stay_within_radius(values in proptest::collection::vec(-50.0f64..200.0, 1..10)) {
            let layout = RadarLayoutCalculator::new(500.0, 300.0).calculate(&chart(values)).unwrap();
            for point in &layout.series[0].points {
                prop_assert!(point.distance_to(layout.center) <= layout.radius + 1e-9);
            }
        }
    }
}

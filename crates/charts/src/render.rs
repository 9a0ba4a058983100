//! Chart rendering
//!
//! This module renders a laid-out radar chart to render primitives.
//! A [`RenderedChart`] serializes to SVG, which the export rasterizer draws.

use crate::error::ChartResult;
use crate::layout::*;
use crate::model::*;
use serde::{Deserialize, Serialize};

/// A render primitive for chart elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChartRenderPrimitive {
    /// A filled rectangle
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
    },
    /// A line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Color,
        stroke_width: f64,
    },
    /// A polygon (closed shape)
    Polygon {
        points: Vec<(f64, f64)>,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    },
    /// A circle
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Color,
    },
    /// Text
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        fill: Color,
        anchor: TextAnchor,
        baseline: TextBaseline,
    },
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Text baseline position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// Rendered chart output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChart {
    /// Width of the chart
    pub width: f64,
    /// Height of the chart
    pub height: f64,
    /// Render primitives, back to front
    pub primitives: Vec<ChartRenderPrimitive>,
}

impl RenderedChart {
    /// Serialize to a standalone SVG document in chart coordinates
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        svg.push('\n');

        for primitive in &self.primitives {
            svg.push_str(&primitive_to_svg(primitive));
            svg.push('\n');
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Chart renderer
pub struct ChartRenderer {
    /// Background color
    pub background_color: Option<Color>,
    /// Split ring and spoke color
    pub grid_color: Color,
    /// Axis label color
    pub label_color: Color,
    /// Axis label size
    pub label_font_size: f64,
    /// Outline width of series polygons
    pub series_line_width: f64,
    /// Radius of the vertex markers
    pub marker_radius: f64,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            background_color: None,
            grid_color: Color::rgb(204, 204, 204),
            label_color: Color::rgb(51, 51, 51),
            label_font_size: 12.0,
            series_line_width: 2.0,
            marker_radius: 2.5,
        }
    }
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out and render a chart on a surface of the given size
    pub fn render(&self, chart: &RadarChart, width: f64, height: f64) -> ChartResult<RenderedChart> {
        let layout = RadarLayoutCalculator::new(width, height).calculate(chart)?;
        Ok(self.render_layout(chart, &layout))
    }

    /// Render an already computed layout
    pub fn render_layout(&self, chart: &RadarChart, layout: &RadarLayout) -> RenderedChart {
        let mut primitives = Vec::new();

        if let Some(bg) = self.background_color {
            primitives.push(ChartRenderPrimitive::Rect {
                x: layout.bounds.x,
                y: layout.bounds.y,
                width: layout.bounds.width,
                height: layout.bounds.height,
                fill: bg,
            });
        }

        self.render_grid(&mut primitives, layout);
        self.render_series(&mut primitives, chart, layout);
        self.render_labels(&mut primitives, layout);

        RenderedChart {
            width: layout.bounds.width,
            height: layout.bounds.height,
            primitives,
        }
    }

    fn render_grid(&self, primitives: &mut Vec<ChartRenderPrimitive>, layout: &RadarLayout) {
        for ring in &layout.rings {
            primitives.push(ChartRenderPrimitive::Polygon {
                points: ring.iter().map(|p| (p.x, p.y)).collect(),
                fill: None,
                stroke: Some(self.grid_color),
                stroke_width: 1.0,
            });
        }

        for axis in &layout.axes {
            primitives.push(ChartRenderPrimitive::Line {
                x1: layout.center.x,
                y1: layout.center.y,
                x2: axis.end.x,
                y2: axis.end.y,
                stroke: self.grid_color,
                stroke_width: 1.0,
            });
        }
    }

    fn render_series(
        &self,
        primitives: &mut Vec<ChartRenderPrimitive>,
        chart: &RadarChart,
        layout: &RadarLayout,
    ) {
        for series_layout in &layout.series {
            let Some(series) = chart.series.get(series_layout.series_index) else {
                continue;
            };

            primitives.push(ChartRenderPrimitive::Polygon {
                points: series_layout.points.iter().map(|p| (p.x, p.y)).collect(),
                fill: series.area_color,
                stroke: Some(series.line_color),
                stroke_width: self.series_line_width,
            });

            for point in &series_layout.points {
                primitives.push(ChartRenderPrimitive::Circle {
                    cx: point.x,
                    cy: point.y,
                    r: self.marker_radius,
                    fill: series.line_color,
                });
            }
        }
    }

    fn render_labels(&self, primitives: &mut Vec<ChartRenderPrimitive>, layout: &RadarLayout) {
        for axis in &layout.axes {
            let (dx, dy) = (axis.angle.cos(), axis.angle.sin());
            let anchor = if dx > 0.1 {
                TextAnchor::Start
            } else if dx < -0.1 {
                TextAnchor::End
            } else {
                TextAnchor::Middle
            };
            let baseline = if dy > 0.1 {
                TextBaseline::Top
            } else if dy < -0.1 {
                TextBaseline::Bottom
            } else {
                TextBaseline::Middle
            };

            primitives.push(ChartRenderPrimitive::Text {
                x: axis.label_position.x,
                y: axis.label_position.y,
                text: axis.label.clone(),
                font_size: self.label_font_size,
                fill: self.label_color,
                anchor,
                baseline,
            });
        }
    }
}

/// `fill="#RRGGBB"` plus an opacity attribute when the color is translucent
fn paint(attr: &str, color: &Color) -> String {
    let mut out = format!(r##"{}="#{:02X}{:02X}{:02X}""##, attr, color.r, color.g, color.b);
    if color.a != 255 {
        out.push_str(&format!(r#" {}-opacity="{:.3}""#, attr, f64::from(color.a) / 255.0));
    }
    out
}

fn primitive_to_svg(primitive: &ChartRenderPrimitive) -> String {
    match primitive {
        ChartRenderPrimitive::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
            x,
            y,
            width,
            height,
            paint("fill", fill)
        ),
        ChartRenderPrimitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}"/>"#,
            x1,
            y1,
            x2,
            y2,
            paint("stroke", stroke),
            stroke_width
        ),
        ChartRenderPrimitive::Polygon {
            points,
            fill,
            stroke,
            stroke_width,
        } => {
            let points_str = points
                .iter()
                .map(|(x, y)| format!("{},{}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            let fill_attr = match fill {
                Some(c) => paint("fill", c),
                None => r#"fill="none""#.to_string(),
            };
            let mut svg = format!(r#"<polygon points="{}" {}"#, points_str, fill_attr);
            if let Some(s) = stroke {
                svg.push_str(&format!(r#" {} stroke-width="{}""#, paint("stroke", s), stroke_width));
            }
            svg.push_str("/>");
            svg
        }
        ChartRenderPrimitive::Circle { cx, cy, r, fill } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            cx,
            cy,
            r,
            paint("fill", fill)
        ),
        ChartRenderPrimitive::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
            baseline,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let baseline_str = match baseline {
                TextBaseline::Top => "hanging",
                TextBaseline::Middle => "central",
                TextBaseline::Bottom => "text-after-edge",
            };
            format!(
                r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" {} text-anchor="{}" dominant-baseline="{}">{}</text>"#,
                x,
                y,
                font_size,
                paint("fill", fill),
                anchor_str,
                baseline_str,
                escape_xml(text)
            )
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

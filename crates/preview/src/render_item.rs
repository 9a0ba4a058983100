//! Render item types

use charts::{Color, RenderedChart};
use serde::{Deserialize, Serialize};

/// A rectangle in page coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Horizontal alignment of a text run relative to its `x`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A single line of text; `y` is the top of the line box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    pub align: TextAlign,
}

impl TextRun {
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            bold: false,
            italic: false,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Render item types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderItem {
    /// A line of text
    Text(TextRun),
    /// A filled rectangle. `chrome` marks on-screen decoration that is not part of the page.
    Rectangle {
        bounds: Rect,
        fill: Color,
        corner_radius: f64,
        chrome: bool,
    },
    /// A straight rule
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    /// A filled dot
    Circle { cx: f64, cy: f64, r: f64, fill: Color },
    /// Area reserved for the skill chart, with its latest rendering if one is attached
    ChartSlot {
        bounds: Rect,
        chart: Option<RenderedChart>,
    },
}

impl RenderItem {
    pub fn fill_rect(bounds: Rect, fill: Color) -> Self {
        RenderItem::Rectangle {
            bounds,
            fill,
            corner_radius: 0.0,
            chrome: false,
        }
    }

    pub fn is_chrome(&self) -> bool {
        matches!(self, RenderItem::Rectangle { chrome: true, .. })
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            RenderItem::Text(run) => Some(run),
            _ => None,
        }
    }
}

/// One rendered resume page as shown in the preview pane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewDocument {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    /// On-screen offset of the page inside the preview pane
    pub margin: f64,
    pub background: Color,
    pub items: Vec<RenderItem>,
}

impl PreviewDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: 0.0,
            background: Color::WHITE,
            items: Vec::new(),
        }
    }

    /// All text runs in paint order
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.items.iter().filter_map(RenderItem::as_text)
    }

    /// Whether any single run contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|run| run.text.contains(needle))
    }

    /// The chart slot, if the template reserved one
    pub fn chart_slot(&self) -> Option<(&Rect, Option<&RenderedChart>)> {
        self.items.iter().find_map(|item| match item {
            RenderItem::ChartSlot { bounds, chart } => Some((bounds, chart.as_ref())),
            _ => None,
        })
    }

    /// Attach (or clear) the rendered chart on every chart slot
    pub fn attach_chart(&mut self, rendered: Option<&RenderedChart>) {
        for item in &mut self.items {
            if let RenderItem::ChartSlot { chart, .. } = item {
                *chart = rendered.cloned();
            }
        }
    }

    /// Lowest painted y coordinate, ignoring chrome
    pub fn content_bottom(&self) -> f64 {
        self.items
            .iter()
            .filter(|item| !item.is_chrome())
            .map(|item| match item {
                RenderItem::Text(run) => run.y + run.font_size,
                RenderItem::Rectangle { bounds, .. } | RenderItem::ChartSlot { bounds, .. } => {
                    bounds.bottom()
                }
                RenderItem::Line { y1, y2, .. } => y1.max(*y2),
                RenderItem::Circle { cy, r, .. } => cy + r,
            })
            .fold(0.0, f64::max)
    }
}

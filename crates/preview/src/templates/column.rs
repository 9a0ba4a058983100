//! Vertical flow layout shared by the templates

use crate::render_item::{Rect, RenderItem, TextAlign, TextRun};
use crate::text::wrap_text;
use charts::Color;

/// Line box height relative to font size
const LINE_HEIGHT: f64 = 1.4;

/// Font attributes for one run
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub const fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn line_height(&self) -> f64 {
        self.size * LINE_HEIGHT
    }

    fn run(&self, text: impl Into<String>, x: f64, y: f64, align: TextAlign) -> TextRun {
        let mut run = TextRun::new(text, x, y, self.size, self.color).aligned(align);
        run.bold = self.bold;
        run.italic = self.italic;
        run
    }
}

/// A column with a moving cursor; every call appends items and advances `y`
pub(crate) struct Column<'a> {
    items: &'a mut Vec<RenderItem>,
    pub x: f64,
    pub width: f64,
    pub y: f64,
}

impl<'a> Column<'a> {
    pub fn new(items: &'a mut Vec<RenderItem>, x: f64, width: f64, y: f64) -> Self {
        Self { items, x, width, y }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn space(&mut self, dy: f64) {
        self.y += dy;
    }

    pub fn push(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    /// One unwrapped line
    pub fn line(&mut self, text: &str, style: TextStyle, align: TextAlign) {
        let x = match align {
            TextAlign::Left => self.x,
            TextAlign::Center => self.x + self.width / 2.0,
            TextAlign::Right => self.right(),
        };
        self.items.push(RenderItem::Text(style.run(text, x, self.y, align)));
        self.y += style.line_height();
    }

    /// Wrapped text; nothing is emitted for blank input
    pub fn paragraph(&mut self, text: &str, style: TextStyle) {
        for line in wrap_text(text, style.size, self.width) {
            self.line(&line, style, TextAlign::Left);
        }
    }

    /// Left and right text on the same row
    pub fn split_row(
        &mut self,
        left: &str,
        left_style: TextStyle,
        right: &str,
        right_style: TextStyle,
    ) {
        let top = self.y;
        self.items
            .push(RenderItem::Text(left_style.run(left, self.x, top, TextAlign::Left)));
        if !right.is_empty() {
            // Vertically center the smaller run on the taller one
            let offset = (left_style.line_height() - right_style.line_height()).max(0.0) / 2.0;
            self.items.push(RenderItem::Text(right_style.run(
                right,
                self.right(),
                top + offset,
                TextAlign::Right,
            )));
        }
        self.y += left_style.line_height().max(right_style.line_height());
    }

    /// Horizontal rule across the column
    pub fn rule(&mut self, color: Color, thickness: f64) {
        let y = self.y + thickness / 2.0;
        self.items.push(RenderItem::Line {
            x1: self.x,
            y1: y,
            x2: self.right(),
            y2: y,
            color,
            width: thickness,
        });
        self.y += thickness;
    }

    /// Name and percent over a rounded progress bar
    pub fn skill_bar(
        &mut self,
        name: &str,
        level: i32,
        label: TextStyle,
        percent: TextStyle,
        accent: Color,
        track: Color,
    ) {
        let level = level.clamp(0, 100);
        self.split_row(name, label, &format!("{}%", level), percent);
        self.space(2.0);

        let height = 6.0;
        self.items.push(RenderItem::Rectangle {
            bounds: Rect::new(self.x, self.y, self.width, height),
            fill: track,
            corner_radius: height / 2.0,
            chrome: false,
        });
        let filled = self.width * f64::from(level) / 100.0;
        if filled > 0.0 {
            self.items.push(RenderItem::Rectangle {
                bounds: Rect::new(self.x, self.y, filled, height),
                fill: accent,
                corner_radius: height / 2.0,
                chrome: false,
            });
        }
        self.y += height;
    }
}

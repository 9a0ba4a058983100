//! Page content stream operators

use super::objects::format_real;

/// Builder for a page's drawing operators
#[derive(Debug, Default)]
pub struct ContentStream {
    operations: Vec<String>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.operations.push("q".to_string());
        self
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.operations.push("Q".to_string());
        self
    }

    /// Concatenate `[a b c d e f]` onto the current transformation matrix
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        let operands = [a, b, c, d, e, f].map(format_real).join(" ");
        self.operations.push(format!("{} cm", operands));
        self
    }

    /// Paint a named XObject from the page resources
    pub fn draw_xobject(&mut self, name: &str) -> &mut Self {
        self.operations.push(format!("/{} Do", name));
        self
    }

    /// Paint an image across the rectangle `(x, y, width, height)`.
    ///
    /// Image space is the unit square, so scaling by the target size fills it.
    pub fn draw_image(&mut self, name: &str, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.save_state()
            .transform(width, 0.0, 0.0, height, x, y)
            .draw_xobject(name)
            .restore_state()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.operations.join("\n").into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_image_operators() {
        let mut content = ContentStream::new();
        content.draw_image("Im1", 0.0, 0.0, 595.5, 842.0);
        let text = String::from_utf8(content.into_bytes()).unwrap();
        assert_eq!(text, "q\n595.5 0 0 842 0 0 cm\n/Im1 Do\nQ");
    }
}

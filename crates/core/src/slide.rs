//! The slide shape model.
//!
//! A [`Slide`] is an ordered list of shapes with fixed geometry. The model
//! is deliberately small: it covers exactly what a laboratory summary
//! slide needs (a title placeholder, free text boxes, embedded pictures,
//! and a decorative rule) and nothing more.

use serde::{Deserialize, Serialize};

use crate::units::{Pt, Rect};

/// Character formatting applied to every paragraph of a text shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Typeface name, e.g. "Arial" or "Cambria Math".
    pub name: String,

    /// Size in points.
    pub size: Pt,

    pub bold: bool,
    pub italic: bool,
}

impl Font {
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size: Pt(size),
            bold: false,
            italic: false,
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
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    /// Hex form used by `a:srgbClr val`, e.g. "FF3300".
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Outline formatting for a rule shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line width in points.
    pub width: Pt,

    pub color: RgbColor,
}

/// A single shape placed on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// The title placeholder, repositioned and restyled.
    Title {
        text: String,
        rect: Rect,
        font: Font,
    },

    /// A free text box. Lines split on `\n` become paragraphs; a trailing
    /// `\n` yields a trailing empty paragraph, as python text frames do.
    TextBox {
        text: String,
        rect: Rect,
        font: Font,
    },

    /// An embedded raster image. The bytes are treated as opaque PNG data.
    Picture { png: Vec<u8>, rect: Rect },

    /// A straight decorative line (`lineInv` preset geometry, no shadow).
    HorizontalRule { rect: Rect, line: LineStyle },
}

/// One slide: an ordered list of shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the slide title with explicit geometry and font.
    pub fn add_title(&mut self, text: impl Into<String>, rect: Rect, font: Font) {
        self.shapes.push(Shape::Title {
            text: text.into(),
            rect,
            font,
        });
    }

    /// Add a free text box.
    pub fn add_text_box(&mut self, text: impl Into<String>, rect: Rect, font: Font) {
        self.shapes.push(Shape::TextBox {
            text: text.into(),
            rect,
            font,
        });
    }

    /// Add a picture from encoded PNG bytes.
    pub fn add_picture(&mut self, png: Vec<u8>, rect: Rect) {
        self.shapes.push(Shape::Picture { png, rect });
    }

    /// Add a decorative horizontal rule.
    pub fn add_rule(&mut self, rect: Rect, line: LineStyle) {
        self.shapes.push(Shape::HorizontalRule { rect, line });
    }

    /// Number of embedded pictures on this slide.
    pub fn picture_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Picture { .. }))
            .count()
    }
}

/// Split shape text into paragraphs the way PowerPoint text frames do.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Rect;

    #[test]
    fn test_paragraph_split() {
        assert_eq!(paragraphs("hello"), vec!["hello"]);
        assert_eq!(paragraphs("hello\ngoodbye"), vec!["hello", "goodbye"]);
        // Trailing newline keeps a trailing empty paragraph.
        assert_eq!(paragraphs("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(RgbColor(255, 51, 0).hex(), "FF3300");
        assert_eq!(RgbColor(0, 0, 0).hex(), "000000");
    }

    #[test]
    fn test_shape_order_is_insertion_order() {
        let mut slide = Slide::new();
        slide.add_title("t", Rect::new(0.0, 0.0, 1.0, 1.0), Font::new("Arial", 28.0));
        slide.add_picture(vec![1, 2, 3], Rect::new(0.0, 5.0, 12.0, 12.0));
        slide.add_text_box("x", Rect::new(2.0, 2.0, 1.0, 1.0), Font::new("Arial", 18.0));

        assert!(matches!(slide.shapes[0], Shape::Title { .. }));
        assert!(matches!(slide.shapes[1], Shape::Picture { .. }));
        assert!(matches!(slide.shapes[2], Shape::TextBox { .. }));
        assert_eq!(slide.picture_count(), 1);
    }
}

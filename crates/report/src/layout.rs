//! Fixed slide geometry and formatting helpers.
//!
//! Every position and font on the summary slide is a constant; these
//! helpers apply them so the report module reads as pure arrangement.

use tlab_core::{Cm, Font, LineStyle, Pt, Rect, RgbColor, Slide};

/// Title placeholder box.
pub const TITLE_RECT: Rect = Rect {
    left: Cm(0.53),
    top: Cm(0.53),
    width: Cm(25.25),
    height: Cm(1.45),
};

/// Red underline beneath the title.
pub const UNDERLINE_RECT: Rect = Rect {
    left: Cm(0.67),
    top: Cm(2.0),
    width: Cm(24.0),
    height: Cm(0.0),
};

pub const UNDERLINE_STYLE: LineStyle = LineStyle {
    width: Pt(3.5),
    color: RgbColor(255, 51, 0),
};

/// Embedded figure edge in centimeters (figures are square).
pub const FIGURE_SIZE_CM: f64 = 12.0;

const TITLE_FONT_SIZE: f64 = 28.0;
const TEXT_FONT_SIZE: f64 = 18.0;

fn title_font() -> Font {
    Font::new("Arial", TITLE_FONT_SIZE).bold().italic()
}

fn text_font() -> Font {
    Font::new("Arial", TEXT_FONT_SIZE)
}

fn math_font() -> Font {
    Font::new("Cambria Math", TEXT_FONT_SIZE)
}

/// Add the slide title with its underline.
pub fn add_title(slide: &mut Slide, text: &str) {
    slide.add_title(text, TITLE_RECT, title_font());
    slide.add_rule(UNDERLINE_RECT, UNDERLINE_STYLE);
}

/// Add a rendered figure at the given position.
pub fn add_figure(slide: &mut Slide, png: Vec<u8>, left: f64, top: f64) {
    slide.add_picture(
        png,
        Rect::new(left, top, FIGURE_SIZE_CM, FIGURE_SIZE_CM),
    );
}

/// Add a parameter text block in the standard text font.
pub fn add_text(slide: &mut Slide, text: &str, left: f64, top: f64) {
    slide.add_text_box(text, Rect::new(left, top, 1.0, 1.0), text_font());
}

/// Add a text block in the math font (fit results).
pub fn add_math_text(slide: &mut Slide, text: &str, left: f64, top: f64) {
    slide.add_text_box(text, Rect::new(left, top, 1.0, 1.0), math_font());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlab_core::Shape;

    #[test]
    fn test_title_comes_with_underline() {
        let mut slide = Slide::new();
        add_title(&mut slide, "Sample");
        assert_eq!(slide.shapes.len(), 2);
        assert!(matches!(slide.shapes[0], Shape::Title { .. }));
        assert!(
            matches!(&slide.shapes[1], Shape::HorizontalRule { line, .. } if *line == UNDERLINE_STYLE)
        );
    }

    #[test]
    fn test_math_text_uses_cambria() {
        let mut slide = Slide::new();
        add_math_text(&mut slide, "a : b = 63 : 37", 14.33, 17.0);
        match &slide.shapes[0] {
            Shape::TextBox { font, rect, .. } => {
                assert_eq!(font.name, "Cambria Math");
                assert_eq!(rect.left, Cm(14.33));
                assert_eq!(rect.width, Cm(1.0));
            }
            other => panic!("expected a text box, got {:?}", other),
        }
    }
}

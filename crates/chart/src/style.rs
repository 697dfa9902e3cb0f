//! Hard-coded chart styling constants.

use chrono::NaiveDate;
use plotly::common::Font;
use plotly::layout::themes::PLOTLY_WHITE;
use plotly::layout::{Annotation, Axis, Margin, TicksDirection};
use plotly::Plot;

/// Rendered figure edge in pixels (square figures).
pub const FIGURE_PX: usize = 500;

/// Font size inside figures, in points.
const FIGURE_FONT_SIZE: usize = 18;

/// Date-stamp font size, in points.
const DATE_FONT_SIZE: usize = 14;

/// The experiment date stamp placed just below the lower-right corner of
/// the plotting area, formatted `YYYY.MM.DD`.
pub fn date_annotation(date: NaiveDate) -> Annotation {
    Annotation::new()
        .text(date.format("%Y.%m.%d").to_string())
        .x(1.0)
        .y(-0.15)
        .x_ref("paper")
        .y_ref("paper")
        .show_arrow(false)
        .font(Font::new().size(DATE_FONT_SIZE))
}

/// Axis styling shared by every figure: inside ticks on a mirrored,
/// visible frame.
pub fn base_axis() -> Axis {
    Axis::new()
        .ticks(TicksDirection::Inside)
        .mirror(true)
        .show_line(true)
}

/// Apply the layout-level defaults and the date stamp to a figure.
///
/// Axis configuration is left untouched; see the crate docs for why axes
/// are styled at construction time instead.
pub fn apply_layout_defaults(plot: &mut Plot, date: NaiveDate) {
    let mut layout = plot
        .layout()
        .clone()
        .height(FIGURE_PX)
        .width(FIGURE_PX)
        .margin(Margin::new().left(10).right(10).top(40).bottom(20))
        .font(Font::new().size(FIGURE_FONT_SIZE))
        .show_legend(false)
        .template(&*PLOTLY_WHITE);
    layout.add_annotation(date_annotation(date));
    plot.set_layout(layout);
}

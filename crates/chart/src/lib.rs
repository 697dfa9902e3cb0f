//! Plotly figure helpers for laboratory summary slides.
//!
//! Figure construction and axis styling live together because plotly
//! layouts replace rather than merge: an axis set at build time would
//! clobber the titles set at construction time. Layout-level defaults
//! (size, margins, font, template) are applied just before rendering.

pub mod figures;
pub mod render;
pub mod style;

pub use figures::{decay_figure, spectrum_figure};
pub use render::to_png;
pub use style::{apply_layout_defaults, base_axis, date_annotation};

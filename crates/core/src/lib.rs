//! Core domain types for laboratory slide decks: measurement units,
//! fonts, and the slide shape model consumed by the PPTX writer.

pub mod error;
pub mod slide;
pub mod units;

pub use error::{Error, Result};
pub use slide::{Font, LineStyle, RgbColor, Shape, Slide};
pub use units::{Cm, Emu, Pt, Rect};

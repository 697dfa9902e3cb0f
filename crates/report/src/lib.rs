//! Photoluminescence experiment summary slides.
//!
//! A [`PhotoLuminescence`] record captures the experiment parameters and
//! two plotly figures. `build()` arranges everything on one slide with
//! fixed geometry; `save()` serializes the deck to a `.pptx` path or an
//! open stream.

pub mod deck;
pub mod format;
pub mod layout;
pub mod photo_luminescence;

pub use deck::SlideReport;
pub use photo_luminescence::{ExperimentParams, FitParameters, PhotoLuminescence};
pub use tlab_pptx::Document;

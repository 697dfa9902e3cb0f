//! The photoluminescence summary report.

use chrono::NaiveDate;
use plotly::Plot;
use serde::{Deserialize, Serialize};
use tlab_chart::{apply_layout_defaults, to_png};
use tlab_core::{Result, Slide};
use tlab_pptx::Document;

use crate::deck::SlideReport;
use crate::format::format_g2;
use crate::layout;

/// Bi-exponential decay fit results: `a : b` amplitude ratio and the two
/// lifetimes in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitParameters {
    pub a: u32,
    pub b: u32,
    pub tau1_ns: f64,
    pub tau2_ns: f64,
}

/// Experiment parameters as read from a parameter file. Combined with the
/// two figures this becomes a [`PhotoLuminescence`] report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentParams {
    pub title: String,
    pub excitation_wavelength_nm: u32,
    pub excitation_power_mw: u32,
    pub time_range_ns: u32,
    pub center_wavelength_nm: u32,
    pub fwhm_nm: f64,
    pub frame_count: u32,
    pub date: NaiveDate,
    pub fit: FitParameters,
}

/// A photoluminescence experiment summary.
///
/// Constructed once and consumed by `build()`/`save()`; nothing mutates
/// the record in between.
pub struct PhotoLuminescence {
    pub title: String,
    pub excitation_wavelength_nm: u32,
    pub excitation_power_mw: u32,
    pub time_range_ns: u32,
    pub center_wavelength_nm: u32,
    pub fwhm_nm: f64,
    pub frame_count: u32,
    pub date: NaiveDate,

    /// Spectrum figure (horizontal streak profile).
    pub h_figure: Plot,

    /// Decay figure (vertical streak profile).
    pub v_figure: Plot,

    pub fit: FitParameters,
}

impl PhotoLuminescence {
    /// Combine a parameter set with the two figures.
    pub fn from_params(params: ExperimentParams, h_figure: Plot, v_figure: Plot) -> Self {
        Self {
            title: params.title,
            excitation_wavelength_nm: params.excitation_wavelength_nm,
            excitation_power_mw: params.excitation_power_mw,
            time_range_ns: params.time_range_ns,
            center_wavelength_nm: params.center_wavelength_nm,
            fwhm_nm: params.fwhm_nm,
            frame_count: params.frame_count,
            date: params.date,
            h_figure,
            v_figure,
            fit: params.fit,
        }
    }

    /// Arrange the slide from pre-rendered figure images.
    fn compose(&self, h_png: Vec<u8>, v_png: Vec<u8>) -> Document {
        let mut slide = Slide::new();

        layout::add_title(&mut slide, &self.title);
        layout::add_figure(&mut slide, h_png, 0.33, 5.0);
        layout::add_figure(&mut slide, v_png, 12.33, 5.0);
        layout::add_text(
            &mut slide,
            &format!(
                "Excitation wavelength : {} nm\nExcitation power : {} mW\nTime range : {} ns\n",
                self.excitation_wavelength_nm, self.excitation_power_mw, self.time_range_ns,
            ),
            2.33,
            2.5,
        );
        layout::add_text(
            &mut slide,
            &format!(
                "Center wavelength : {} nm\nFWHM : {} nm\nFrame : {}\n",
                self.center_wavelength_nm,
                format_g2(self.fwhm_nm),
                self.frame_count,
            ),
            14.33,
            2.5,
        );
        layout::add_math_text(
            &mut slide,
            &format!("a : b = {} : {}", self.fit.a, self.fit.b),
            14.33,
            17.0,
        );
        layout::add_math_text(
            &mut slide,
            &format!(
                "τ₁ = {} ns\nτ₂ = {} ns\n",
                format_g2(self.fit.tau1_ns),
                format_g2(self.fit.tau2_ns),
            ),
            19.33,
            17.0,
        );

        let mut doc = Document::new();
        doc.set_title(&self.title);
        doc.add_slide(slide);
        doc
    }
}

impl SlideReport for PhotoLuminescence {
    /// Stamp and render both figures, then arrange the slide.
    fn build(mut self) -> Result<Document> {
        apply_layout_defaults(&mut self.h_figure, self.date);
        apply_layout_defaults(&mut self.v_figure, self.date);

        log::debug!("rendering figures for '{}'", self.title);
        let h_png = to_png(&self.h_figure)?;
        let v_png = to_png(&self.v_figure)?;

        Ok(self.compose(h_png, v_png))
    }
}

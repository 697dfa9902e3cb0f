//! Standard figures for photoluminescence data.

use plotly::common::{Line, Mode};
use plotly::{Layout, Plot, Scatter};

use crate::style::base_axis;

/// Trace line width used by both figures.
const TRACE_WIDTH: f64 = 0.7;

fn line_figure(x: &[f64], y: &[f64], x_title: &str, y_title: &str) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(x.to_vec(), y.to_vec())
            .mode(Mode::Lines)
            .line(Line::new().width(TRACE_WIDTH)),
    );
    plot.set_layout(
        Layout::new()
            .x_axis(base_axis().title(x_title))
            .y_axis(base_axis().title(y_title)),
    );
    plot
}

/// Spectrum figure: the horizontal streak profile (intensity over
/// wavelength).
pub fn spectrum_figure(wavelength_nm: &[f64], intensity: &[f64]) -> Plot {
    line_figure(
        wavelength_nm,
        intensity,
        "Wavelength (nm)",
        "Intensity (arb. units)",
    )
}

/// Decay figure: the vertical streak profile (intensity over time).
pub fn decay_figure(time_ns: &[f64], intensity: &[f64]) -> Plot {
    line_figure(time_ns, intensity, "Time (ns)", "Intensity (arb. units)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectrum_figure_axes() {
        let plot = spectrum_figure(&[400.0, 401.0, 402.0], &[0.1, 0.9, 0.4]);
        let json = serde_json::to_value(plot.layout()).unwrap();
        assert_eq!(json["xaxis"]["title"]["text"], "Wavelength (nm)");
        assert_eq!(json["xaxis"]["ticks"], "inside");
        assert_eq!(json["yaxis"]["mirror"], true);
    }

    #[test]
    fn test_decay_figure_trace() {
        let plot = decay_figure(&[0.0, 1.0, 2.0], &[1.0, 0.5, 0.25]);
        let json: serde_json::Value = serde_json::from_str(&plot.to_json()).unwrap();
        let trace = &json["data"][0];
        assert_eq!(trace["mode"], "lines");
        assert_eq!(trace["line"]["width"], 0.7);
        assert_eq!(trace["x"][2], 2.0);
    }
}

//! Static PNG export through kaleido.

use plotly::{ImageFormat, Plot};
use tlab_core::{Error, Result};

use crate::style::FIGURE_PX;

/// Export scale; 500 px figures render at 5000 px for print quality.
const RENDER_SCALE: f64 = 10.0;

/// Render a figure to PNG bytes.
///
/// Kaleido only writes to the filesystem, so the image is staged in a
/// scratch directory and read back.
pub fn to_png(plot: &Plot) -> Result<Vec<u8>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("figure.png");

    // write_image reports export failure by not producing the file.
    plot.write_image(&path, ImageFormat::PNG, FIGURE_PX, FIGURE_PX, RENDER_SCALE);
    read_rendered(&path)
}

fn read_rendered(path: &std::path::Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::RenderError(format!(
            "kaleido produced no output at {}",
            path.display()
        )));
    }
    let bytes = std::fs::read(path)?;
    log::debug!("rendered figure to {} bytes of PNG", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_export_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rendered(&dir.path().join("figure.png")).unwrap_err();
        assert!(matches!(err, Error::RenderError(_)));
    }

    #[test]
    fn staged_file_is_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.png");
        std::fs::write(&path, b"\x89PNG").unwrap();
        assert_eq!(read_rendered(&path).unwrap(), b"\x89PNG");
    }
}

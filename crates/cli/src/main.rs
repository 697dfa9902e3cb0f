//! CLI tool for building photoluminescence summary slides.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tlab_report::{ExperimentParams, PhotoLuminescence, SlideReport};

/// Build a one-slide .pptx summary of a photoluminescence experiment.
#[derive(Parser, Debug)]
#[command(name = "tlab-slide")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Experiment parameter file (JSON)
    params: PathBuf,

    /// Spectrum trace CSV (wavelength_nm,intensity)
    #[arg(short, long)]
    spectrum: PathBuf,

    /// Decay trace CSV (time_ns,intensity)
    #[arg(short, long)]
    decay: PathBuf,

    /// Output path (default: parameter file stem with .pptx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let params = read_params(&args.params)?;

    let (wavelength, spectrum) = read_trace(&args.spectrum)?;
    let (time, decay) = read_trace(&args.decay)?;
    if args.verbose {
        eprintln!(
            "  {} spectrum points, {} decay points",
            wavelength.len(),
            time.len()
        );
    }

    let report = PhotoLuminescence::from_params(
        params,
        tlab_chart::spectrum_figure(&wavelength, &spectrum),
        tlab_chart::decay_figure(&time, &decay),
    );

    let output_path = get_output_path(&args.params, args.output.as_ref());
    report
        .save(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if args.verbose {
        eprintln!("Written to: {}", output_path.display());
    }
    Ok(())
}

/// Read the experiment parameter file.
fn read_params(path: &Path) -> Result<ExperimentParams> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let params = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    log::debug!("parameters: {:?}", params);
    Ok(params)
}

/// Read a two-column trace CSV (header row skipped) into x and y vectors.
fn read_trace(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let row: (f64, f64) = record
            .with_context(|| format!("Bad row {} in {}", i + 1, path.display()))?;
        x.push(row.0);
        y.push(row.1);
    }
    if x.is_empty() {
        anyhow::bail!("No data rows in {}", path.display());
    }
    Ok((x, y))
}

/// Determine the output path: explicit, or the parameter file stem.
fn get_output_path(params_path: &Path, output: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = output {
        return path.clone();
    }
    params_path.with_extension("pptx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_defaults_to_params_stem() {
        let path = get_output_path(Path::new("run/sample.json"), None);
        assert_eq!(path, PathBuf::from("run/sample.pptx"));
    }

    #[test]
    fn test_output_path_explicit() {
        let out = PathBuf::from("deck.pptx");
        let path = get_output_path(Path::new("sample.json"), Some(&out));
        assert_eq!(path, out);
    }
}

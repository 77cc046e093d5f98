mod app;
mod chart;
mod config;
mod data;
mod output;
mod ui;

use anyhow::{Context, Result};
use app::SpectrumViewerApp;
use config::{ChartStyle, PlotConfig, VIEWER_MIN_SIZE, VIEWER_SIZE};
use data::loader;
use data::model::Spectrum;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = PlotConfig::default();
    let spectrum = export(&config)?;
    show(spectrum, config.chart)
}

/// Load the data file, render it and write the PNG.
fn export(config: &PlotConfig) -> Result<Spectrum> {
    let spectrum = loader::load_file(&config.input_path)
        .with_context(|| format!("loading {}", config.input_path.display()))?;

    match spectrum.wavelength_bounds() {
        Some((lo, hi)) => log::info!(
            "Loaded {} samples spanning {lo}–{hi} Å",
            spectrum.len()
        ),
        None => log::info!("Loaded an empty spectrum"),
    }

    let image = chart::render(&spectrum, &config.chart).context("rendering chart")?;
    output::write_png(&image, &config.output_path)?;

    Ok(spectrum)
}

/// Open the viewer window; returns once it is closed.
fn show(spectrum: Spectrum, style: ChartStyle) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(VIEWER_SIZE)
            .with_min_inner_size(VIEWER_MIN_SIZE),
        ..Default::default()
    };

    let title = style.title.clone();
    let app = SpectrumViewerApp::new(spectrum, style);

    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("opening viewer window: {e}"))
}

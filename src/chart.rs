use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

use eframe::egui::FontDefinitions;
use image::RgbImage;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use thiserror::Error;

use crate::config::ChartStyle;
use crate::data::model::Spectrum;

const FONT_FAMILY: &str = "sans-serif";
/// egui ships this face in every build; plotters renders text with it.
const BUNDLED_FONT: &str = "Ubuntu-Light";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("bundled font could not be registered for chart text")]
    FontUnavailable,

    #[error("drawing chart")]
    Draw(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("canvas {width}x{height} does not match its pixel buffer")]
    Buffer { width: u32, height: u32 },
}

// ---------------------------------------------------------------------------
// Static chart rendering (PNG path)
// ---------------------------------------------------------------------------

/// Render `spectrum` as a single line chart into an RGB image.
pub fn render(spectrum: &Spectrum, style: &ChartStyle) -> Result<RgbImage, RenderError> {
    ensure_font()?;

    let (width, height) = style.size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw(&root, spectrum, style).map_err(|e| RenderError::Draw(Box::new(e)))?;
    }

    RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer { width, height })
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spectrum: &Spectrum,
    style: &ChartStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let x_range = axis_range(spectrum.wavelength_bounds());
    let y_range = axis_range(spectrum.power_bounds());
    log::debug!("chart ranges x={x_range:?} y={y_range:?}");

    let mut chart = ChartBuilder::on(root)
        .caption(&style.title, (FONT_FAMILY, 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .label_style((FONT_FAMILY, 16))
        .axis_desc_style((FONT_FAMILY, 20));
    if !style.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let [r, g, b] = style.line_color;
    chart.draw_series(LineSeries::new(
        spectrum
            .points()
            .filter(|&(x, y)| x.is_finite() && y.is_finite()),
        RGBColor(r, g, b).stroke_width(style.line_width),
    ))?;

    root.present()?;
    Ok(())
}

/// Data bounds plus a 5% margin on each side.
/// A collapsed range is widened so the axis stays drawable; no data → 0..1.
fn axis_range(bounds: Option<(f64, f64)>) -> Range<f64> {
    let Some((min, max)) = bounds else {
        return 0.0..1.0;
    };
    let span = max - min;
    let pad = if span.abs() > f64::EPSILON {
        span * 0.05
    } else if min.abs() > f64::EPSILON {
        min.abs() * 0.05
    } else {
        0.5
    };
    (min - pad)..(max + pad)
}

// ---------------------------------------------------------------------------
// Font registration
// ---------------------------------------------------------------------------

fn ensure_font() -> Result<(), RenderError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let ok = *REGISTERED.get_or_init(|| match register_bundled_font() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{e}");
            false
        }
    });
    if ok {
        Ok(())
    } else {
        Err(RenderError::FontUnavailable)
    }
}

fn register_bundled_font() -> Result<(), String> {
    let fonts = FontDefinitions::default();
    let data = fonts
        .font_data
        .get(BUNDLED_FONT)
        .ok_or_else(|| format!("egui does not bundle '{BUNDLED_FONT}'"))?;

    let bytes: &'static [u8] = match &data.font {
        Cow::Borrowed(bytes) => *bytes,
        Cow::Owned(bytes) => Box::leak(bytes.clone().into_boxed_slice()),
    };

    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| format!("'{BUNDLED_FONT}' is not a usable font"))
}

use eframe::egui;

use crate::config::ChartStyle;
use crate::data::model::Spectrum;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpectrumViewerApp {
    pub spectrum: Spectrum,
    pub style: ChartStyle,
}

impl SpectrumViewerApp {
    pub fn new(spectrum: Spectrum, style: ChartStyle) -> Self {
        Self { spectrum, style }
    }
}

impl eframe::App for SpectrumViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::spectrum_plot(ui, &self.spectrum, &self.style);
        });
    }
}

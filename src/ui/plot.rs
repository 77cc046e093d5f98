use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::config::ChartStyle;
use crate::data::loader::POWER_COLUMN;
use crate::data::model::Spectrum;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the interactive counterpart of the saved chart.
pub fn spectrum_plot(ui: &mut Ui, spectrum: &Spectrum, style: &ChartStyle) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(style.title.as_str());
    });

    let [r, g, b] = style.line_color;

    let points: PlotPoints = spectrum
        .points()
        .filter(|&(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| [x, y])
        .collect();

    Plot::new("spectrum_plot")
        .x_axis_label(style.x_label.as_str())
        .y_axis_label(style.y_label.as_str())
        .show_grid(style.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points)
                .name(POWER_COLUMN)
                .color(Color32::from_rgb(r, g, b))
                .width(1.5);

            plot_ui.line(line);
        });
}

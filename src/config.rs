use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Fixed settings – there is no CLI or config file
// ---------------------------------------------------------------------------

/// Initial size of the viewer window, in logical points.
pub const VIEWER_SIZE: [f32; 2] = [1200.0, 600.0];
pub const VIEWER_MIN_SIZE: [f32; 2] = [600.0, 300.0];

/// Look of the chart, shared by the PNG renderer and the viewer.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Canvas size in pixels (16 × 8 in at 100 dpi).
    pub size: (u32, u32),
    /// Line colour as RGB.
    pub line_color: [u8; 3],
    pub line_width: u32,
    pub show_grid: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Resulting Spectrum".to_string(),
            x_label: "Wavelength (Angstroms)".to_string(),
            y_label: "Power".to_string(),
            size: (1600, 800),
            line_color: [31, 119, 180],
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Where data comes from and where the chart goes.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub chart: ChartStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("misc").join("arrays.dat"),
            output_path: PathBuf::from("out").join("test.png"),
            chart: ChartStyle::default(),
        }
    }
}

use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{ImageFormat, RgbImage};

/// Write the rendered chart as PNG.
///
/// The parent directory must already exist; it is never created here.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.is_dir() {
            bail!("output directory {} does not exist", dir.display());
        }
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;

    log::info!(
        "Wrote {}x{} chart to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

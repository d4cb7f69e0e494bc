//! Writing the canvas to disk.

use super::types::{EXPORT_FILE_NAME, ExportError, ExportOptions};
use crate::draw::{Canvas, Color};
use std::fs;
use std::path::{Path, PathBuf};

/// Encodes the canvas as PNG bytes.
///
/// With a background the stroke layer is first composited onto a copy, so
/// erased areas show the background rather than transparency.
pub fn encode_png(canvas: &Canvas, background: Option<Color>) -> Result<Vec<u8>, ExportError> {
    let mut png = Vec::new();
    match background {
        Some(color) => canvas.flatten_onto(color)?.write_to_png(&mut png)?,
        None => canvas.surface().write_to_png(&mut png)?,
    }
    Ok(png)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(directory.to_path_buf())
}

/// Writes `canvas.png` into the configured directory, replacing any previous export.
///
/// # Returns
/// Path to the saved file
pub fn export_png(canvas: &Canvas, options: &ExportOptions) -> Result<PathBuf, ExportError> {
    let png = encode_png(canvas, options.background)?;

    let directory = ensure_directory_exists(&options.directory)?;
    let file_path = directory.join(EXPORT_FILE_NAME);

    log::info!(
        "Exporting canvas to: {} ({} bytes)",
        file_path.display(),
        png.len()
    );
    fs::write(&file_path, &png)?;

    Ok(file_path)
}

//! Data types for PNG export.

use crate::config::ExportConfig;
use crate::draw::Color;
use std::path::PathBuf;
use thiserror::Error;

/// Name of the exported image, matching the browser download name.
pub const EXPORT_FILE_NAME: &str = "canvas.png";

/// Options for a single export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Directory that receives the image.
    pub directory: PathBuf,
    /// Background painted beneath the strokes; transparent when `None`.
    pub background: Option<Color>,
}

impl ExportOptions {
    /// Resolves the `[export]` config section, falling back to the working directory.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            directory: config
                .directory
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            background: config.background.as_ref().map(|spec| spec.to_color()),
        }
    }
}

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cairo surface error: {0}")]
    Surface(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

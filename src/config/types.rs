//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{DEFAULT_TENSION, StrokeWidth};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings.
///
/// Controls the tool state when a canvas first opens. Users change these at
/// runtime through the tool controls.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected on startup ("pen" or "eraser")
    #[serde(default)]
    pub default_tool: Tool,

    /// Stroke width in pixels (valid range: 1 - 10)
    #[serde(default = "default_width")]
    pub default_width: u32,

    /// Pen color - a named color (red, green, blue, yellow, white, black),
    /// a hex string like "#1e90ff", or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Curve tension for smoothing strokes (valid range: 0.0 - 1.0)
    /// 0.0 draws straight segments between sampled points
    #[serde(default = "default_tension")]
    pub tension: f64,

    /// Maximum number of strokes kept on the canvas (0 = unlimited)
    #[serde(default)]
    pub max_strokes: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_width: default_width(),
            default_color: default_color(),
            tension: default_tension(),
            max_strokes: 0,
        }
    }
}

/// Canvas surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Optional background painted under the strokes in the exported image.
    /// When unset the PNG keeps a transparent background.
    #[serde(default)]
    pub background: Option<ColorSpec>,

    /// Directory that receives `canvas.png` (defaults to the working directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    u32::from(StrokeWidth::DEFAULT.get())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_tension() -> f64 {
    DEFAULT_TENSION
}

// 60% of a 1600x900 window
fn default_canvas_width() -> u32 {
    960
}

fn default_canvas_height() -> u32 {
    540
}

//! Configuration file support for freedraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/freedraw/config.toml`. Settings include the initial tool state,
//! stroke smoothing, canvas size and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::draw::StrokeWidth;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MIN_CANVAS_SIDE: u32 = 16;
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// default_width = 5
/// default_color = "#000000"
/// tension = 0.5
///
/// [canvas]
/// width = 960
/// height = 540
///
/// [export]
/// background = "white"
/// directory = "/tmp/drawings"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial tool state and stroke smoothing
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas surface size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// PNG export options
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `drawing.default_width`: 1 - 10
    /// - `drawing.tension`: 0.0 - 1.0
    /// - `canvas.width`, `canvas.height`: 16 - 8192
    fn validate_and_clamp(&mut self) {
        let (min_width, max_width) = (
            u32::from(StrokeWidth::MIN),
            u32::from(StrokeWidth::MAX),
        );
        if !(min_width..=max_width).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {}, clamping to {min_width}-{max_width} range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(min_width, max_width);
        }

        if !(0.0..=1.0).contains(&self.drawing.tension) {
            log::warn!(
                "Invalid tension {:.2}, clamping to 0.0-1.0 range",
                self.drawing.tension
            );
            // NaN fails `contains` but survives `clamp`
            self.drawing.tension = if self.drawing.tension.is_nan() {
                crate::draw::DEFAULT_TENSION
            } else {
                self.drawing.tension.clamp(0.0, 1.0)
            };
        }

        for (name, side) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(MIN_CANVAS_SIDE..=MAX_CANVAS_SIDE).contains(&*side) {
                log::warn!(
                    "Invalid canvas {name} {side}, clamping to {MIN_CANVAS_SIDE}-{MAX_CANVAS_SIDE} range"
                );
                *side = (*side).clamp(MIN_CANVAS_SIDE, MAX_CANVAS_SIDE);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/freedraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("freedraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str).context("Invalid config TOML")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

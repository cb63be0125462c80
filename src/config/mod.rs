//! Configuration file support for drawingpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/drawingpad/config.toml`. Settings include brush defaults,
//! the color palette, canvas size and background, and the export destination.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::draw::{Background, Color};
use crate::export::file;
use crate::util::expand_tilde;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_brush_width = 5.0
/// palette = ["black", "red", [0, 128, 255]]
///
/// [canvas]
/// width = 1080
/// height = 1920
/// background_color = [1.0, 1.0, 1.0]
///
/// [export]
/// save_directory = "~/Pictures/DrawingPad"
/// share_command = ["xdg-open"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults and palette
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size, background and history limit
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Export destination and sharing
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `min_brush_width`: 0.5 - 10.0
    /// - `max_brush_width`: 10.0 - 200.0
    /// - `default_brush_width`: min_brush_width - max_brush_width
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - `background_color`: 0.0 - 1.0 per channel
    pub fn validate_and_clamp(&mut self) {
        let drawing = &mut self.drawing;

        if !(0.5..=10.0).contains(&drawing.min_brush_width) {
            warn!(
                "Invalid min_brush_width {:.1}, clamping to 0.5-10.0 range",
                drawing.min_brush_width
            );
            drawing.min_brush_width = clamp_or(drawing.min_brush_width, 0.5, 10.0, 1.0);
        }

        if !(10.0..=200.0).contains(&drawing.max_brush_width) {
            warn!(
                "Invalid max_brush_width {:.1}, clamping to 10.0-200.0 range",
                drawing.max_brush_width
            );
            drawing.max_brush_width = clamp_or(drawing.max_brush_width, 10.0, 200.0, 100.0);
        }

        let (min, max) = (drawing.min_brush_width, drawing.max_brush_width);
        if !(min..=max).contains(&drawing.default_brush_width) {
            warn!(
                "Invalid default_brush_width {:.1}, clamping to {:.1}-{:.1} range",
                drawing.default_brush_width, min, max
            );
            drawing.default_brush_width = clamp_or(drawing.default_brush_width, min, max, min);
        }

        if drawing.default_color.try_to_color().is_none() {
            warn!(
                "Unknown default_color {:?}, falling back to 'black'",
                drawing.default_color
            );
            drawing.default_color = ColorSpec::from("black");
        }

        let palette_len = drawing.palette.len();
        drawing.palette.retain(|spec| {
            let known = spec.try_to_color().is_some();
            if !known {
                warn!("Dropping unknown palette color {:?}", spec);
            }
            known
        });
        if drawing.palette.is_empty() {
            if palette_len > 0 {
                warn!("Palette has no usable colors, restoring the default palette");
            }
            drawing.palette = DrawingConfig::default().palette;
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=8192).contains(value) {
                warn!("Invalid canvas {} {}, clamping to 1-8192 range", name, value);
                *value = (*value).clamp(1, 8192);
            }
        }

        for (i, channel) in self.canvas.background_color.iter_mut().enumerate() {
            if !(0.0..=1.0).contains(channel) {
                warn!(
                    "Invalid background_color[{}] = {:.3}, clamping to 0.0-1.0",
                    i, channel
                );
                *channel = clamp_or(*channel, 0.0, 1.0, 1.0);
            }
        }

        if !self.export.format.eq_ignore_ascii_case("png") {
            warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty filename_template, using the default");
            self.export.filename_template = ExportConfig::default().filename_template;
        } else if !file::is_valid_template(&self.export.filename_template) {
            warn!(
                "Invalid filename_template '{}', using the default",
                self.export.filename_template
            );
            self.export.filename_template = ExportConfig::default().filename_template;
        }

        if self
            .export
            .share_command
            .as_ref()
            .is_some_and(|cmd| cmd.is_empty())
        {
            warn!("Empty share_command, sharing disabled");
            self.export.share_command = None;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/drawingpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("drawingpad");

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

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Serializes the configuration as TOML to `config_path`.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the bundled `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path, or if
    /// the directory or file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// The background described by `[canvas]`: the image if one is configured
    /// and readable, otherwise the solid color.
    pub fn background(&self) -> Background {
        if let Some(image) = &self.canvas.background_image {
            match Background::load_png(&expand_tilde(image)) {
                Ok(background) => return background,
                Err(err) => warn!("{:#}; using solid background", err),
            }
        }
        let [r, g, b] = self.canvas.background_color;
        Background::Solid(Color::new(r, g, b, 1.0))
    }

    /// Palette colors in display order.
    pub fn palette(&self) -> Vec<Color> {
        self.drawing.palette.iter().map(ColorSpec::to_color).collect()
    }
}

/// Annotated example configuration shipped with the crate.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Clamps finite values into range; NaN and infinities become `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

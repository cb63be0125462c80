//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush and palette settings.
///
/// Controls the brush the canvas starts with. Users change these at runtime
/// through the color palette and brush size picker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Starting pen color: a named color (red, green, blue, yellow, orange, pink,
    /// white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Starting brush width in pixels
    #[serde(default = "default_brush_width")]
    pub default_brush_width: f64,

    /// Smallest width the brush can be set to (valid range: 0.5 - 10.0)
    #[serde(default = "default_min_brush_width")]
    pub min_brush_width: f64,

    /// Largest width the brush can be set to (valid range: 10.0 - 200.0)
    #[serde(default = "default_max_brush_width")]
    pub max_brush_width: f64,

    /// Colors offered by the palette, in display order
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_width: default_brush_width(),
            min_brush_width: default_min_brush_width(),
            max_brush_width: default_max_brush_width(),
            palette: default_palette(),
        }
    }
}

/// Canvas size, background and history settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background fill [R, G, B] (0.0-1.0 range), used when no image is set
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 3],

    /// Optional PNG painted underneath the strokes, scaled to cover the canvas
    #[serde(default)]
    pub background_image: Option<String>,

    /// Maximum number of committed strokes (0 = unlimited)
    #[serde(default)]
    pub max_strokes: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background_color: default_background_color(),
            background_image: None,
            max_strokes: 0,
        }
    }
}

/// Where and how exported drawings are written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are saved to (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template (chrono format specifiers, no extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format extension (only "png" is supported)
    #[serde(default = "default_format")]
    pub format: String,

    /// Command run with the saved file path as its last argument when sharing,
    /// e.g. `["xdg-open"]`. Sharing is skipped when unset.
    #[serde(default)]
    pub share_command: Option<Vec<String>>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: default_format(),
            share_command: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_width() -> f64 {
    5.0
}

fn default_min_brush_width() -> f64 {
    1.0
}

fn default_max_brush_width() -> f64 {
    100.0
}

fn default_palette() -> Vec<ColorSpec> {
    ["black", "red", "orange", "yellow", "green", "blue", "pink", "white"]
        .into_iter()
        .map(ColorSpec::from)
        .collect()
}

fn default_canvas_width() -> u32 {
    1080
}

fn default_canvas_height() -> u32 {
    1920
}

fn default_background_color() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_save_directory() -> String {
    "~/Pictures/DrawingPad".to_string()
}

fn default_filename_template() -> String {
    "DrawingPad_%Y-%m-%d_%H%M%S".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

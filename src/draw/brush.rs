//! Brush selection state passed to the canvas.

use super::color::{BLACK, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest brush width accepted by default.
pub const MIN_BRUSH_WIDTH: f64 = 1.0;
/// Largest brush width accepted by default.
pub const MAX_BRUSH_WIDTH: f64 = 100.0;

/// Preset brush sizes offered by the brush picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BrushSize {
    VerySmall,
    Small,
    Medium,
    Large,
}

impl BrushSize {
    /// Width in pixels.
    pub fn width(self) -> f64 {
        match self {
            BrushSize::VerySmall => 5.0,
            BrushSize::Small => 10.0,
            BrushSize::Medium => 20.0,
            BrushSize::Large => 30.0,
        }
    }
}

/// The color and width the next stroke will be drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSelection {
    pub color: Color,
    pub width: f64,
}

impl Default for BrushSelection {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: BrushSize::VerySmall.width(),
        }
    }
}

impl BrushSelection {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color '{:?}', using black", self);
            BLACK
        })
    }

    /// Like [`ColorSpec::to_color`] but reports unknown names as `None`.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

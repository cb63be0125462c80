//! Stroke model, history and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Stroke`]: One freehand path with its color and brush width
//! - [`StrokeHistory`]: Undo/redo stacks of committed strokes
//! - [`StrokeCanvas`]: In-progress stroke, history and brush selection
//! - Rendering functions for Cairo-based output

pub mod background;
pub mod brush;
pub mod canvas;
pub mod color;
pub mod history;
pub mod render;
pub mod stroke;

pub use background::{Background, render_background, render_composed};
pub use brush::{BrushSelection, BrushSize};
pub use canvas::StrokeCanvas;
pub use color::Color;
pub use history::StrokeHistory;
pub use render::{StrokeSurface, render_stroke, render_strokes};
pub use stroke::{Point, Stroke};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};

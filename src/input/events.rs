//! Generic input event types for host-independent handling.

use crate::draw::{BrushSize, Color, Point};

/// Pointer (touch, pen or mouse) event in canvas coordinates.
///
/// Hosts map their native touch/mouse events to these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger/pen/button went down at the given position
    Down { x: f64, y: f64 },
    /// Pointer moved while down
    Move { x: f64, y: f64 },
    /// Pointer released
    Up,
}

impl PointerEvent {
    /// Position carried by the event, if any.
    pub fn point(&self) -> Option<Point> {
        match *self {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } => Some(Point::new(x, y)),
            PointerEvent::Up => None,
        }
    }
}

/// Explicit requests from the UI layer (buttons, palette, brush picker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Undo,
    Redo,
    /// Remove every stroke
    Clear,
    /// Palette button pressed
    SelectColor(Color),
    /// Brush picker choice
    SelectBrushSize(BrushSize),
    /// Arbitrary width, e.g. from a slider
    SetBrushWidth(f64),
}

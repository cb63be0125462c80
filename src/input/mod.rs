//! Input handling for the drawing session.
//!
//! This module translates host pointer events and UI actions into canvas calls.
//! It owns the stroke canvas, the background and palette, and tracks whether the
//! host needs to redraw.

pub mod events;
pub mod state;

pub use events::{Action, PointerEvent};
pub use state::InputState;

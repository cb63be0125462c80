//! Freehand drawing pad core.
//!
//! A [`draw::StrokeCanvas`] collects strokes from pointer events and keeps an
//! undo/redo history; [`input::InputState`] routes host events into it; and
//! [`export`] turns the composed canvas into a saved (and optionally shared)
//! PNG on a background task.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;

//! Drawing session state: canvas, background and pending redraws.

use crate::config::Config;
use crate::draw::{
    Background, BrushSelection, Color, StrokeCanvas, StrokeHistory, render_composed,
};
use crate::export::{CanvasSnapshot, ExportError};
use crate::input::events::{Action, PointerEvent};
use crate::util;

/// Main input state containing all drawing session state.
///
/// Holds the stroke canvas, the background it is composed on and the palette.
/// Pointer events and UI actions are routed through here so the host only has to
/// check `needs_redraw` after each event.
pub struct InputState {
    /// Strokes, history and brush selection
    pub canvas: StrokeCanvas,
    /// Painted underneath the strokes
    pub background: Background,
    /// Colors offered by the palette
    pub palette: Vec<Color>,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates a session around an existing canvas.
    pub fn new(canvas: StrokeCanvas, background: Background, width: u32, height: u32) -> Self {
        Self {
            canvas,
            background,
            palette: Vec::new(),
            width,
            height,
            needs_redraw: true,
        }
    }

    /// Builds the session described by the configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut canvas =
            StrokeCanvas::with_history(StrokeHistory::with_limit(config.canvas.max_strokes));
        canvas.set_width_range(
            config.drawing.min_brush_width,
            config.drawing.max_brush_width,
        );
        canvas.set_brush(BrushSelection::new(
            config.drawing.default_color.to_color(),
            config.drawing.default_brush_width,
        ));

        let mut state = Self::new(
            canvas,
            config.background(),
            config.canvas.width,
            config.canvas.height,
        );
        state.palette = config.palette();
        state
    }

    /// Processes a pointer event.
    ///
    /// # Behavior
    /// - Down: starts a stroke with the current brush (ignored while drawing)
    /// - Move: extends the stroke in progress
    /// - Up: commits the stroke to the history (redraw needed even if refused)
    pub fn on_pointer(&mut self, event: PointerEvent) {
        let changed = match event {
            PointerEvent::Down { x, y } => self.canvas.begin_stroke_with_brush((x, y).into()),
            PointerEvent::Move { x, y } => self.canvas.extend_stroke((x, y).into()),
            // The in-progress stroke disappears even when the history refuses it
            PointerEvent::Up => {
                let was_drawing = self.canvas.is_drawing();
                self.canvas.end_stroke();
                was_drawing
            }
        };
        if changed {
            self.needs_redraw = true;
        }
    }

    /// Applies a UI action. Returns whether any state changed.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Undo => {
                let changed = self.canvas.undo();
                self.mark_redraw(changed)
            }
            Action::Redo => {
                let changed = self.canvas.redo();
                self.mark_redraw(changed)
            }
            Action::Clear => {
                let had_content = self.canvas.can_undo()
                    || self.canvas.can_redo()
                    || self.canvas.is_drawing();
                self.canvas.clear();
                self.mark_redraw(had_content)
            }
            Action::SelectColor(color) => {
                let changed = self.canvas.brush().color != color;
                self.canvas.set_color(color);
                log::debug!("Selected color {}", util::color_to_name(&color));
                changed
            }
            Action::SelectBrushSize(size) => self.apply_brush_width(size.width()),
            Action::SetBrushWidth(width) => self.apply_brush_width(width),
        }
    }

    /// Selects the palette entry at `index`. Returns `false` if out of range.
    pub fn select_palette_color(&mut self, index: usize) -> bool {
        match self.palette.get(index).copied() {
            Some(color) => {
                self.handle_action(Action::SelectColor(color));
                true
            }
            None => {
                log::warn!(
                    "Palette index {} out of range ({} colors)",
                    index,
                    self.palette.len()
                );
                false
            }
        }
    }

    /// Replaces the background (e.g. after the user picks an image).
    pub fn set_background(&mut self, background: Background) {
        self.background = background;
        self.needs_redraw = true;
    }

    /// Renders the background and all strokes, as they would be exported.
    ///
    /// Clears `needs_redraw`.
    pub fn render(&mut self, ctx: &cairo::Context) {
        render_composed(
            ctx,
            &self.canvas,
            &self.background,
            self.width as f64,
            self.height as f64,
        );
        self.needs_redraw = false;
    }

    /// Takes a pixel snapshot of the composed canvas for export.
    pub fn snapshot(&self) -> Result<CanvasSnapshot, ExportError> {
        CanvasSnapshot::capture(&self.canvas, &self.background, self.width, self.height)
    }

    fn apply_brush_width(&mut self, width: f64) -> bool {
        let before = self.canvas.brush().width;
        self.canvas.set_brush_width(width) != before
    }

    fn mark_redraw(&mut self, changed: bool) -> bool {
        if changed {
            self.needs_redraw = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests;

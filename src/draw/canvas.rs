//! Stroke canvas: the in-progress stroke plus the committed history.

use super::brush::{BrushSelection, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
use super::color::Color;
use super::history::StrokeHistory;
use super::render::StrokeSurface;
use super::stroke::{Point, Stroke, is_valid_width};

/// Owns everything that determines the drawn strokes.
///
/// Pointer input builds up `current`; releasing the pointer seals it into the
/// history. Rendering reads this state and never changes it.
#[derive(Debug, Clone)]
pub struct StrokeCanvas {
    /// Stroke being drawn right now (pointer held down)
    current: Option<Stroke>,
    /// Committed and undone strokes
    history: StrokeHistory,
    /// Defaults for the next stroke started with `begin_stroke_with_brush`
    brush: BrushSelection,
    /// Accepted brush width range (inclusive)
    width_range: (f64, f64),
}

impl Default for StrokeCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeCanvas {
    /// Creates an empty canvas with the default brush and unlimited history.
    pub fn new() -> Self {
        Self::with_history(StrokeHistory::new())
    }

    /// Creates an empty canvas around an existing (usually empty, possibly bounded) history.
    pub fn with_history(history: StrokeHistory) -> Self {
        Self {
            current: None,
            history,
            brush: BrushSelection::default(),
            width_range: (MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH),
        }
    }

    /// Restricts `set_brush_width` to `min..=max`. Ignored if the range is empty.
    pub fn set_width_range(&mut self, min: f64, max: f64) {
        if is_valid_width(min) && max.is_finite() && min <= max {
            self.width_range = (min, max);
            self.brush.width = self.brush.width.clamp(min, max);
        } else {
            log::warn!("Ignoring invalid brush width range {min}..={max}");
        }
    }

    // ------------------------------------------------------------------------
    // Stroke lifecycle
    // ------------------------------------------------------------------------

    /// Starts a stroke at `point`.
    ///
    /// Does nothing if a stroke is already in progress or `width` is not a
    /// positive finite number. Returns whether a stroke was started.
    pub fn begin_stroke(&mut self, point: Point, color: Color, width: f64) -> bool {
        if self.current.is_some() {
            log::debug!("begin_stroke ignored: stroke already in progress");
            return false;
        }
        match Stroke::new(point, color, width) {
            Some(stroke) => {
                self.current = Some(stroke);
                true
            }
            None => {
                log::warn!("begin_stroke ignored: invalid brush width {width}");
                false
            }
        }
    }

    /// Starts a stroke with the current brush selection.
    pub fn begin_stroke_with_brush(&mut self, point: Point) -> bool {
        let BrushSelection { color, width } = self.brush;
        self.begin_stroke(point, color, width)
    }

    /// Appends a point to the in-progress stroke. No-op when idle.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        match self.current.as_mut() {
            Some(stroke) => {
                stroke.push(point);
                true
            }
            None => false,
        }
    }

    /// Seals the in-progress stroke into the history. No-op when idle.
    ///
    /// Returns whether a stroke was committed. The in-progress slot is cleared
    /// even if the history refuses the stroke because of its limit.
    pub fn end_stroke(&mut self) -> bool {
        match self.current.take() {
            Some(stroke) => self.history.commit(stroke),
            None => false,
        }
    }

    /// Draws the committed strokes oldest first, then the in-progress stroke.
    pub fn render<S: StrokeSurface + ?Sized>(&self, surface: &mut S) {
        for stroke in self.history.strokes() {
            surface.draw_stroke(stroke);
        }
        if let Some(stroke) = &self.current {
            surface.draw_stroke(stroke);
        }
    }

    // ------------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drops every stroke, including the one in progress.
    pub fn clear(&mut self) {
        self.current = None;
        self.history.clear();
    }

    // ------------------------------------------------------------------------
    // Brush selection
    // ------------------------------------------------------------------------

    /// Sets the width for the next stroke, clamped to the accepted range.
    ///
    /// Non-finite widths are ignored. Returns the width now in effect.
    pub fn set_brush_width(&mut self, width: f64) -> f64 {
        if !width.is_finite() {
            log::warn!("Ignoring non-finite brush width {width}");
            return self.brush.width;
        }
        let (min, max) = self.width_range;
        if !(min..=max).contains(&width) {
            log::warn!("Brush width {width:.1} outside {min:.1}-{max:.1}, clamping");
        }
        self.brush.width = width.clamp(min, max);
        self.brush.width
    }

    /// Sets the color for the next stroke.
    pub fn set_color(&mut self, color: Color) {
        self.brush.color = color;
    }

    /// Replaces the whole brush selection (width is clamped like `set_brush_width`).
    pub fn set_brush(&mut self, brush: BrushSelection) {
        self.set_color(brush.color);
        self.set_brush_width(brush.width);
    }

    pub fn brush(&self) -> BrushSelection {
        self.brush
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        self.history.strokes()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }
}

//! Undo/redo history of committed strokes.

use super::stroke::Stroke;

/// Two ordered stacks of strokes: committed (drawn) and undone.
///
/// The committed stack is the drawing: rendering it oldest first reproduces the
/// canvas. Undo and redo move whole strokes between the stacks, never editing them.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    /// Committed strokes in draw order (first = bottom, last = top)
    undo_stack: Vec<Stroke>,
    /// Undone strokes; the last entry is the next one `redo` restores
    redo_stack: Vec<Stroke>,
    /// Maximum number of committed strokes (0 = unlimited)
    max_strokes: usize,
}

impl StrokeHistory {
    /// Creates an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that refuses commits beyond `max_strokes` (0 = unlimited).
    pub fn with_limit(max_strokes: usize) -> Self {
        Self {
            max_strokes,
            ..Self::default()
        }
    }

    /// Pushes a finished stroke and discards everything that could be redone.
    ///
    /// Returns `false` if the stroke limit is reached; in that case neither stack
    /// changes.
    pub fn commit(&mut self, stroke: Stroke) -> bool {
        if self.max_strokes > 0 && self.undo_stack.len() >= self.max_strokes {
            log::warn!(
                "Stroke limit ({}) reached; discarding new stroke",
                self.max_strokes
            );
            return false;
        }
        self.undo_stack.push(stroke);
        self.redo_stack.clear();
        true
    }

    /// Moves the most recent stroke onto the redo stack.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(stroke) => {
                self.redo_stack.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Restores the most recently undone stroke.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(stroke) => {
                self.undo_stack.push(stroke);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.undo_stack
    }

    pub fn undone_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_strokes(&self) -> usize {
        self.max_strokes
    }

    /// Drops both stacks. The stroke limit is kept.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

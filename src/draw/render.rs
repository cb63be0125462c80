//! Cairo-based rendering functions for strokes.

use super::stroke::Stroke;

/// A drawing surface strokes can be rendered onto.
///
/// The canvas only ever talks to this trait, so hosts can route strokes to a
/// Cairo context, a vector recorder, or a test double.
pub trait StrokeSurface {
    /// Draws one stroke on top of everything drawn so far.
    fn draw_stroke(&mut self, stroke: &Stroke);
}

impl StrokeSurface for cairo::Context {
    fn draw_stroke(&mut self, stroke: &Stroke) {
        render_stroke(self, stroke);
    }
}

/// Renders all strokes in order (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Render a freehand stroke as a polyline through its points.
///
/// A stroke made of a single point (a tap) is drawn as a round dot of the
/// stroke's width.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    let points = stroke.points();
    let Some(first) = points.first() else {
        return;
    };

    ctx.save().ok();
    stroke.color().apply(ctx);
    ctx.set_line_width(stroke.width());
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    if points.len() == 1 {
        // Zero-length segment so the round cap produces a dot
        ctx.line_to(first.x, first.y);
    } else {
        for point in &points[1..] {
            ctx.line_to(point.x, point.y);
        }
    }

    let _ = ctx.stroke();
    ctx.restore().ok();
}

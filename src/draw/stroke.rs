//! Stroke and point definitions.

use super::color::Color;

/// A canvas coordinate in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One continuous freehand path from pointer-down to pointer-up.
///
/// Points can only be appended by the canvas that owns the stroke while it is
/// in progress. Once committed to the history the stroke is read-only: there is
/// no public way to mutate it.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
    width: f64,
}

impl Stroke {
    /// Starts a stroke at `start`.
    ///
    /// Returns `None` when `width` is not a positive finite number.
    pub fn new(start: Point, color: Color, width: f64) -> Option<Self> {
        if !is_valid_width(width) {
            return None;
        }
        Some(Self {
            points: vec![start],
            color,
            width,
        })
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in the order they were drawn.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Brush width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub(crate) fn is_valid_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}

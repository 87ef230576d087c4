//! The drawing sink a rendered L-system paints into.

use crate::color::Rgb;
use crate::vector::Vector2D;
use serde::{Deserialize, Serialize};

/// Receives the line segments produced while interpreting an L-system.
///
/// Coordinates are passed through untransformed; the usual presets assume a
/// `[0, 1] × [0, 1]` canvas.
pub trait Painter {
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb, width: f32);
}

/// One painted segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vector2D,
    pub end: Vector2D,
    pub color: Rgb,
    pub width: f32,
}

/// Adapts a closure taking [`LineSegment`]s into a [`Painter`].
pub struct FnPainter<F>(pub F);

impl<F> Painter for FnPainter<F>
where
    F: FnMut(LineSegment),
{
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb, width: f32) {
        (self.0)(LineSegment {
            start: Vector2D::new(x1, y1),
            end: Vector2D::new(x2, y2),
            color,
            width,
        });
    }
}

/// A painter that keeps every segment, in drawing order.
#[derive(Clone, Debug, Default)]
pub struct LineRecorder {
    pub lines: Vec<LineSegment>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_lines(self) -> Vec<LineSegment> {
        self.lines
    }
}

impl Painter for LineRecorder {
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb, width: f32) {
        self.lines.push(LineSegment {
            start: Vector2D::new(x1, y1),
            end: Vector2D::new(x2, y2),
            color,
            width,
        });
    }
}

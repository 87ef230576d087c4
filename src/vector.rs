//! Planar vector used for turtle positions and headings.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D vector with both in-place and value-returning transforms.
///
/// Angles are always given in degrees. Positive angles rotate
/// counter-clockwise in a right-handed frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2D(DVec2);

impl Vector2D {
    pub const ZERO: Self = Self(DVec2::ZERO);

    /// Unit vector along +X, the heading of an unrotated turtle.
    pub const X: Self = Self(DVec2::X);

    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// A zero vector has no direction; the result is then NaN in both components.
    pub fn normalized(&self) -> Self {
        Self(self.0 / self.0.length())
    }

    /// Adds `offset` to this vector.
    pub fn translate(&mut self, offset: Vector2D) {
        self.0 += offset.0;
    }

    pub fn translated(&self, offset: Vector2D) -> Self {
        Self(self.0 + offset.0)
    }

    /// Rotates this vector in place by `degrees`.
    ///
    /// `x' = x·cosθ − y·sinθ`, `y' = y·cosθ + x·sinθ`.
    pub fn rotate(&mut self, degrees: f64) {
        self.0 = DVec2::from_angle(degrees.to_radians()).rotate(self.0);
    }

    pub fn rotated(&self, degrees: f64) -> Self {
        let mut v = *self;
        v.rotate(degrees);
        v
    }

    /// Multiplies both components by `scaler`.
    pub fn scale(&mut self, scaler: f64) {
        self.0 *= scaler;
    }

    pub fn scaled(&self, scaler: f64) -> Self {
        Self(self.0 * scaler)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-5;

    fn assert_close(v: Vector2D, x: f64, y: f64) {
        assert!(
            (v.x() - x).abs() < EPS && (v.y() - y).abs() < EPS,
            "expected ({x}, {y}), got ({}, {})",
            v.x(),
            v.y()
        );
    }

    #[test]
    fn translate_adds_offset() {
        let mut v = Vector2D::new(2.0, 4.0);
        v.translate(Vector2D::new(1.0, 1.0));
        assert_close(v, 3.0, 5.0);

        let w = Vector2D::new(-1.0, 0.5).translated(Vector2D::new(1.0, 1.0));
        assert_close(w, 0.0, 1.5);
    }

    #[test]
    fn rotate_quarter_turns() {
        let mut v = Vector2D::new(2.0, 0.0);
        v.rotate(90.0);
        assert_close(v, 0.0, 2.0);

        assert_close(Vector2D::new(2.0, 0.0).rotated(-90.0), 0.0, -2.0);
        assert_close(Vector2D::new(2.0, 0.0).rotated(270.0), 0.0, -2.0);
    }

    #[test]
    fn rotation_is_reversible() {
        let original = Vector2D::new(0.3, -1.7);
        for angle in [0.0, 13.0, 60.0, 90.0, 135.5, -200.0, 720.0] {
            let back = original.rotated(angle).rotated(-angle);
            assert_close(back, original.x(), original.y());
        }
    }

    #[test]
    fn in_place_and_copy_rotation_agree() {
        let v = Vector2D::new(1.0, 2.0);
        let mut w = v;
        w.rotate(33.0);
        assert_close(v.rotated(33.0), w.x(), w.y());
        // The copy-returning form leaves the source untouched.
        assert_close(v, 1.0, 2.0);
    }

    #[test]
    fn scale_multiplies_components() {
        let mut v = Vector2D::new(2.0, 1.0);
        v.scale(2.0);
        assert_close(v, 4.0, 2.0);
        assert_close(Vector2D::new(2.0, 1.0).scaled(-0.5), -1.0, -0.5);
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vector2D::new(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < EPS);
        assert_close(v, 0.6, 0.8);
    }
}

//! Affine transforms and the save/restore stack a painter keeps.

use crate::types::Point;

/// A 2D affine transform.
///
/// Maps `(x, y)` to `(xx*x + xy*y + x0, yx*x + yy*y + y0)`.
///
/// ```
/// use awesome_icons_render::{Point, Transform2D};
///
/// let t = Transform2D::translate(10.0, 0.0).rotated(std::f32::consts::FRAC_PI_2);
/// let p = t.transform_point(Point::new(1.0, 0.0));
/// assert!((p.x - 10.0).abs() < 1e-5);
/// assert!((p.y - 1.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    xx: f32,
    yx: f32,
    xy: f32,
    yy: f32,
    x0: f32,
    y0: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Self = Self::translate(0.0, 0.0);

    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            xx: 1.0,
            yx: 0.0,
            xy: 0.0,
            yy: 1.0,
            x0: tx,
            y0: ty,
        }
    }

    /// A rotation by `angle` radians, clockwise in y-down coordinates.
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            xx: cos,
            yx: sin,
            xy: -sin,
            yy: cos,
            x0: 0.0,
            y0: 0.0,
        }
    }

    /// `self` applied after `inner`.
    pub fn compose(&self, inner: &Self) -> Self {
        Self {
            xx: self.xx * inner.xx + self.xy * inner.yx,
            yx: self.yx * inner.xx + self.yy * inner.yx,
            xy: self.xx * inner.xy + self.xy * inner.yy,
            yy: self.yx * inner.xy + self.yy * inner.yy,
            x0: self.xx * inner.x0 + self.xy * inner.y0 + self.x0,
            y0: self.yx * inner.x0 + self.yy * inner.y0 + self.y0,
        }
    }

    /// Translates in the local coordinate system, as a painter does.
    pub fn translated(&self, tx: f32, ty: f32) -> Self {
        self.compose(&Self::translate(tx, ty))
    }

    /// Rotates in the local coordinate system, as a painter does.
    pub fn rotated(&self, angle: f32) -> Self {
        self.compose(&Self::rotate(angle))
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.xx * p.x + self.xy * p.y + self.x0,
            self.yx * p.x + self.yy * p.y + self.y0,
        )
    }

    pub fn translation(&self) -> (f32, f32) {
        (self.x0, self.y0)
    }

    /// Rotation angle in radians. Meaningless for skewed transforms.
    pub fn rotation(&self) -> f32 {
        self.yx.atan2(self.xx)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// The transform state behind `save`/`restore`.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform2D,
    saved: Vec<Transform2D>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Transform2D {
        &self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Returns to the last saved transform. An unbalanced restore is ignored.
    pub fn restore(&mut self) {
        if let Some(saved) = self.saved.pop() {
            self.current = saved;
        }
    }

    /// Number of saves not yet restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.current = self.current.translated(tx, ty);
    }

    pub fn rotate(&mut self, angle: f32) {
        self.current = self.current.rotated(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn close(a: Point, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 1e-4 && (a.y - y).abs() < 1e-4
    }

    #[test]
    fn test_rotate_around_center() {
        let t = Transform2D::translate(8.0, 8.0)
            .rotated(PI)
            .translated(-8.0, -8.0);

        assert!(close(t.transform_point(Point::new(8.0, 8.0)), 8.0, 8.0));
        assert!(close(t.transform_point(Point::new(0.0, 0.0)), 16.0, 16.0));
    }

    #[test]
    fn test_rotation_angle() {
        let t = Transform2D::rotate(PI / 4.0);
        assert!((t.rotation() - PI / 4.0).abs() < 1e-5);
        assert!(Transform2D::rotate(0.0).is_identity());
    }

    #[test]
    fn test_compose_order() {
        // rotate first, then move
        let t = Transform2D::translate(5.0, 0.0).compose(&Transform2D::rotate(PI / 2.0));
        assert!(close(t.transform_point(Point::new(1.0, 0.0)), 5.0, 1.0));
    }

    #[test]
    fn test_stack_save_restore() {
        let mut stack = TransformStack::new();
        stack.save();
        stack.translate(5.0, 6.0);
        assert_eq!(stack.current().translation(), (5.0, 6.0));
        assert_eq!(stack.depth(), 1);

        stack.restore();
        assert!(stack.current().is_identity());

        stack.restore();
        assert_eq!(stack.depth(), 0);
    }
}

use nalgebra::Rotation2;

use crate::math::{lerp, Point, Vector};

use super::{Axis, CircleSolid, RectSolid, Transform2};

/// Point-level geometry operations on the [`Point`] alias.
///
/// `Point` is a plain nalgebra value; this trait adds the engine's transform
/// and metric vocabulary without wrapping the type.
pub trait PointOps {
    /// Euclidean distance to another point.
    fn distance_to(&self, other: Point) -> f64;

    /// Linear interpolation toward `other` at `t` (0 = self, 1 = other).
    #[must_use]
    fn lerp_to(&self, other: Point, t: f64) -> Point;

    /// Rotates around `origin` by `angle` radians.
    #[must_use]
    fn rotate_about(&self, angle: f64, origin: Point) -> Point;

    /// Scales the offset from `origin` by `factor`.
    #[must_use]
    fn scale_about(&self, factor: f64, origin: Point) -> Point;

    /// Mirrors across the selected axis (through the coordinate origin).
    #[must_use]
    fn flip_axis(&self, axis: Axis) -> Point;

    /// Keeps only the selected component(s), zeroing the rest.
    #[must_use]
    fn to_axis(&self, axis: Axis) -> Point;

    /// A zero-size bounding box at this point.
    fn point_bbox(&self) -> RectSolid;

    /// A circle centered on this point.
    fn to_circle(&self, radius: f64) -> CircleSolid;
}

impl PointOps for Point {
    fn distance_to(&self, other: Point) -> f64 {
        (self - other).norm()
    }

    fn lerp_to(&self, other: Point, t: f64) -> Point {
        Point::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }

    fn rotate_about(&self, angle: f64, origin: Point) -> Point {
        origin + Rotation2::new(angle) * (self - origin)
    }

    fn scale_about(&self, factor: f64, origin: Point) -> Point {
        origin + (self - origin) * factor
    }

    fn flip_axis(&self, axis: Axis) -> Point {
        match axis {
            Axis::X => Point::new(-self.x, self.y),
            Axis::Y => Point::new(self.x, -self.y),
            Axis::Both => Point::new(-self.x, -self.y),
        }
    }

    fn to_axis(&self, axis: Axis) -> Point {
        match axis {
            Axis::X => Point::new(self.x, 0.0),
            Axis::Y => Point::new(0.0, self.y),
            Axis::Both => *self,
        }
    }

    fn point_bbox(&self) -> RectSolid {
        RectSolid::new(self.x, self.y, 0.0, 0.0)
    }

    fn to_circle(&self, radius: f64) -> CircleSolid {
        CircleSolid::new(*self, radius)
    }
}

impl Transform2 for Point {
    fn translate(&self, offset: Vector) -> Self {
        self + offset
    }

    fn scale(&self, factor: f64, origin: Point) -> Self {
        self.scale_about(factor, origin)
    }

    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self {
        // A point has no extent; rotating it about itself is the identity.
        match origin {
            Some(o) => self.rotate_about(angle, o),
            None => *self,
        }
    }

    fn flip(&self, axis: Axis) -> Self {
        self.flip_axis(axis)
    }

    fn center(&self) -> Point {
        *self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < TOLERANCE);
        assert!((b.distance_to(a) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(5.0, -2.0);
        assert!(a.lerp_to(b, 0.0).distance_to(a) < TOLERANCE);
        assert!(a.lerp_to(b, 1.0).distance_to(b) < TOLERANCE);
        assert!(a.lerp_to(b, 0.5).distance_to(Point::new(3.0, 0.0)) < TOLERANCE);
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        let p = Point::new(1.0, 0.0);
        let r = p.rotate_about(FRAC_PI_2, Point::origin());
        assert!(r.distance_to(Point::new(0.0, 1.0)) < 1e-12);
    }

    #[test]
    fn rotate_about_offset_center() {
        let p = Point::new(2.0, 1.0);
        let r = p.rotate_about(FRAC_PI_2, Point::new(1.0, 1.0));
        assert!(r.distance_to(Point::new(1.0, 2.0)) < 1e-12);
    }

    #[test]
    fn rotate_without_origin_is_identity() {
        let p = Point::new(2.0, 3.0);
        assert_eq!(p.rotate(1.3, None), p);
    }

    #[test]
    fn scale_about_origin() {
        let p = Point::new(2.0, -1.0);
        let s = p.scale_about(3.0, Point::origin());
        assert!(s.distance_to(Point::new(6.0, -3.0)) < TOLERANCE);
    }

    #[test]
    fn flip_axes() {
        let p = Point::new(2.0, 3.0);
        assert_eq!(p.flip_axis(Axis::X), Point::new(-2.0, 3.0));
        assert_eq!(p.flip_axis(Axis::Y), Point::new(2.0, -3.0));
        assert_eq!(p.flip_axis(Axis::Both), Point::new(-2.0, -3.0));
    }

    #[test]
    fn recenter_moves_to_axis() {
        let p = Point::new(2.0, 3.0);
        assert_eq!(p.recenter(Axis::Both), Point::origin());
        assert_eq!(p.recenter(Axis::X), Point::new(0.0, 3.0));
    }
}

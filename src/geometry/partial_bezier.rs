use crate::math::Point;

use super::{Axis, PointOps};

/// One cubic segment of a Bezier ring: two handles and the segment's end
/// point. The start point is the previous segment's end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialBezier {
    pub handle1: Point,
    pub handle2: Point,
    pub end_point: Point,
}

impl PartialBezier {
    #[must_use]
    pub fn new(handle1: Point, handle2: Point, end_point: Point) -> Self {
        Self {
            handle1,
            handle2,
            end_point,
        }
    }

    /// Applies `f` to both handles and the end point.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self::new(f(self.handle1), f(self.handle2), f(self.end_point))
    }

    #[must_use]
    pub fn flip(&self, axis: Axis) -> Self {
        self.map_points(|p| p.flip_axis(axis))
    }

    /// Pointwise linear interpolation toward `to`.
    #[must_use]
    pub fn lerp_to(&self, to: &PartialBezier, t: f64) -> Self {
        Self::new(
            self.handle1.lerp_to(to.handle1, t),
            self.handle2.lerp_to(to.handle2, t),
            self.end_point.lerp_to(to.end_point, t),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn lerp_endpoints() {
        let a = PartialBezier::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        );
        let b = PartialBezier::new(
            Point::new(2.0, 2.0),
            Point::new(3.0, 2.0),
            Point::new(3.0, 3.0),
        );
        assert_eq!(a.lerp_to(&b, 0.0), a);
        assert_eq!(a.lerp_to(&b, 1.0), b);
        let mid = a.lerp_to(&b, 0.5);
        assert!(mid.handle1.distance_to(Point::new(1.0, 1.0)) < TOLERANCE);
    }

    #[test]
    fn map_points_applies_everywhere() {
        let b = PartialBezier::new(
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        );
        let shifted = b.map_points(|p| Point::new(p.x, p.y + 1.0));
        assert_eq!(shifted.handle1, Point::new(1.0, 1.0));
        assert_eq!(shifted.handle2, Point::new(2.0, 1.0));
        assert_eq!(shifted.end_point, Point::new(3.0, 1.0));
    }
}

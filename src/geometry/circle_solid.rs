use std::f64::consts::PI;

use crate::math::{Point, Vector};
use crate::render::PathSink;
use crate::tessellation::circle_vertex_count;

use super::{
    Axis, BezierSolid, PartialBezier, PointOps, PolygonSolid, RectSolid, ShapeRelation,
    SolidShape, Transform2,
};

/// A circle with exact closed-form metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSolid {
    pub position: Point,
    pub radius: f64,
}

impl CircleSolid {
    #[must_use]
    pub fn new(position: Point, radius: f64) -> Self {
        Self { position, radius }
    }

    /// `n` points evenly spaced on the outline, starting at angle zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_points_evenly(&self, n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / n as f64;
                self.position + Vector::new(angle.cos(), angle.sin()) * self.radius
            })
            .collect()
    }

    /// Exact cubic Bezier ring of four quarter arcs.
    ///
    /// Handle length is `radius * kappa` with `kappa = 4(sqrt(2) - 1) / 3`,
    /// the standard circular-arc approximation constant.
    #[must_use]
    pub fn to_bezier(&self) -> BezierSolid {
        let kappa = 4.0 * ((2.0_f64.sqrt() - 1.0) / 3.0);
        let (x, y) = (self.position.x, self.position.y);
        let r = self.radius;
        let h = r * kappa;

        BezierSolid::new(vec![
            PartialBezier::new(
                Point::new(x + h, y + r),
                Point::new(x + r, y + h),
                Point::new(x + r, y),
            ),
            PartialBezier::new(
                Point::new(x + r, y - h),
                Point::new(x + h, y - r),
                Point::new(x, y - r),
            ),
            PartialBezier::new(
                Point::new(x - h, y - r),
                Point::new(x - r, y - h),
                Point::new(x - r, y),
            ),
            PartialBezier::new(
                Point::new(x - r, y + h),
                Point::new(x - h, y + r),
                Point::new(x, y + r),
            ),
        ])
    }
}

impl Transform2 for CircleSolid {
    fn translate(&self, offset: Vector) -> Self {
        Self::new(self.position + offset, self.radius)
    }

    fn scale(&self, factor: f64, origin: Point) -> Self {
        Self::new(
            self.position.scale_about(factor, origin),
            self.radius * factor.abs(),
        )
    }

    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self {
        // Rotation about the circle's own center is the identity.
        match origin {
            Some(o) => Self::new(self.position.rotate_about(angle, o), self.radius),
            None => *self,
        }
    }

    fn flip(&self, axis: Axis) -> Self {
        Self::new(self.position.flip_axis(axis), self.radius)
    }

    fn center(&self) -> Point {
        self.position
    }
}

impl SolidShape for CircleSolid {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn outline_length(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn bbox(&self) -> RectSolid {
        let d = self.radius * 2.0;
        RectSolid::new(self.position.x - self.radius, self.position.y - self.radius, d, d)
    }

    fn right_point_intersections(&self, p: Point) -> usize {
        let dy = p.y - self.position.y;
        let discriminant = self.radius * self.radius - dy * dy;
        if discriminant < 0.0 {
            return 0;
        }
        let half_chord = discriminant.sqrt();
        let x1 = self.position.x - half_chord;
        let x2 = self.position.x + half_chord;
        usize::from(x1 >= p.x) + usize::from(x2 >= p.x)
    }

    fn contains(&self, p: Point) -> bool {
        p.distance_to(self.position) <= self.radius
    }

    fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point> {
        let amount = crate::math::sample_amount(self.outline_length(), min_per_unit);
        self.sample_points_evenly(amount)
    }

    /// Regular polygon with `max(3, round(3 * 2^(quality - 1)))` vertices:
    /// quality 1 is a triangle, 2 a hexagon, 3 a 12-gon.
    fn approximated(&self, quality: f64) -> PolygonSolid {
        PolygonSolid::new(self.sample_points_evenly(circle_vertex_count(quality)))
    }

    fn relation_to(&self, other: &Self) -> ShapeRelation {
        let distance = self.position.distance_to(other.position);
        let radii_sum = self.radius + other.radius;
        let radii_diff = (self.radius - other.radius).abs();

        if distance < radii_sum && distance >= radii_diff {
            ShapeRelation::OutlineIntersect
        } else if distance < radii_diff {
            if self.radius < other.radius {
                ShapeRelation::ThisInsideOther
            } else {
                ShapeRelation::OtherInsideThis
            }
        } else {
            ShapeRelation::Disjoint
        }
    }

    fn select_shape(&self, sink: &mut dyn PathSink) {
        // Emitted as the exact four-arc Bezier ring.
        self.to_bezier().select_shape(sink);
    }
}

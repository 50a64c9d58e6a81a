use crate::math::{Point, Vector};
use crate::render::PathSink;

use super::{
    Axis, LineSegment, PointOps, PolygonSolid, RectSolid, ShapeRelation, SolidShape, Transform2,
};

/// A filled triangle, the output unit of triangulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSolid {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl TriangleSolid {
    #[must_use]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    #[must_use]
    pub fn lines(&self) -> [LineSegment; 3] {
        [
            LineSegment::new(self.a, self.b),
            LineSegment::new(self.b, self.c),
            LineSegment::new(self.c, self.a),
        ]
    }

    /// Applies `f` to every vertex.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self::new(f(self.a), f(self.b), f(self.c))
    }

    #[must_use]
    pub fn outline_intersects(&self, other: &TriangleSolid) -> bool {
        self.lines()
            .iter()
            .any(|l| other.lines().iter().any(|m| l.crosses(m)))
    }

    /// `amount` deterministic interior points: a Weyl sequence over the unit
    /// square, folded into the barycentric triangle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_points(&self, amount: usize) -> Vec<Point> {
        const STRIDE_U: f64 = std::f64::consts::SQRT_2;
        const STRIDE_V: f64 = 1.732_050_807_568_877_2;
        (0..amount)
            .map(|i| {
                let k = i as f64 + 0.5;
                let mut u = (k * STRIDE_U).fract();
                let mut v = (k * STRIDE_V).fract();
                if u + v > 1.0 {
                    u = 1.0 - u;
                    v = 1.0 - v;
                }
                self.a + (self.b - self.a) * u + (self.c - self.a) * v
            })
            .collect()
    }
}

impl Transform2 for TriangleSolid {
    fn translate(&self, offset: Vector) -> Self {
        self.map_points(|p| p + offset)
    }

    fn scale(&self, factor: f64, origin: Point) -> Self {
        self.map_points(|p| p.scale_about(factor, origin))
    }

    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self {
        let o = origin.unwrap_or_else(|| self.center());
        self.map_points(|p| p.rotate_about(angle, o))
    }

    fn flip(&self, axis: Axis) -> Self {
        self.map_points(|p| p.flip_axis(axis))
    }

    fn center(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }
}

impl SolidShape for TriangleSolid {
    fn area(&self) -> f64 {
        (self.a.x * self.b.y - self.a.y * self.b.x
            + self.b.x * self.c.y
            - self.b.y * self.c.x
            + self.c.x * self.a.y
            - self.c.y * self.a.x)
            .abs()
            / 2.0
    }

    fn outline_length(&self) -> f64 {
        self.lines().iter().map(LineSegment::length).sum()
    }

    fn bbox(&self) -> RectSolid {
        let min_x = self.a.x.min(self.b.x).min(self.c.x);
        let min_y = self.a.y.min(self.b.y).min(self.c.y);
        let max_x = self.a.x.max(self.b.x).max(self.c.x);
        let max_y = self.a.y.max(self.b.y).max(self.c.y);
        RectSolid::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    fn right_point_intersections(&self, p: Point) -> usize {
        self.lines()
            .iter()
            .map(|l| l.right_point_intersections(p))
            .sum()
    }

    /// Barycentric containment; degenerate triangles contain nothing.
    fn contains(&self, p: Point) -> bool {
        let v0 = self.c - self.a;
        let v1 = self.b - self.a;
        let v2 = p - self.a;

        let dot00 = v0.dot(&v0);
        let dot01 = v0.dot(&v1);
        let dot02 = v0.dot(&v2);
        let dot11 = v1.dot(&v1);
        let dot12 = v1.dot(&v2);

        let denominator = dot00 * dot11 - dot01 * dot01;
        if denominator == 0.0 {
            return false;
        }
        let u = (dot11 * dot02 - dot01 * dot12) / denominator;
        let v = (dot00 * dot12 - dot01 * dot02) / denominator;
        u >= 0.0 && v >= 0.0 && u + v < 1.0
    }

    fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point> {
        self.lines()
            .iter()
            .flat_map(|l| l.sample_on_length(min_per_unit))
            .collect()
    }

    /// Already polygonal; `quality` is ignored.
    fn approximated(&self, _quality: f64) -> PolygonSolid {
        PolygonSolid::new(vec![self.a, self.b, self.c])
    }

    fn triangulate(&self, _quality: f64) -> crate::error::Result<Vec<TriangleSolid>> {
        Ok(vec![*self])
    }

    fn relation_to(&self, other: &Self) -> ShapeRelation {
        if self.outline_intersects(other) {
            ShapeRelation::OutlineIntersect
        } else if other.contains(self.a) {
            ShapeRelation::ThisInsideOther
        } else if self.contains(other.a) {
            ShapeRelation::OtherInsideThis
        } else {
            ShapeRelation::Disjoint
        }
    }

    fn select_shape(&self, sink: &mut dyn PathSink) {
        sink.move_to(self.a);
        sink.line_to(self.b);
        sink.line_to(self.c);
        sink.close_path();
    }
}

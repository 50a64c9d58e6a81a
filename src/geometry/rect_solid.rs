use crate::math::{lerp, Point, Vector};
use crate::render::PathSink;

use super::{
    Axis, LineSegment, PointOps, PolygonSolid, ShapeRelation, SolidShape, Transform2,
    TriangleSolid,
};

/// An axis-aligned rectangle, doubling as the engine's bounding-box type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSolid {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectSolid {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two arbitrary corner points.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Smallest rectangle covering every rectangle in `rects`, or `None` for
    /// an empty input.
    #[must_use]
    pub fn union_bbox<I: IntoIterator<Item = RectSolid>>(rects: I) -> Option<Self> {
        rects.into_iter().reduce(|acc, r| {
            let x = acc.x.min(r.x);
            let y = acc.y.min(r.y);
            let max_x = (acc.x + acc.width).max(r.x + r.width);
            let max_y = (acc.y + acc.height).max(r.y + r.height);
            Self::new(x, y, max_x - x, max_y - y)
        })
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Corner points in ring order.
    #[must_use]
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.max_x(), self.y),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.x, self.max_y()),
        ]
    }

    /// Edge segments in ring order.
    #[must_use]
    pub fn lines(&self) -> [LineSegment; 4] {
        let [a, b, c, d] = self.vertices();
        [
            LineSegment::new(a, b),
            LineSegment::new(b, c),
            LineSegment::new(c, d),
            LineSegment::new(d, a),
        ]
    }

    /// Axis-aligned overlap test (shared boundary counts as overlap).
    #[must_use]
    pub fn overlaps(&self, other: &RectSolid) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }

    /// Component-wise linear interpolation toward `to`.
    #[must_use]
    pub fn lerp_to(&self, to: &RectSolid, t: f64) -> Self {
        Self::new(
            lerp(self.x, to.x, t),
            lerp(self.y, to.y, t),
            lerp(self.width, to.width, t),
            lerp(self.height, to.height, t),
        )
    }

    /// Evenly distributed grid of at least `min_n` points over the interior.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn distribute_grid(&self, min_n: usize) -> Vec<Point> {
        if min_n == 0 || self.width <= 0.0 || self.height <= 0.0 {
            return Vec::new();
        }
        let n_x = ((min_n as f64 * self.width / self.height).sqrt().ceil()).max(1.0) as usize;
        let n_y = (min_n as f64 / n_x as f64).ceil().max(1.0) as usize;
        let dx = self.width / n_x as f64;
        let dy = self.height / n_y as f64;
        let mut points = Vec::with_capacity(n_x * n_y);
        for i in 0..n_x {
            for j in 0..n_y {
                points.push(Point::new(self.x + i as f64 * dx, self.y + j as f64 * dy));
            }
        }
        points
    }
}

impl Transform2 for RectSolid {
    fn translate(&self, offset: Vector) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    fn scale(&self, factor: f64, origin: Point) -> Self {
        let tl = Point::new(self.x, self.y).scale_about(factor, origin);
        let br = Point::new(self.max_x(), self.max_y()).scale_about(factor, origin);
        Self::from_corners(tl, br)
    }

    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self {
        // The type stays axis-aligned: rotation maps the two defining corners
        // and rebuilds, matching the container-style rect contract.
        let o = origin.unwrap_or_else(|| self.center());
        let tl = Point::new(self.x, self.y).rotate_about(angle, o);
        let br = Point::new(self.max_x(), self.max_y()).rotate_about(angle, o);
        Self::from_corners(tl, br)
    }

    fn flip(&self, axis: Axis) -> Self {
        let tl = Point::new(self.x, self.y).flip_axis(axis);
        let br = Point::new(self.max_x(), self.max_y()).flip_axis(axis);
        Self::from_corners(tl, br)
    }

    fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl SolidShape for RectSolid {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn outline_length(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn bbox(&self) -> RectSolid {
        *self
    }

    fn right_point_intersections(&self, p: Point) -> usize {
        if p.y < self.y || p.y > self.max_y() {
            return 0;
        }
        if p.x < self.x {
            2
        } else if p.x <= self.max_x() {
            1
        } else {
            0
        }
    }

    fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.max_x() && p.y >= self.y && p.y <= self.max_y()
    }

    fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point> {
        self.lines()
            .iter()
            .flat_map(|l| l.sample_on_length(min_per_unit))
            .collect()
    }

    /// The rectangle is already polygonal; `quality` is ignored.
    fn approximated(&self, _quality: f64) -> PolygonSolid {
        PolygonSolid::new(self.vertices().to_vec())
    }

    fn triangulate(&self, _quality: f64) -> crate::error::Result<Vec<TriangleSolid>> {
        let [a, b, c, d] = self.vertices();
        Ok(vec![TriangleSolid::new(a, b, c), TriangleSolid::new(a, c, d)])
    }

    fn relation_to(&self, other: &Self) -> ShapeRelation {
        if self.x >= other.x
            && self.max_x() <= other.max_x()
            && self.y >= other.y
            && self.max_y() <= other.max_y()
        {
            ShapeRelation::ThisInsideOther
        } else if other.x >= self.x
            && other.max_x() <= self.max_x()
            && other.y >= self.y
            && other.max_y() <= self.max_y()
        {
            ShapeRelation::OtherInsideThis
        } else if self.max_x() < other.x
            || self.x > other.max_x()
            || self.max_y() < other.y
            || self.y > other.max_y()
        {
            ShapeRelation::Disjoint
        } else {
            ShapeRelation::OutlineIntersect
        }
    }

    fn select_shape(&self, sink: &mut dyn PathSink) {
        let [a, b, c, d] = self.vertices();
        sink.move_to(a);
        sink.line_to(b);
        sink.line_to(c);
        sink.line_to(d);
        sink.close_path();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn area_and_length() {
        let r = RectSolid::new(0.0, 0.0, 2.0, 3.0);
        assert!((r.area() - 6.0).abs() < TOLERANCE);
        assert!((r.outline_length() - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn union_covers_all() {
        let u = RectSolid::union_bbox([
            RectSolid::new(0.0, 0.0, 1.0, 1.0),
            RectSolid::new(2.0, -1.0, 1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(u, RectSolid::new(0.0, -1.0, 3.0, 2.0));
    }

    #[test]
    fn union_of_empty_is_none() {
        assert!(RectSolid::union_bbox([]).is_none());
    }

    #[test]
    fn containment_relation() {
        let outer = RectSolid::new(0.0, 0.0, 10.0, 10.0);
        let inner = RectSolid::new(2.0, 2.0, 3.0, 3.0);
        assert_eq!(inner.relation_to(&outer), ShapeRelation::ThisInsideOther);
        assert_eq!(outer.relation_to(&inner), ShapeRelation::OtherInsideThis);
    }

    #[test]
    fn disjoint_and_crossing_relations() {
        let a = RectSolid::new(0.0, 0.0, 1.0, 1.0);
        let b = RectSolid::new(5.0, 5.0, 1.0, 1.0);
        let c = RectSolid::new(0.5, 0.5, 2.0, 2.0);
        assert_eq!(a.relation_to(&b), ShapeRelation::Disjoint);
        assert_eq!(a.relation_to(&c), ShapeRelation::OutlineIntersect);
        assert_eq!(a.relation_to(&c), c.relation_to(&a).flipped());
    }

    #[test]
    fn ray_crossings_respect_y_extent() {
        let r = RectSolid::new(1.0, 1.0, 2.0, 2.0);
        assert_eq!(r.right_point_intersections(Point::new(0.0, 2.0)), 2);
        assert_eq!(r.right_point_intersections(Point::new(2.0, 2.0)), 1);
        assert_eq!(r.right_point_intersections(Point::new(4.0, 2.0)), 0);
        assert_eq!(r.right_point_intersections(Point::new(0.0, 5.0)), 0);
    }

    #[test]
    fn contains_boundary() {
        let r = RectSolid::new(0.0, 0.0, 1.0, 1.0);
        assert!(r.contains(Point::new(0.5, 0.5)));
        assert!(r.contains(Point::new(1.0, 1.0)));
        assert!(!r.contains(Point::new(1.1, 0.5)));
    }

    #[test]
    fn triangulation_preserves_area() {
        let r = RectSolid::new(1.0, 2.0, 4.0, 3.0);
        let total: f64 = r.triangulate(1.0).unwrap().iter().map(TriangleSolid::area).sum();
        assert!((total - r.area()).abs() < TOLERANCE);
    }

    #[test]
    fn length_sampling_walks_the_perimeter() {
        let r = RectSolid::new(0.0, 0.0, 4.0, 2.0);
        let pts = r.sample_on_length(1.0);
        assert_eq!(pts.len(), 12);
        for p in &pts {
            let on_edge = p.x.abs() < TOLERANCE
                || (p.x - 4.0).abs() < TOLERANCE
                || p.y.abs() < TOLERANCE
                || (p.y - 2.0).abs() < TOLERANCE;
            assert!(on_edge);
        }
    }

    #[test]
    fn area_sampling_fills_the_interior() {
        let r = RectSolid::new(0.0, 0.0, 4.0, 4.0);
        let pts = r.sample_on_area(1.0, 1.0).unwrap();
        // Two triangles of area 8 each.
        assert_eq!(pts.len(), 16);
        for p in pts {
            assert!(r.contains(p));
        }
    }

    #[test]
    fn scale_about_corner() {
        let r = RectSolid::new(1.0, 1.0, 2.0, 2.0);
        let s = r.scale(2.0, Point::new(1.0, 1.0));
        assert_eq!(s, RectSolid::new(1.0, 1.0, 4.0, 4.0));
    }

    #[test]
    fn flip_x_mirrors() {
        let r = RectSolid::new(1.0, 0.0, 2.0, 1.0);
        assert_eq!(r.flip(Axis::X), RectSolid::new(-3.0, 0.0, 2.0, 1.0));
    }
}

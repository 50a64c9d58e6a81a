use crate::math::{Point, Vector, TOLERANCE};

use super::{Axis, PointOps, RectSolid, Transform2};

/// A straight edge between two points; the edge unit of polygon rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    #[must_use]
    pub fn delta(&self) -> Vector {
        self.end - self.start
    }

    /// Point at normalized parameter `t` (0 = start, 1 = end).
    #[must_use]
    pub fn lerp(&self, t: f64) -> Point {
        self.start.lerp_to(self.end, t)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.lerp(0.5)
    }

    #[must_use]
    pub fn bbox(&self) -> RectSolid {
        RectSolid::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            (self.start.x - self.end.x).abs(),
            (self.start.y - self.end.y).abs(),
        )
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    /// Evenly spaced points at `min_per_unit` density, start included and
    /// end excluded so ring edges chain without duplicate corners.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point> {
        let amount = crate::math::sample_amount(self.length(), min_per_unit);
        (0..amount)
            .map(|i| self.lerp(i as f64 / amount as f64))
            .collect()
    }

    /// `n` points spaced evenly along the segment, endpoints included.
    #[must_use]
    pub fn sample_points(&self, n: usize) -> Vec<Point> {
        match n {
            0 => Vec::new(),
            1 => vec![self.midpoint()],
            _ => (0..n)
                .map(|i| self.lerp(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    /// Bounded segment-segment crossing test.
    ///
    /// Parallel segments never report a crossing, including the collinear
    /// overlap case.
    #[must_use]
    pub fn crosses(&self, other: &LineSegment) -> bool {
        let da = self.delta();
        let db = other.delta();
        let denominator = db.y * da.x - db.x * da.y;
        if denominator.abs() < TOLERANCE {
            return false;
        }
        let dx = self.start.x - other.start.x;
        let dy = self.start.y - other.start.y;
        let ua = (db.x * dy - db.y * dx) / denominator;
        let ub = (da.x * dy - da.y * dx) / denominator;
        (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
    }

    /// Crossing count of the rightward horizontal ray from `p` with this
    /// segment: 0 or 1.
    ///
    /// Uses the half-open y-interval rule so a ray through a shared vertex of
    /// two adjacent edges is counted exactly once.
    #[must_use]
    pub fn right_point_intersections(&self, p: Point) -> usize {
        let (a, b) = (self.start, self.end);
        if (a.y > p.y) == (b.y > p.y) {
            return 0;
        }
        let t = (p.y - a.y) / (b.y - a.y);
        let x = a.x + t * (b.x - a.x);
        usize::from(x >= p.x)
    }
}

impl Transform2 for LineSegment {
    fn translate(&self, offset: Vector) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    fn scale(&self, factor: f64, origin: Point) -> Self {
        Self::new(
            self.start.scale_about(factor, origin),
            self.end.scale_about(factor, origin),
        )
    }

    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self {
        let o = origin.unwrap_or_else(|| self.center());
        Self::new(
            self.start.rotate_about(angle, o),
            self.end.rotate_about(angle, o),
        )
    }

    fn flip(&self, axis: Axis) -> Self {
        Self::new(self.start.flip_axis(axis), self.end.flip_axis(axis))
    }

    fn center(&self) -> Point {
        self.midpoint()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn length_and_midpoint() {
        let l = seg(0.0, 0.0, 3.0, 4.0);
        assert!((l.length() - 5.0).abs() < TOLERANCE);
        assert!(l.midpoint().distance_to(Point::new(1.5, 2.0)) < TOLERANCE);
    }

    #[test]
    fn crossing_segments() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        assert!(a.crosses(&b));
        assert!(b.crosses(&a));
    }

    #[test]
    fn parallel_segments_do_not_cross() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(0.0, 1.0, 1.0, 1.0);
        assert!(!a.crosses(&b));
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(2.0, 1.0, 3.0, -1.0);
        assert!(!a.crosses(&b));
    }

    #[test]
    fn ray_hits_segment_to_the_right() {
        let l = seg(2.0, -1.0, 2.0, 1.0);
        assert_eq!(l.right_point_intersections(Point::new(0.0, 0.0)), 1);
        assert_eq!(l.right_point_intersections(Point::new(3.0, 0.0)), 0);
    }

    #[test]
    fn ray_misses_segment_above() {
        let l = seg(2.0, 1.0, 2.0, 3.0);
        assert_eq!(l.right_point_intersections(Point::new(0.0, 0.0)), 0);
    }

    #[test]
    fn ray_through_shared_vertex_counts_once() {
        // Two edges meeting at (1, 0); a ray at y=0 must cross the pair
        // exactly once in total.
        let up = seg(1.0, 0.0, 1.0, 2.0);
        let down = seg(1.0, -2.0, 1.0, 0.0);
        let p = Point::new(0.0, 0.0);
        let total = up.right_point_intersections(p) + down.right_point_intersections(p);
        assert_eq!(total, 1);
    }

    #[test]
    fn length_sampling_excludes_the_end() {
        let l = seg(0.0, 0.0, 4.0, 0.0);
        let pts = l.sample_on_length(1.0);
        assert_eq!(pts.len(), 4);
        assert!(pts[0].distance_to(l.start) < TOLERANCE);
        assert!(pts[3].distance_to(Point::new(3.0, 0.0)) < TOLERANCE);
        // A fractional count rounds up.
        assert_eq!(seg(0.0, 0.0, 4.5, 0.0).sample_on_length(1.0).len(), 5);
    }

    #[test]
    fn sample_points_includes_endpoints() {
        let l = seg(0.0, 0.0, 1.0, 0.0);
        let pts = l.sample_points(3);
        assert_eq!(pts.len(), 3);
        assert!(pts[0].distance_to(l.start) < TOLERANCE);
        assert!(pts[2].distance_to(l.end) < TOLERANCE);
    }
}

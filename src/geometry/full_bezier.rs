use crate::math::{find_roots_cubic, find_roots_quadratic, Point, Vector, TOLERANCE};

use super::{Axis, LineSegment, PartialBezier, PointOps, RectSolid, Transform2};

/// Positive abscissae and weights of the 16-point Gauss-Legendre rule
/// on [-1, 1]; the negative half follows by symmetry.
const GAUSS_LEGENDRE_16: [(f64, f64); 8] = [
    (0.095_012_509_837_637_44, 0.189_450_610_455_068_5),
    (0.281_603_550_779_258_9, 0.182_603_415_044_923_6),
    (0.458_016_777_657_227_4, 0.169_156_519_395_002_5),
    (0.617_876_244_402_643_7, 0.149_595_988_816_576_7),
    (0.755_404_408_355_003_0, 0.124_628_971_255_533_9),
    (0.865_631_202_387_831_7, 0.095_158_511_682_492_78),
    (0.944_575_023_073_232_6, 0.062_253_523_938_647_89),
    (0.989_400_934_991_649_9, 0.027_152_459_411_754_095),
];

/// A standalone cubic Bezier curve: explicit start point plus one segment.
///
/// Ring shapes store only [`PartialBezier`] values; this type is the
/// materialized per-segment view used for sampling and metric queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullBezier {
    pub start_point: Point,
    pub bezier: PartialBezier,
}

impl FullBezier {
    #[must_use]
    pub fn new(start_point: Point, bezier: PartialBezier) -> Self {
        Self {
            start_point,
            bezier,
        }
    }

    /// Curve point at parameter `t` via the Bernstein form.
    #[must_use]
    pub fn sample_t(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.start_point.x
                + b1 * self.bezier.handle1.x
                + b2 * self.bezier.handle2.x
                + b3 * self.bezier.end_point.x,
            b0 * self.start_point.y
                + b1 * self.bezier.handle1.y
                + b2 * self.bezier.handle2.y
                + b3 * self.bezier.end_point.y,
        )
    }

    /// `n` interior points at evenly spaced parameters, endpoints excluded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_points(&self, n: usize) -> Vec<Point> {
        (1..=n)
            .map(|i| self.sample_t(i as f64 / (n + 1) as f64))
            .collect()
    }

    /// Points along the curve at `min_per_unit` density, start included and
    /// end excluded so chained segments tile a ring without duplicates.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point> {
        let amount = crate::math::sample_amount(self.outline_length(), min_per_unit);
        (0..amount)
            .map(|i| self.sample_t(i as f64 / amount as f64))
            .collect()
    }

    /// Polyline approximation with `segments + 1` points, endpoints included.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn polyline(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.sample_t(i as f64 / segments as f64))
            .collect()
    }

    /// Tight bounding box including curve extrema, not just control points.
    ///
    /// Extrema are the roots of the derivative (a quadratic per axis)
    /// restricted to the open parameter interval.
    #[must_use]
    pub fn bbox(&self) -> RectSolid {
        let (p0, p1, p2, p3) = (
            self.start_point,
            self.bezier.handle1,
            self.bezier.handle2,
            self.bezier.end_point,
        );

        let mut xs = vec![p0.x, p3.x];
        let mut ys = vec![p0.y, p3.y];

        let a3x = -p0.x + 3.0 * (p1.x - p2.x) + p3.x;
        let a2x = 3.0 * (p0.x - 2.0 * p1.x + p2.x);
        let a1x = 3.0 * (p1.x - p0.x);
        for t in find_roots_quadratic(3.0 * a3x, 2.0 * a2x, a1x) {
            if t > 0.0 && t < 1.0 {
                xs.push(self.sample_t(t).x);
            }
        }

        let a3y = -p0.y + 3.0 * (p1.y - p2.y) + p3.y;
        let a2y = 3.0 * (p0.y - 2.0 * p1.y + p2.y);
        let a1y = 3.0 * (p1.y - p0.y);
        for t in find_roots_quadratic(3.0 * a3y, 2.0 * a2y, a1y) {
            if t > 0.0 && t < 1.0 {
                ys.push(self.sample_t(t).y);
            }
        }

        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        RectSolid::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Derivative vector at parameter `t` (hodograph evaluation).
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector {
        let u = 1.0 - t;
        (self.bezier.handle1 - self.start_point) * (3.0 * u * u)
            + (self.bezier.handle2 - self.bezier.handle1) * (6.0 * u * t)
            + (self.bezier.end_point - self.bezier.handle2) * (3.0 * t * t)
    }

    /// Arc length by 16-point Gauss-Legendre quadrature of the speed
    /// integrand. Exact for straight segments, sub-1e-9 relative error for
    /// smooth arcs.
    #[must_use]
    pub fn outline_length(&self) -> f64 {
        GAUSS_LEGENDRE_16
            .iter()
            .map(|&(x, w)| {
                let hi = self.derivative(0.5 + 0.5 * x).norm();
                let lo = self.derivative(0.5 - 0.5 * x).norm();
                0.5 * w * (hi + lo)
            })
            .sum()
    }

    /// Crossing count of the rightward horizontal ray from `p` with this
    /// curve: the cubic `y(t) = p.y` solved on the half-open `[0, 1)`,
    /// keeping solutions at or right of `p`.
    ///
    /// The half-open interval is the ring analog of the shared-vertex rule
    /// for line segments: a root at a segment junction belongs to the
    /// segment that starts there, never to both.
    #[must_use]
    pub fn right_point_intersections(&self, p: Point) -> usize {
        let (p0, p1, p2, p3) = (
            self.start_point,
            self.bezier.handle1,
            self.bezier.handle2,
            self.bezier.end_point,
        );
        let a = p3.y - 3.0 * p2.y + 3.0 * p1.y - p0.y;
        let b = 3.0 * p2.y - 6.0 * p1.y + 3.0 * p0.y;
        let c = 3.0 * p1.y - 3.0 * p0.y;
        let d = p0.y - p.y;

        find_roots_cubic(a, b, c, d)
            .into_iter()
            .filter(|&t| t > -TOLERANCE && t < 1.0 - TOLERANCE)
            .filter(|&t| self.sample_t(t.max(0.0)).x >= p.x)
            .count()
    }

    /// Sampled curve-curve crossing test, gated by bounding boxes.
    #[must_use]
    pub fn outline_intersects(&self, other: &FullBezier) -> bool {
        if !self.bbox().overlaps(&other.bbox()) {
            return false;
        }
        let mine = self.polyline(16);
        let theirs = other.polyline(16);
        mine.windows(2).any(|a| {
            let sa = LineSegment::new(a[0], a[1]);
            theirs
                .windows(2)
                .any(|b| sa.crosses(&LineSegment::new(b[0], b[1])))
        })
    }

    /// Applies `f` to the start point and every segment point.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self::new(f(self.start_point), self.bezier.map_points(&f))
    }
}

impl Transform2 for FullBezier {
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
        self.bbox().center()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::SolidShape;

    fn curve() -> FullBezier {
        FullBezier::new(
            Point::new(0.0, 0.0),
            PartialBezier::new(
                Point::new(1.0, 2.0),
                Point::new(3.0, 2.0),
                Point::new(4.0, 0.0),
            ),
        )
    }

    fn straight() -> FullBezier {
        // Handles on the chord: an exactly straight cubic.
        FullBezier::new(
            Point::new(0.0, 0.0),
            PartialBezier::new(
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(3.0, 0.0),
            ),
        )
    }

    #[test]
    fn endpoints_at_parameter_bounds() {
        let c = curve();
        assert!(c.sample_t(0.0).distance_to(c.start_point) < TOLERANCE);
        assert!(c.sample_t(1.0).distance_to(c.bezier.end_point) < TOLERANCE);
    }

    #[test]
    fn bbox_covers_arch_extremum() {
        let b = curve().bbox();
        // The arch rises to y = 1.5 at t = 0.5, above both endpoints.
        assert!((b.max_y() - 1.5).abs() < 1e-9);
        assert!((b.x - 0.0).abs() < TOLERANCE);
        assert!((b.max_x() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn bbox_contains_every_sample() {
        let c = curve();
        let b = c.bbox();
        for p in c.polyline(50) {
            assert!(b.contains(p));
        }
    }

    fn sampled_length(c: &FullBezier, segments: usize) -> f64 {
        c.polyline(segments)
            .windows(2)
            .map(|w| w[0].distance_to(w[1]))
            .sum()
    }

    #[test]
    fn straight_segment_length_is_chord() {
        assert!((straight().outline_length() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn quadrature_length_matches_dense_sampling() {
        let c = curve();
        let sampled = sampled_length(&c, 2000);
        assert!((c.outline_length() - sampled).abs() / sampled < 1e-4);
    }

    #[test]
    fn ray_crossings_against_arch() {
        let c = curve();
        // At y = 1 the arch spans x in about [0.75, 3.25]. Left of it, both
        // sides cross; inside it, only the far side does.
        assert_eq!(c.right_point_intersections(Point::new(0.5, 1.0)), 2);
        assert_eq!(c.right_point_intersections(Point::new(-1.0, 1.0)), 2);
        assert_eq!(c.right_point_intersections(Point::new(1.0, 1.0)), 1);
        // Above the arch: no crossing.
        assert_eq!(c.right_point_intersections(Point::new(0.5, 2.0)), 0);
    }

    #[test]
    fn ray_through_segment_junction_counts_once() {
        // Two chained segments meeting at (2, 0); the junction root belongs
        // to the second segment only.
        let first = FullBezier::new(
            Point::new(0.0, -2.0),
            PartialBezier::new(
                Point::new(0.5, -1.0),
                Point::new(1.5, -0.5),
                Point::new(2.0, 0.0),
            ),
        );
        let second = FullBezier::new(
            Point::new(2.0, 0.0),
            PartialBezier::new(
                Point::new(2.5, 0.5),
                Point::new(3.5, 1.0),
                Point::new(4.0, 2.0),
            ),
        );
        let p = Point::new(0.0, 0.0);
        let total = first.right_point_intersections(p) + second.right_point_intersections(p);
        assert_eq!(total, 1);
    }

    #[test]
    fn crossing_curves_intersect() {
        let c = curve();
        let vertical = FullBezier::new(
            Point::new(2.0, -1.0),
            PartialBezier::new(
                Point::new(2.0, 0.0),
                Point::new(2.0, 1.0),
                Point::new(2.0, 3.0),
            ),
        );
        assert!(c.outline_intersects(&vertical));
        let far = vertical.translate(Vector::new(10.0, 0.0));
        assert!(!c.outline_intersects(&far));
    }

    #[test]
    fn rotation_preserves_length() {
        let c = curve();
        let r = c.rotate(0.7, None);
        assert!((r.outline_length() - c.outline_length()).abs() < 1e-6);
    }
}

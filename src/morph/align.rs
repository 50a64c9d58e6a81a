//! Vertex correspondence for polygon morphing.
//!
//! Two rings interpolate pointwise, which requires equal vertex counts and a
//! sensible pairing. Counts are equalized by bisecting the longest edge of
//! the smaller ring (original vertices survive), then the start offset of the
//! second ring is chosen to minimize total travel distance.

use crate::geometry::{PointOps, PolygonSolid, Transform2};
use crate::math::Point;

/// Grows `ring` to `target` vertices by repeatedly splitting its longest
/// edge at the midpoint. Existing vertices are preserved.
#[must_use]
pub fn equalize_to(ring: &PolygonSolid, target: usize) -> PolygonSolid {
    let mut points = ring.points().to_vec();
    if points.is_empty() {
        return ring.clone();
    }
    while points.len() < target {
        let n = points.len();
        let longest = (0..n)
            .max_by(|&i, &j| {
                let li = points[i].distance_to(points[(i + 1) % n]);
                let lj = points[j].distance_to(points[(j + 1) % n]);
                li.total_cmp(&lj)
            })
            .unwrap_or(0);
        let midpoint = points[longest].lerp_to(points[(longest + 1) % n], 0.5);
        points.insert(longest + 1, midpoint);
    }
    PolygonSolid::new(points)
}

/// Start offset of `b` minimizing the summed pointwise distance to `a`.
///
/// Both rings must have the same vertex count; the search is brute force
/// over all offsets.
#[must_use]
pub fn best_rotation(a: &PolygonSolid, b: &PolygonSolid) -> usize {
    let n = a.points().len();
    if n == 0 || n != b.points().len() {
        return 0;
    }
    (0..n)
        .min_by(|&r, &s| travel_cost(a, b, r).total_cmp(&travel_cost(a, b, s)))
        .unwrap_or(0)
}

fn travel_cost(a: &PolygonSolid, b: &PolygonSolid, offset: usize) -> f64 {
    let n = a.points().len();
    (0..n)
        .map(|i| a.points()[i].distance_to(b.points()[(i + offset) % n]))
        .sum()
}

/// Pointwise interpolation of two already-aligned rings.
///
/// Counts must match; extra vertices of the longer ring are ignored.
#[must_use]
pub fn lerp_aligned(from: &PolygonSolid, to: &PolygonSolid, t: f64) -> PolygonSolid {
    PolygonSolid::new(
        from.points()
            .iter()
            .zip(to.points())
            .map(|(a, b)| a.lerp_to(*b, t))
            .collect(),
    )
}

/// Prepares `(from, to)` for pointwise interpolation: equal counts, and
/// `to` re-started at the offset minimizing travel.
///
/// An empty ring is stood in by the other ring collapsed to its center, so
/// the pair animates as a grow or shrink.
#[must_use]
pub fn aligned_pair(from: &PolygonSolid, to: &PolygonSolid) -> (PolygonSolid, PolygonSolid) {
    if from.points().is_empty() || to.points().is_empty() {
        let collapsed = |of: &PolygonSolid, center: Point| {
            PolygonSolid::new(vec![center; of.points().len()])
        };
        if from.points().is_empty() && to.points().is_empty() {
            return (from.clone(), to.clone());
        }
        if from.points().is_empty() {
            return (collapsed(to, to.center()), to.clone());
        }
        return (from.clone(), collapsed(from, from.center()));
    }

    let target = from.points().len().max(to.points().len());
    let from_eq = equalize_to(from, target);
    let to_eq = equalize_to(to, target);
    let offset = best_rotation(&from_eq, &to_eq);
    let to_aligned = to_eq.rotated_ring(offset);
    (from_eq, to_aligned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::SolidShape;
    use crate::math::TOLERANCE;

    fn triangle() -> PolygonSolid {
        PolygonSolid::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ])
    }

    #[test]
    fn equalize_adds_exact_count() {
        let grown = equalize_to(&triangle(), 5);
        assert_eq!(grown.points().len(), 5);
    }

    #[test]
    fn equalize_preserves_original_vertices() {
        let original = triangle();
        let grown = equalize_to(&original, 5);
        for p in original.points() {
            assert!(grown.points().iter().any(|q| q.distance_to(*p) < TOLERANCE));
        }
    }

    #[test]
    fn equalize_preserves_geometry() {
        let original = triangle();
        let grown = equalize_to(&original, 7);
        assert!((grown.area() - original.area()).abs() < TOLERANCE);
        assert!((grown.outline_length() - original.outline_length()).abs() < TOLERANCE);
    }

    #[test]
    fn equalize_splits_longest_edge_first() {
        // The hypotenuse (length 5) splits before the legs.
        let grown = equalize_to(&triangle(), 4);
        let midpoint = Point::new(2.0, 1.5);
        assert!(grown.points().iter().any(|q| q.distance_to(midpoint) < TOLERANCE));
    }

    #[test]
    fn best_rotation_recovers_ring_shift() {
        let a = PolygonSolid::make_ngon(8).unwrap();
        let shifted = a.rotated_ring(3);
        // Rotating the shifted ring by 5 more brings it back in phase.
        let offset = best_rotation(&a, &shifted);
        let realigned = shifted.rotated_ring(offset);
        for (p, q) in a.points().iter().zip(realigned.points()) {
            assert!(p.distance_to(*q) < TOLERANCE);
        }
    }

    #[test]
    fn aligned_pair_minimizes_identity_travel() {
        let a = PolygonSolid::make_ngon(6).unwrap();
        let (from, to) = aligned_pair(&a, &a.rotated_ring(2));
        assert_eq!(from.points().len(), to.points().len());
        for (p, q) in from.points().iter().zip(to.points()) {
            assert!(p.distance_to(*q) < TOLERANCE);
        }
    }

    #[test]
    fn aligned_pair_with_empty_ring_collapses() {
        let a = triangle();
        let empty = PolygonSolid::new(Vec::new());
        let (from, to) = aligned_pair(&empty, &a);
        assert_eq!(from.points().len(), a.points().len());
        let c = a.center();
        for p in from.points() {
            assert!(p.distance_to(c) < TOLERANCE);
        }
        assert_eq!(to, a);
    }
}

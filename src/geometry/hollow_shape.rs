use std::cell::RefCell;
use std::fmt;

use crate::error::Result;
use crate::math::{Point, Vector};
use crate::render::{PathAction, PathSink};

use super::{Axis, PolygonSolid, RectSolid, SolidShape, Transform2, TriangleSolid};

/// A solid outline with hole outlines punched out.
///
/// Holes are assumed to lie inside the exterior and not overlap each other;
/// containment follows the even-odd rule, so crossing counts from all rings
/// simply add up.
pub struct HollowShape<T: SolidShape> {
    exterior: T,
    holes: Vec<T>,
    // Last (quality, mesh) pair; a different quality recomputes.
    triangulation: RefCell<Option<(f64, Vec<TriangleSolid>)>>,
}

impl<T: SolidShape> HollowShape<T> {
    #[must_use]
    pub fn new(exterior: T, holes: Vec<T>) -> Self {
        Self {
            exterior,
            holes,
            triangulation: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn exterior(&self) -> &T {
        &self.exterior
    }

    #[must_use]
    pub fn holes(&self) -> &[T] {
        &self.holes
    }

    /// Adds a hole, invalidating the cached triangulation.
    pub fn push_hole(&mut self, hole: T) {
        self.holes.push(hole);
        self.triangulation = RefCell::new(None);
    }

    /// Swaps the exterior outline, invalidating the cached triangulation.
    pub fn replace_exterior(&mut self, exterior: T) {
        self.exterior = exterior;
        self.triangulation = RefCell::new(None);
    }

    /// Exterior area minus the summed hole areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.exterior.area() - self.holes.iter().map(SolidShape::area).sum::<f64>()
    }

    /// Total boundary length, holes included.
    #[must_use]
    pub fn outline_length(&self) -> f64 {
        self.exterior.outline_length()
            + self.holes.iter().map(SolidShape::outline_length).sum::<f64>()
    }

    #[must_use]
    pub fn bbox(&self) -> RectSolid {
        self.exterior.bbox()
    }

    /// Ray crossings summed over every ring.
    #[must_use]
    pub fn right_point_intersections(&self, p: Point) -> usize {
        self.exterior.right_point_intersections(p)
            + self
                .holes
                .iter()
                .map(|h| h.right_point_intersections(p))
                .sum::<usize>()
    }

    /// Even-odd containment: inside the exterior but outside every hole.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.right_point_intersections(p) % 2 == 1
    }

    /// Polygonizes every ring at the given fidelity.
    #[must_use]
    pub fn approximated(&self, quality: f64) -> HollowShape<PolygonSolid> {
        HollowShape::new(
            self.exterior.approximated(quality),
            self.holes.iter().map(|h| h.approximated(quality)).collect(),
        )
    }

    /// Triangulates the solid region between exterior and holes.
    ///
    /// The mesh for the most recent `quality` is cached.
    ///
    /// # Errors
    ///
    /// Returns an error if a ring cannot be triangulated.
    pub fn triangulate(&self, quality: f64) -> Result<Vec<TriangleSolid>> {
        if let Some((cached_quality, mesh)) = self.triangulation.borrow().as_ref() {
            if *cached_quality == quality {
                return Ok(mesh.clone());
            }
        }
        let exterior = self.exterior.approximated(quality);
        let holes: Vec<Vec<Point>> = self
            .holes
            .iter()
            .map(|h| h.approximated(quality).points().to_vec())
            .collect();
        let triangles = crate::tessellation::triangulate_with_holes(exterior.points(), &holes)?;
        *self.triangulation.borrow_mut() = Some((quality, triangles.clone()));
        Ok(triangles)
    }

    /// Outline samples from the exterior and every hole ring.
    #[must_use]
    pub fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point> {
        let mut out = self.exterior.sample_on_length(min_per_unit);
        for h in &self.holes {
            out.extend(h.sample_on_length(min_per_unit));
        }
        out
    }

    /// Deterministic interior points over the hole-aware triangulation.
    ///
    /// # Errors
    ///
    /// Returns an error if a ring cannot be triangulated.
    pub fn sample_on_area(&self, min_per_unit: f64, quality: f64) -> Result<Vec<Point>> {
        let mut out = Vec::new();
        for triangle in self.triangulate(quality)? {
            let amount = crate::math::sample_amount(triangle.area(), min_per_unit);
            out.extend(triangle.sample_points(amount));
        }
        Ok(out)
    }

    /// Emits every ring as a subpath; filling with the even-odd rule leaves
    /// the holes empty.
    pub fn select_shape(&self, sink: &mut dyn PathSink) {
        self.exterior.select_shape(sink);
        for h in &self.holes {
            h.select_shape(sink);
        }
    }

    pub fn render(&self, sink: &mut dyn PathSink, action: PathAction) {
        sink.begin_path();
        self.select_shape(sink);
        match action {
            PathAction::Fill => sink.fill(),
            PathAction::Stroke => sink.stroke(),
        }
    }
}

impl<T: SolidShape + Clone> Clone for HollowShape<T> {
    // Cached results are not carried over.
    fn clone(&self) -> Self {
        Self::new(self.exterior.clone(), self.holes.clone())
    }
}

impl<T: SolidShape + fmt::Debug> fmt::Debug for HollowShape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HollowShape")
            .field("exterior", &self.exterior)
            .field("holes", &self.holes)
            .finish()
    }
}

impl<T: SolidShape + PartialEq> PartialEq for HollowShape<T> {
    fn eq(&self, other: &Self) -> bool {
        self.exterior == other.exterior && self.holes == other.holes
    }
}

impl<T: SolidShape> Transform2 for HollowShape<T> {
    fn translate(&self, offset: Vector) -> Self {
        Self::new(
            self.exterior.translate(offset),
            self.holes.iter().map(|h| h.translate(offset)).collect(),
        )
    }

    fn scale(&self, factor: f64, origin: Point) -> Self {
        Self::new(
            self.exterior.scale(factor, origin),
            self.holes.iter().map(|h| h.scale(factor, origin)).collect(),
        )
    }

    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self {
        // Holes rotate around the shared origin, not their own centers.
        let o = origin.unwrap_or_else(|| self.center());
        Self::new(
            self.exterior.rotate(angle, Some(o)),
            self.holes.iter().map(|h| h.rotate(angle, Some(o))).collect(),
        )
    }

    fn flip(&self, axis: Axis) -> Self {
        Self::new(
            self.exterior.flip(axis),
            self.holes.iter().map(|h| h.flip(axis)).collect(),
        )
    }

    fn center(&self) -> Point {
        self.exterior.center()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::CircleSolid;
    use crate::math::TOLERANCE;
    use std::f64::consts::PI;

    fn square(size: f64, offset: Vector) -> PolygonSolid {
        PolygonSolid::new(vec![
            Point::new(0.0, 0.0) + offset,
            Point::new(size, 0.0) + offset,
            Point::new(size, size) + offset,
            Point::new(0.0, size) + offset,
        ])
    }

    fn frame() -> HollowShape<PolygonSolid> {
        HollowShape::new(
            square(10.0, Vector::zeros()),
            vec![square(2.0, Vector::new(4.0, 4.0))],
        )
    }

    #[test]
    fn area_subtracts_holes() {
        assert!((frame().area() - 96.0).abs() < TOLERANCE);
    }

    #[test]
    fn outline_length_sums_all_rings() {
        assert!((frame().outline_length() - 48.0).abs() < TOLERANCE);
    }

    #[test]
    fn contains_excludes_hole_interior() {
        let f = frame();
        assert!(f.contains(Point::new(1.0, 1.0)));
        assert!(!f.contains(Point::new(5.0, 5.0)));
        assert!(!f.contains(Point::new(11.0, 5.0)));
    }

    #[test]
    fn triangulation_area_matches_difference() {
        let f = frame();
        let total: f64 = f
            .triangulate(1.0)
            .unwrap()
            .iter()
            .map(TriangleSolid::area)
            .sum();
        assert!((total - f.area()).abs() < 1e-9);
    }

    #[test]
    fn push_hole_invalidates_triangulation() {
        let mut f = frame();
        let before: f64 = f.triangulate(1.0).unwrap().iter().map(TriangleSolid::area).sum();
        f.push_hole(square(1.0, Vector::new(1.0, 1.0)));
        let after: f64 = f.triangulate(1.0).unwrap().iter().map(TriangleSolid::area).sum();
        assert!((before - after - 1.0).abs() < 1e-9);
    }

    #[test]
    fn circular_rings_work_through_approximation() {
        let annulus = HollowShape::new(
            CircleSolid::new(Point::origin(), 2.0),
            vec![CircleSolid::new(Point::origin(), 1.0)],
        );
        assert!((annulus.area() - 3.0 * PI).abs() < TOLERANCE);
        assert!(annulus.contains(Point::new(1.5, 0.0)));
        assert!(!annulus.contains(Point::new(0.5, 0.0)));

        let total: f64 = annulus
            .triangulate(4.0)
            .unwrap()
            .iter()
            .map(TriangleSolid::area)
            .sum();
        // Both rings are polygonized, so the triangulated area undershoots.
        assert!((total - annulus.area()).abs() / annulus.area() < 0.05);
    }

    #[test]
    fn sampling_respects_the_hole() {
        let f = frame();
        let outline = f.sample_on_length(1.0);
        // 40 exterior points plus 8 hole points.
        assert_eq!(outline.len(), 48);

        let interior = f.sample_on_area(0.5, 1.0).unwrap();
        assert!(!interior.is_empty());
        for p in interior {
            assert!(f.contains(p));
        }
    }

    #[test]
    fn triangulation_cache_tracks_quality() {
        let annulus = HollowShape::new(
            CircleSolid::new(Point::origin(), 2.0),
            vec![CircleSolid::new(Point::origin(), 1.0)],
        );
        let coarse = annulus.triangulate(1.0).unwrap().len();
        let fine = annulus.triangulate(4.0).unwrap().len();
        assert!(fine > coarse);
        // Re-asking at the cached quality returns the same mesh.
        assert_eq!(annulus.triangulate(4.0).unwrap().len(), fine);
        assert_eq!(annulus.triangulate(1.0).unwrap().len(), coarse);
    }

    #[test]
    fn transforms_carry_holes_along() {
        // The hole interior lands at x in (9, 11) after the shift.
        let f = frame().translate(Vector::new(5.0, 0.0));
        assert!(!f.contains(Point::new(10.0, 5.0)));
        assert!(f.contains(Point::new(6.0, 5.0)));

        let doubled = frame().scale(2.0, Point::origin());
        assert!((doubled.area() - 4.0 * 96.0).abs() < TOLERANCE);
    }

    #[test]
    fn rotation_spins_holes_about_shared_origin() {
        let f = HollowShape::new(
            square(10.0, Vector::zeros()),
            vec![square(2.0, Vector::new(6.0, 4.0))],
        );
        let r = f.rotate(PI, None);
        // The hole lands mirrored through the exterior's center.
        assert!(!r.contains(Point::new(3.0, 5.0)));
        assert!(r.contains(Point::new(8.0, 5.0)));
    }
}

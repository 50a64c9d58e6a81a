use std::cell::OnceCell;
use std::f64::consts::PI;
use std::fmt;

use crate::error::{GeometryError, Result};
use crate::index::{BboxCollider, IntervalCollider};
use crate::math::{Point, Vector};
use crate::render::PathSink;

use super::{
    Axis, LineSegment, PointOps, RectSolid, ShapeRelation, SolidShape, Transform2, TriangleSolid,
};

/// Per-instance lazy results. Any mutation drops the whole struct.
#[derive(Default)]
struct PolygonCache {
    bbox: OnceCell<RectSolid>,
    area: OnceCell<f64>,
    outline_length: OnceCell<f64>,
    edge_collider: OnceCell<BboxCollider<LineSegment>>,
    ray_index: OnceCell<IntervalCollider<LineSegment>>,
    triangulation: OnceCell<Vec<TriangleSolid>>,
}

/// A closed ring of vertices with implicit closing edge.
///
/// Derived quantities (bounding box, area, edge indexes, triangulation) are
/// computed on first use and cached until the ring is mutated.
pub struct PolygonSolid {
    points: Vec<Point>,
    cache: PolygonCache,
}

impl PolygonSolid {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            cache: PolygonCache::default(),
        }
    }

    /// Regular `corners`-gon inscribed in the unit circle.
    ///
    /// # Errors
    ///
    /// Fails for fewer than 3 corners.
    #[allow(clippy::cast_precision_loss)]
    pub fn make_ngon(corners: usize) -> Result<Self> {
        if corners < 3 {
            return Err(GeometryError::InvalidInput(format!(
                "a polygon needs at least 3 corners, got {corners}"
            ))
            .into());
        }
        let points = (0..corners)
            .map(|i| {
                let angle = i as f64 / corners as f64 * 2.0 * PI;
                Point::new(angle.cos(), angle.sin())
            })
            .collect();
        Ok(Self::new(points))
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Appends a vertex, invalidating every cached result.
    pub fn push_point(&mut self, p: Point) {
        self.points.push(p);
        self.cache = PolygonCache::default();
    }

    /// Replaces the vertex at `index`, invalidating every cached result.
    ///
    /// # Errors
    ///
    /// Fails when `index` is out of bounds.
    pub fn set_point(&mut self, index: usize, p: Point) -> Result<()> {
        let len = self.points.len();
        let slot = self.points.get_mut(index).ok_or_else(|| {
            GeometryError::InvalidInput(format!("vertex index {index} out of bounds for {len}"))
        })?;
        *slot = p;
        self.cache = PolygonCache::default();
        Ok(())
    }

    /// The same ring started at vertex `offset`.
    #[must_use]
    pub fn rotated_ring(&self, offset: usize) -> Self {
        if self.points.is_empty() {
            return Self::new(Vec::new());
        }
        let offset = offset % self.points.len();
        let mut points = self.points[offset..].to_vec();
        points.extend_from_slice(&self.points[..offset]);
        Self::new(points)
    }

    /// Applies `f` to every vertex.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self::new(self.points.iter().map(|&p| f(p)).collect())
    }

    /// Edge segments in ring order, including the closing edge.
    #[must_use]
    pub fn lines(&self) -> Vec<LineSegment> {
        let n = self.points.len();
        (0..n)
            .map(|i| LineSegment::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    fn edge_collider(&self) -> &BboxCollider<LineSegment> {
        self.cache
            .edge_collider
            .get_or_init(|| BboxCollider::new(self.lines(), LineSegment::bbox))
    }

    fn ray_index(&self) -> &IntervalCollider<LineSegment> {
        self.cache
            .ray_index
            .get_or_init(|| IntervalCollider::new(self.lines(), |l| (l.min_y(), l.max_y())))
    }

    /// Whether any edge of `self` crosses any edge of `other`.
    #[must_use]
    pub fn outline_intersects(&self, other: &PolygonSolid) -> bool {
        if self.points.is_empty() || other.points.is_empty() {
            return false;
        }
        let collider = self.edge_collider();
        other
            .lines()
            .iter()
            .any(|l| collider.any_overlapping(&l.bbox(), |e| e.crosses(l)))
    }
}

impl Clone for PolygonSolid {
    // Cached results are not carried over.
    fn clone(&self) -> Self {
        Self::new(self.points.clone())
    }
}

impl fmt::Debug for PolygonSolid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolygonSolid")
            .field("points", &self.points)
            .finish()
    }
}

impl PartialEq for PolygonSolid {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Transform2 for PolygonSolid {
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

impl SolidShape for PolygonSolid {
    /// Shoelace area; orientation-independent.
    fn area(&self) -> f64 {
        *self.cache.area.get_or_init(|| {
            let n = self.points.len();
            let twice: f64 = (0..n)
                .map(|i| {
                    let curr = self.points[i];
                    let next = self.points[(i + 1) % n];
                    curr.x * next.y - curr.y * next.x
                })
                .sum();
            twice.abs() / 2.0
        })
    }

    fn outline_length(&self) -> f64 {
        *self
            .cache
            .outline_length
            .get_or_init(|| self.lines().iter().map(LineSegment::length).sum())
    }

    fn bbox(&self) -> RectSolid {
        *self.cache.bbox.get_or_init(|| {
            let Some(&first) = self.points.first() else {
                return RectSolid::new(0.0, 0.0, 0.0, 0.0);
            };
            let mut min = first;
            let mut max = first;
            for p in &self.points[1..] {
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
            }
            RectSolid::from_corners(min, max)
        })
    }

    fn right_point_intersections(&self, p: Point) -> usize {
        self.ray_index()
            .stab(p.y)
            .map(|l| l.right_point_intersections(p))
            .sum()
    }

    fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point> {
        self.lines()
            .iter()
            .flat_map(|l| l.sample_on_length(min_per_unit))
            .collect()
    }

    fn approximated(&self, _quality: f64) -> PolygonSolid {
        self.clone()
    }

    // The mesh does not depend on `quality` (the ring is its own
    // polygonization), so a single cached result is exact.
    fn triangulate(&self, _quality: f64) -> Result<Vec<TriangleSolid>> {
        if let Some(t) = self.cache.triangulation.get() {
            return Ok(t.clone());
        }
        let triangles = crate::tessellation::triangulate_polygon(&self.points)?;
        let _ = self.cache.triangulation.set(triangles.clone());
        Ok(triangles)
    }

    fn relation_to(&self, other: &Self) -> ShapeRelation {
        let (Some(&self_first), Some(&other_first)) = (self.points.first(), other.points.first())
        else {
            return ShapeRelation::Disjoint;
        };
        if self.outline_intersects(other) {
            ShapeRelation::OutlineIntersect
        } else if other.contains(self_first) {
            ShapeRelation::ThisInsideOther
        } else if self.contains(other_first) {
            ShapeRelation::OtherInsideThis
        } else {
            ShapeRelation::Disjoint
        }
    }

    fn select_shape(&self, sink: &mut dyn PathSink) {
        let Some(&first) = self.points.first() else {
            return;
        };
        sink.move_to(first);
        for &p in &self.points[1..] {
            sink.line_to(p);
        }
        sink.close_path();
    }
}

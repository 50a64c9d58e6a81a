use std::cell::OnceCell;
use std::fmt;

use crate::index::{BboxCollider, IntervalCollider};
use crate::math::{Point, Vector};
use crate::render::PathSink;
use crate::tessellation::curve_sample_count;

use super::{
    Axis, FullBezier, PartialBezier, PointOps, PolygonSolid, RectSolid, ShapeRelation,
    SolidShape, Transform2,
};

/// Polygon quality used for metrics that have no closed form on curved
/// outlines (area, triangulation source).
const METRIC_QUALITY: f64 = 2.0;

#[derive(Default)]
struct BezierCache {
    bbox: OnceCell<RectSolid>,
    outline_length: OnceCell<f64>,
    curve_collider: OnceCell<BboxCollider<FullBezier>>,
    ray_index: OnceCell<IntervalCollider<FullBezier>>,
}

/// A closed ring of cubic Bezier segments.
///
/// Each stored segment implicitly starts at the previous segment's end
/// point, so the ring closes by construction. Derived quantities are cached
/// per instance until mutation.
pub struct BezierSolid {
    segments: Vec<PartialBezier>,
    cache: BezierCache,
}

impl BezierSolid {
    #[must_use]
    pub fn new(segments: Vec<PartialBezier>) -> Self {
        Self {
            segments,
            cache: BezierCache::default(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[PartialBezier] {
        &self.segments
    }

    /// Appends a segment, invalidating every cached result.
    pub fn push_segment(&mut self, segment: PartialBezier) {
        self.segments.push(segment);
        self.cache = BezierCache::default();
    }

    /// Materialized per-segment curves, each paired with its start point
    /// (the previous segment's end).
    #[must_use]
    pub fn full_beziers(&self) -> Vec<FullBezier> {
        let n = self.segments.len();
        (0..n)
            .map(|i| {
                let prev = &self.segments[(i + n - 1) % n];
                FullBezier::new(prev.end_point, self.segments[i])
            })
            .collect()
    }

    /// Ring point at global parameter `t` in `[0, 1]`: the segments share
    /// the parameter range evenly, each covering `1/n` of it.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_t(&self, t: f64) -> Option<Point> {
        let n = self.segments.len();
        if n == 0 {
            return None;
        }
        let scaled = t.clamp(0.0, 1.0) * n as f64;
        let index = (scaled.floor() as usize).min(n - 1);
        let local = scaled - index as f64;
        Some(self.full_beziers()[index].sample_t(local))
    }

    /// Applies `f` to every control point of every segment.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self::new(self.segments.iter().map(|b| b.map_points(&f)).collect())
    }

    fn curve_collider(&self) -> &BboxCollider<FullBezier> {
        self.cache
            .curve_collider
            .get_or_init(|| BboxCollider::new(self.full_beziers(), FullBezier::bbox))
    }

    fn ray_index(&self) -> &IntervalCollider<FullBezier> {
        self.cache.ray_index.get_or_init(|| {
            IntervalCollider::new(self.full_beziers(), |b| {
                let bbox = b.bbox();
                (bbox.y, bbox.max_y())
            })
        })
    }

    /// Whether any curve of `self` crosses any curve of `other`.
    #[must_use]
    pub fn outline_intersects(&self, other: &BezierSolid) -> bool {
        if self.segments.is_empty() || other.segments.is_empty() {
            return false;
        }
        let collider = self.curve_collider();
        other
            .full_beziers()
            .iter()
            .any(|b| collider.any_overlapping(&b.bbox(), |c| c.outline_intersects(b)))
    }
}

impl Clone for BezierSolid {
    // Cached results are not carried over.
    fn clone(&self) -> Self {
        Self::new(self.segments.clone())
    }
}

impl fmt::Debug for BezierSolid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BezierSolid")
            .field("segments", &self.segments)
            .finish()
    }
}

impl PartialEq for BezierSolid {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Transform2 for BezierSolid {
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

impl SolidShape for BezierSolid {
    /// Approximate: shoelace area of a fixed-quality polygonization.
    fn area(&self) -> f64 {
        self.approximated(METRIC_QUALITY).area()
    }

    fn outline_length(&self) -> f64 {
        *self.cache.outline_length.get_or_init(|| {
            self.full_beziers()
                .iter()
                .map(FullBezier::outline_length)
                .sum()
        })
    }

    fn bbox(&self) -> RectSolid {
        *self.cache.bbox.get_or_init(|| {
            RectSolid::union_bbox(self.full_beziers().iter().map(FullBezier::bbox))
                .unwrap_or(RectSolid::new(0.0, 0.0, 0.0, 0.0))
        })
    }

    fn right_point_intersections(&self, p: Point) -> usize {
        self.ray_index()
            .stab(p.y)
            .map(|b| b.right_point_intersections(p))
            .sum()
    }

    fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point> {
        self.full_beziers()
            .iter()
            .flat_map(|b| b.sample_on_length(min_per_unit))
            .collect()
    }

    /// Polygonizes with `curve_sample_count(quality)` vertices per segment.
    ///
    /// Each segment contributes its start point plus interior samples; end
    /// points are owned by the following segment, so the ring has no
    /// duplicate vertices.
    #[allow(clippy::cast_precision_loss)]
    fn approximated(&self, quality: f64) -> PolygonSolid {
        let per_segment = curve_sample_count(quality);
        let points = self
            .full_beziers()
            .iter()
            .flat_map(|b| {
                (0..per_segment).map(move |i| b.sample_t(i as f64 / per_segment as f64))
            })
            .collect();
        PolygonSolid::new(points)
    }

    fn relation_to(&self, other: &Self) -> ShapeRelation {
        let (Some(self_first), Some(other_first)) = (self.segments.first(), other.segments.first())
        else {
            return ShapeRelation::Disjoint;
        };
        if !self.bbox().overlaps(&other.bbox()) {
            return ShapeRelation::Disjoint;
        }
        if self.outline_intersects(other) {
            ShapeRelation::OutlineIntersect
        } else if other.contains(self_first.end_point) {
            ShapeRelation::ThisInsideOther
        } else if self.contains(other_first.end_point) {
            ShapeRelation::OtherInsideThis
        } else {
            ShapeRelation::Disjoint
        }
    }

    fn select_shape(&self, sink: &mut dyn PathSink) {
        let Some(last) = self.segments.last() else {
            return;
        };
        sink.move_to(last.end_point);
        for b in &self.segments {
            sink.curve_to(b.handle1, b.handle2, b.end_point);
        }
        sink.close_path();
    }
}

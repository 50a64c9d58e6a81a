//! Shape-to-shape animation.
//!
//! A [`Morph`] pairs two collections of shapes: each target greedily claims
//! the most similar unclaimed compatible source, and unmatched targets grow
//! in from their collapsed start state. A source with no compatible target
//! anywhere shrinks out (and is dropped once the animation completes); a
//! compatible source that simply loses every match is absent from the
//! animation entirely. Expensive pair preparation, polygon vertex alignment
//! in particular, happens once at construction; evaluating a frame is pure
//! interpolation.

pub mod align;

use tracing::debug;

use crate::geometry::{
    BezierSolid, CircleSolid, FullBezier, HollowShape, PointOps, PolygonSolid, RectSolid,
    SolidShape, Transform2, TriangleSolid,
};
use crate::math::Point;

/// Values that can animate toward another value of the same type.
///
/// `similarity` is a matching cost: 0 means identical, larger means more
/// travel. It does not have to be a metric, only comparable.
pub trait Interpolatable: Clone {
    /// State at parameter `t` on the way to `to` (0 = self, 1 = `to`).
    #[must_use]
    fn interpolate(&self, t: f64, to: &Self) -> Self;

    /// The collapsed state this value grows from or shrinks into.
    #[must_use]
    fn to_start(&self) -> Self;

    /// Whether a continuous deformation to `other` exists.
    fn can_interpolate(&self, _other: &Self) -> bool {
        true
    }

    /// Matching cost against `other` (0 = identical).
    fn similarity(&self, other: &Self) -> f64;
}

impl Interpolatable for Point {
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        self.lerp_to(*to, t)
    }

    // A point has no extent to collapse.
    fn to_start(&self) -> Self {
        *self
    }

    fn similarity(&self, other: &Self) -> f64 {
        self.distance_to(*other)
    }
}

impl Interpolatable for CircleSolid {
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        CircleSolid::new(
            self.position.lerp_to(to.position, t),
            crate::math::lerp(self.radius, to.radius, t),
        )
    }

    fn to_start(&self) -> Self {
        CircleSolid::new(self.position, 0.0)
    }

    fn similarity(&self, other: &Self) -> f64 {
        self.position.distance_to(other.position) + (self.radius - other.radius).abs()
    }
}

impl Interpolatable for RectSolid {
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        self.lerp_to(to, t)
    }

    fn to_start(&self) -> Self {
        let c = self.center();
        RectSolid::new(c.x, c.y, 0.0, 0.0)
    }

    fn similarity(&self, other: &Self) -> f64 {
        (self.x - other.x).abs()
            + (self.y - other.y).abs()
            + (self.width - other.width).abs()
            + (self.height - other.height).abs()
    }
}

impl Interpolatable for TriangleSolid {
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        TriangleSolid::new(
            self.a.lerp_to(to.a, t),
            self.b.lerp_to(to.b, t),
            self.c.lerp_to(to.c, t),
        )
    }

    fn to_start(&self) -> Self {
        let c = self.center();
        TriangleSolid::new(c, c, c)
    }

    fn similarity(&self, other: &Self) -> f64 {
        self.a.distance_to(other.a) + self.b.distance_to(other.b) + self.c.distance_to(other.c)
    }
}

impl Interpolatable for PolygonSolid {
    /// Aligns both rings (see [`align`]) and interpolates pointwise. Prefer
    /// a prepared [`Morph`] when evaluating many frames of the same pair.
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        let (from, to_aligned) = align::aligned_pair(self, to);
        align::lerp_aligned(&from, &to_aligned, t)
    }

    fn to_start(&self) -> Self {
        self.scale(0.0, self.center())
    }

    fn similarity(&self, other: &Self) -> f64 {
        self.center().distance_to(other.center())
            + (self.outline_length() - other.outline_length()).abs()
    }
}

impl Interpolatable for FullBezier {
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        FullBezier::new(
            self.start_point.lerp_to(to.start_point, t),
            self.bezier.lerp_to(&to.bezier, t),
        )
    }

    fn to_start(&self) -> Self {
        *self
    }

    fn similarity(&self, other: &Self) -> f64 {
        self.start_point.distance_to(other.start_point)
            + self.bezier.handle1.distance_to(other.bezier.handle1)
            + self.bezier.handle2.distance_to(other.bezier.handle2)
            + self.bezier.end_point.distance_to(other.bezier.end_point)
    }
}

impl Interpolatable for BezierSolid {
    /// Pointwise segment interpolation. Rings with different segment counts
    /// are not deformable into each other; such a call snaps to `to`.
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        if self.segments().len() != to.segments().len() {
            return to.clone();
        }
        BezierSolid::new(
            self.segments()
                .iter()
                .zip(to.segments())
                .map(|(a, b)| a.lerp_to(b, t))
                .collect(),
        )
    }

    fn to_start(&self) -> Self {
        self.scale(0.0, self.center())
    }

    fn can_interpolate(&self, other: &Self) -> bool {
        self.segments().len() == other.segments().len()
    }

    fn similarity(&self, other: &Self) -> f64 {
        if !self.can_interpolate(other) {
            return f64::INFINITY;
        }
        self.segments()
            .iter()
            .zip(other.segments())
            .map(|(a, b)| {
                a.handle1.distance_to(b.handle1)
                    + a.handle2.distance_to(b.handle2)
                    + a.end_point.distance_to(b.end_point)
            })
            .sum()
    }
}

impl<T: SolidShape + Interpolatable> Interpolatable for HollowShape<T> {
    /// Exteriors interpolate directly; holes are greedily matched by
    /// similarity. Unmatched target holes grow in from their start states;
    /// leftover source holes follow the group rule (exit only when no
    /// target hole could pair with them).
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        let exterior = self.exterior().interpolate(t, to.exterior());
        let holes = interpolate_groups(self.holes(), to.holes(), t);
        HollowShape::new(exterior, holes)
    }

    fn to_start(&self) -> Self {
        self.scale(0.0, self.center())
    }

    fn can_interpolate(&self, other: &Self) -> bool {
        self.exterior().can_interpolate(other.exterior())
    }

    fn similarity(&self, other: &Self) -> f64 {
        self.exterior().similarity(other.exterior())
    }
}

/// One frame of the greedy group animation, unprepared.
///
/// Targets claim sources in order. A source no target could ever pair with
/// shrinks out until `t >= 1`; a compatible source that lost every claim is
/// omitted outright.
fn interpolate_groups<T: Interpolatable>(from: &[T], to: &[T], t: f64) -> Vec<T> {
    let mut claimed = vec![false; from.len()];
    let mut out = Vec::with_capacity(to.len());

    for target in to {
        let best = from
            .iter()
            .enumerate()
            .filter(|(i, s)| !claimed[*i] && s.can_interpolate(target))
            .min_by(|(_, a), (_, b)| a.similarity(target).total_cmp(&b.similarity(target)))
            .map(|(i, _)| i);
        match best {
            Some(i) => {
                claimed[i] = true;
                out.push(from[i].interpolate(t, target));
            }
            None => out.push(target.to_start().interpolate(t, target)),
        }
    }

    if t < 1.0 {
        for (i, s) in from.iter().enumerate() {
            if !claimed[i] && !to.iter().any(|target| s.can_interpolate(target)) {
                out.push(s.interpolate(t, &s.to_start()));
            }
        }
    }
    out
}

/// A geometric value of any morphable kind.
///
/// Kinds only deform within themselves: the matcher never pairs, say, a
/// circle with a polygon. Cross-kind transitions happen as a shrink-out plus
/// grow-in instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Circle(CircleSolid),
    Rect(RectSolid),
    Triangle(TriangleSolid),
    Polygon(PolygonSolid),
    Bezier(BezierSolid),
    Hollow(HollowShape<PolygonSolid>),
}

impl Shape {
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Point(_) => 0.0,
            Self::Circle(s) => s.area(),
            Self::Rect(s) => s.area(),
            Self::Triangle(s) => s.area(),
            Self::Polygon(s) => s.area(),
            Self::Bezier(s) => s.area(),
            Self::Hollow(s) => s.area(),
        }
    }

    #[must_use]
    pub fn outline_length(&self) -> f64 {
        match self {
            Self::Point(_) => 0.0,
            Self::Circle(s) => s.outline_length(),
            Self::Rect(s) => s.outline_length(),
            Self::Triangle(s) => s.outline_length(),
            Self::Polygon(s) => s.outline_length(),
            Self::Bezier(s) => s.outline_length(),
            Self::Hollow(s) => s.outline_length(),
        }
    }

    #[must_use]
    pub fn bbox(&self) -> RectSolid {
        match self {
            Self::Point(p) => p.point_bbox(),
            Self::Circle(s) => s.bbox(),
            Self::Rect(s) => s.bbox(),
            Self::Triangle(s) => s.bbox(),
            Self::Polygon(s) => s.bbox(),
            Self::Bezier(s) => s.bbox(),
            Self::Hollow(s) => s.bbox(),
        }
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Point(_) => false,
            Self::Circle(s) => s.contains(p),
            Self::Rect(s) => s.contains(p),
            Self::Triangle(s) => s.contains(p),
            Self::Polygon(s) => s.contains(p),
            Self::Bezier(s) => s.contains(p),
            Self::Hollow(s) => s.contains(p),
        }
    }

    /// Triangulates the shape's interior; points yield nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline cannot be triangulated.
    pub fn triangulate(&self, quality: f64) -> crate::error::Result<Vec<TriangleSolid>> {
        match self {
            Self::Point(_) => Ok(Vec::new()),
            Self::Circle(s) => s.triangulate(quality),
            Self::Rect(s) => s.triangulate(quality),
            Self::Triangle(s) => s.triangulate(quality),
            Self::Polygon(s) => s.triangulate(quality),
            Self::Bezier(s) => s.triangulate(quality),
            Self::Hollow(s) => s.triangulate(quality),
        }
    }

    /// Emits the outline as path commands; points emit nothing.
    pub fn select_shape(&self, sink: &mut dyn crate::render::PathSink) {
        match self {
            Self::Point(_) => {}
            Self::Circle(s) => s.select_shape(sink),
            Self::Rect(s) => s.select_shape(sink),
            Self::Triangle(s) => s.select_shape(sink),
            Self::Polygon(s) => s.select_shape(sink),
            Self::Bezier(s) => s.select_shape(sink),
            Self::Hollow(s) => s.select_shape(sink),
        }
    }

    /// Emits a complete fill or stroke of the shape.
    pub fn render(&self, sink: &mut dyn crate::render::PathSink, action: crate::render::PathAction) {
        match self {
            Self::Point(_) => {}
            Self::Circle(s) => s.render(sink, action),
            Self::Rect(s) => s.render(sink, action),
            Self::Triangle(s) => s.render(sink, action),
            Self::Polygon(s) => s.render(sink, action),
            Self::Bezier(s) => s.render(sink, action),
            Self::Hollow(s) => s.render(sink, action),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Circle(_) => "circle",
            Self::Rect(_) => "rect",
            Self::Triangle(_) => "triangle",
            Self::Polygon(_) => "polygon",
            Self::Bezier(_) => "bezier",
            Self::Hollow(_) => "hollow",
        }
    }
}

impl Transform2 for Shape {
    fn translate(&self, offset: crate::math::Vector) -> Self {
        match self {
            Self::Point(p) => Self::Point(p.translate(offset)),
            Self::Circle(s) => Self::Circle(s.translate(offset)),
            Self::Rect(s) => Self::Rect(s.translate(offset)),
            Self::Triangle(s) => Self::Triangle(s.translate(offset)),
            Self::Polygon(s) => Self::Polygon(s.translate(offset)),
            Self::Bezier(s) => Self::Bezier(s.translate(offset)),
            Self::Hollow(s) => Self::Hollow(s.translate(offset)),
        }
    }

    fn scale(&self, factor: f64, origin: Point) -> Self {
        match self {
            Self::Point(p) => Self::Point(Transform2::scale(p, factor, origin)),
            Self::Circle(s) => Self::Circle(s.scale(factor, origin)),
            Self::Rect(s) => Self::Rect(s.scale(factor, origin)),
            Self::Triangle(s) => Self::Triangle(s.scale(factor, origin)),
            Self::Polygon(s) => Self::Polygon(s.scale(factor, origin)),
            Self::Bezier(s) => Self::Bezier(s.scale(factor, origin)),
            Self::Hollow(s) => Self::Hollow(s.scale(factor, origin)),
        }
    }

    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self {
        match self {
            Self::Point(p) => Self::Point(Transform2::rotate(p, angle, origin)),
            Self::Circle(s) => Self::Circle(s.rotate(angle, origin)),
            Self::Rect(s) => Self::Rect(s.rotate(angle, origin)),
            Self::Triangle(s) => Self::Triangle(s.rotate(angle, origin)),
            Self::Polygon(s) => Self::Polygon(s.rotate(angle, origin)),
            Self::Bezier(s) => Self::Bezier(s.rotate(angle, origin)),
            Self::Hollow(s) => Self::Hollow(s.rotate(angle, origin)),
        }
    }

    fn flip(&self, axis: crate::geometry::Axis) -> Self {
        match self {
            Self::Point(p) => Self::Point(Transform2::flip(p, axis)),
            Self::Circle(s) => Self::Circle(s.flip(axis)),
            Self::Rect(s) => Self::Rect(s.flip(axis)),
            Self::Triangle(s) => Self::Triangle(s.flip(axis)),
            Self::Polygon(s) => Self::Polygon(s.flip(axis)),
            Self::Bezier(s) => Self::Bezier(s.flip(axis)),
            Self::Hollow(s) => Self::Hollow(s.flip(axis)),
        }
    }

    fn center(&self) -> Point {
        match self {
            Self::Point(p) => *p,
            Self::Circle(s) => s.center(),
            Self::Rect(s) => s.center(),
            Self::Triangle(s) => s.center(),
            Self::Polygon(s) => s.center(),
            Self::Bezier(s) => s.center(),
            Self::Hollow(s) => s.center(),
        }
    }
}

impl Interpolatable for Shape {
    /// Same-kind deformation; a cross-kind call snaps to `to`.
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        match (self, to) {
            (Self::Point(a), Self::Point(b)) => Self::Point(a.interpolate(t, b)),
            (Self::Circle(a), Self::Circle(b)) => Self::Circle(a.interpolate(t, b)),
            (Self::Rect(a), Self::Rect(b)) => Self::Rect(a.interpolate(t, b)),
            (Self::Triangle(a), Self::Triangle(b)) => Self::Triangle(a.interpolate(t, b)),
            (Self::Polygon(a), Self::Polygon(b)) => Self::Polygon(a.interpolate(t, b)),
            (Self::Bezier(a), Self::Bezier(b)) => Self::Bezier(a.interpolate(t, b)),
            (Self::Hollow(a), Self::Hollow(b)) => Self::Hollow(a.interpolate(t, b)),
            _ => to.clone(),
        }
    }

    fn to_start(&self) -> Self {
        match self {
            Self::Point(p) => Self::Point(Interpolatable::to_start(p)),
            Self::Circle(s) => Self::Circle(s.to_start()),
            Self::Rect(s) => Self::Rect(Interpolatable::to_start(s)),
            Self::Triangle(s) => Self::Triangle(s.to_start()),
            Self::Polygon(s) => Self::Polygon(s.to_start()),
            Self::Bezier(s) => Self::Bezier(s.to_start()),
            Self::Hollow(s) => Self::Hollow(s.to_start()),
        }
    }

    fn can_interpolate(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bezier(a), Self::Bezier(b)) => a.can_interpolate(b),
            (Self::Point(_), Self::Point(_))
            | (Self::Circle(_), Self::Circle(_))
            | (Self::Rect(_), Self::Rect(_))
            | (Self::Triangle(_), Self::Triangle(_))
            | (Self::Polygon(_), Self::Polygon(_))
            | (Self::Hollow(_), Self::Hollow(_)) => true,
            _ => false,
        }
    }

    fn similarity(&self, other: &Self) -> f64 {
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => a.similarity(b),
            (Self::Circle(a), Self::Circle(b)) => a.similarity(b),
            (Self::Rect(a), Self::Rect(b)) => a.similarity(b),
            (Self::Triangle(a), Self::Triangle(b)) => a.similarity(b),
            (Self::Polygon(a), Self::Polygon(b)) => a.similarity(b),
            (Self::Bezier(a), Self::Bezier(b)) => a.similarity(b),
            (Self::Hollow(a), Self::Hollow(b)) => a.similarity(b),
            _ => f64::INFINITY,
        }
    }
}

struct MorphEntry {
    from: Shape,
    to: Shape,
    /// Exit pairs are dropped once the animation completes.
    exiting: bool,
}

/// A prepared animation between two shape collections.
///
/// Matching and polygon alignment run once in [`Morph::new`]; [`Morph::at`]
/// is pure per-frame interpolation.
pub struct Morph {
    entries: Vec<MorphEntry>,
}

impl Morph {
    #[must_use]
    pub fn new(from: &[Shape], to: &[Shape]) -> Self {
        let mut claimed = vec![false; from.len()];
        let mut entries = Vec::with_capacity(to.len());

        for target in to {
            let best = from
                .iter()
                .enumerate()
                .filter(|(i, s)| !claimed[*i] && s.can_interpolate(target))
                .min_by(|(_, a), (_, b)| a.similarity(target).total_cmp(&b.similarity(target)))
                .map(|(i, _)| i);
            match best {
                Some(i) => {
                    claimed[i] = true;
                    let (prepared_from, prepared_to) = prepare_pair(&from[i], target);
                    entries.push(MorphEntry {
                        from: prepared_from,
                        to: prepared_to,
                        exiting: false,
                    });
                }
                None => {
                    let (prepared_from, prepared_to) = prepare_pair(&target.to_start(), target);
                    debug!(kind = target.kind(), "morph target enters from start state");
                    entries.push(MorphEntry {
                        from: prepared_from,
                        to: prepared_to,
                        exiting: false,
                    });
                }
            }
        }

        for (i, source) in from.iter().enumerate() {
            if claimed[i] {
                continue;
            }
            // A compatible source that lost every claim is not animated at
            // all; only sources with no possible pairing exit visibly.
            if to.iter().any(|target| source.can_interpolate(target)) {
                debug!(kind = source.kind(), "unmatched morph source dropped");
                continue;
            }
            let (prepared_from, prepared_to) = prepare_pair(source, &source.to_start());
            debug!(kind = source.kind(), "morph source exits to start state");
            entries.push(MorphEntry {
                from: prepared_from,
                to: prepared_to,
                exiting: true,
            });
        }

        debug!(
            pairs = entries.iter().filter(|e| !e.exiting).count(),
            exits = entries.iter().filter(|e| e.exiting).count(),
            "prepared morph"
        );
        Self { entries }
    }

    /// Shapes at parameter `t`, clamped to `[0, 1]`. Exiting shapes are
    /// present for every `t < 1` and gone at `t = 1`.
    #[must_use]
    pub fn at(&self, t: f64) -> Vec<Shape> {
        let t = t.clamp(0.0, 1.0);
        self.entries
            .iter()
            .filter(|e| !(e.exiting && t >= 1.0))
            .map(|e| eval_pair(&e.from, &e.to, t))
            .collect()
    }
}

/// One-off morph evaluation; prefer a reused [`Morph`] for animation loops.
#[must_use]
pub fn morph(from: &[Shape], to: &[Shape], t: f64) -> Vec<Shape> {
    Morph::new(from, to).at(t)
}

/// Front-loads per-pair work: polygon rings come out equalized and rotated
/// into their best correspondence.
fn prepare_pair(from: &Shape, to: &Shape) -> (Shape, Shape) {
    match (from, to) {
        (Shape::Polygon(a), Shape::Polygon(b)) => {
            let (a_aligned, b_aligned) = align::aligned_pair(a, b);
            (Shape::Polygon(a_aligned), Shape::Polygon(b_aligned))
        }
        _ => (from.clone(), to.clone()),
    }
}

/// Frame evaluation for a prepared pair. Pre-aligned polygon rings skip the
/// alignment search and lerp directly.
fn eval_pair(from: &Shape, to: &Shape, t: f64) -> Shape {
    match (from, to) {
        (Shape::Polygon(a), Shape::Polygon(b)) if a.points().len() == b.points().len() => {
            Shape::Polygon(align::lerp_aligned(a, b, t))
        }
        _ => from.interpolate(t, to),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Vector, TOLERANCE};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn circle(x: f64, y: f64, r: f64) -> Shape {
        Shape::Circle(CircleSolid::new(Point::new(x, y), r))
    }

    fn square(size: f64) -> PolygonSolid {
        PolygonSolid::new(vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ])
    }

    #[test]
    fn every_kind_interpolates_to_endpoints() {
        let shapes: Vec<(Shape, Shape)> = vec![
            (
                Shape::Point(Point::new(0.0, 0.0)),
                Shape::Point(Point::new(2.0, 2.0)),
            ),
            (circle(0.0, 0.0, 1.0), circle(4.0, 0.0, 2.0)),
            (
                Shape::Rect(RectSolid::new(0.0, 0.0, 1.0, 1.0)),
                Shape::Rect(RectSolid::new(2.0, 2.0, 3.0, 1.0)),
            ),
            (
                Shape::Triangle(TriangleSolid::new(
                    Point::new(0.0, 0.0),
                    Point::new(1.0, 0.0),
                    Point::new(0.0, 1.0),
                )),
                Shape::Triangle(TriangleSolid::new(
                    Point::new(2.0, 0.0),
                    Point::new(3.0, 0.0),
                    Point::new(2.0, 1.0),
                )),
            ),
            (
                Shape::Polygon(square(2.0)),
                Shape::Polygon(PolygonSolid::make_ngon(5).unwrap()),
            ),
            (
                Shape::Bezier(CircleSolid::new(Point::origin(), 1.0).to_bezier()),
                Shape::Bezier(CircleSolid::new(Point::new(3.0, 0.0), 2.0).to_bezier()),
            ),
            (
                Shape::Hollow(HollowShape::new(square(10.0), vec![square(2.0)])),
                Shape::Hollow(HollowShape::new(square(8.0), vec![square(1.0)])),
            ),
        ];
        for (a, b) in shapes {
            let at0 = a.interpolate(0.0, &b);
            let at1 = a.interpolate(1.0, &b);
            assert!((at0.area() - a.area()).abs() < 1e-9, "t=0 departs from source");
            assert!((at1.area() - b.area()).abs() < 1e-9, "t=1 misses target");
            assert!(at0.center().distance_to(a.center()) < 1e-9);
            assert!(at1.center().distance_to(b.center()) < 1e-9);
        }
    }

    #[test]
    fn polygon_morph_is_smooth_against_rotated_copy() {
        let a = PolygonSolid::make_ngon(8).unwrap();
        let shifted = a.rotated_ring(5);
        // Alignment finds the identity correspondence, so every frame is the
        // same polygon.
        let mid = a.interpolate(0.5, &shifted);
        assert!((mid.area() - a.area()).abs() < TOLERANCE);
    }

    #[test]
    fn greedy_matching_prefers_nearest() {
        let from = [circle(0.0, 0.0, 1.0), circle(10.0, 0.0, 1.0)];
        let to = [circle(10.5, 0.0, 1.0), circle(0.5, 0.0, 1.0)];
        let result = Morph::new(&from, &to).at(0.0);
        // First target claims the near source at x=10.
        let Shape::Circle(first) = &result[0] else {
            panic!("expected circle");
        };
        assert!((first.position.x - 10.0).abs() < TOLERANCE);
        let Shape::Circle(second) = &result[1] else {
            panic!("expected circle");
        };
        assert!((second.position.x - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn entering_shape_grows_from_start() {
        init_tracing();
        let m = Morph::new(&[], &[circle(2.0, 0.0, 4.0)]);
        let half = m.at(0.5);
        assert_eq!(half.len(), 1);
        let Shape::Circle(c) = &half[0] else {
            panic!("expected circle");
        };
        assert!((c.radius - 2.0).abs() < TOLERANCE);
        assert!((c.position.x - 2.0).abs() < TOLERANCE);

        let done = m.at(1.0);
        let Shape::Circle(c) = &done[0] else {
            panic!("expected circle");
        };
        assert!((c.radius - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn exiting_shape_shrinks_then_disappears() {
        init_tracing();
        let m = Morph::new(&[circle(1.0, 1.0, 2.0)], &[]);
        let half = m.at(0.5);
        assert_eq!(half.len(), 1);
        let Shape::Circle(c) = &half[0] else {
            panic!("expected circle");
        };
        assert!((c.radius - 1.0).abs() < TOLERANCE);
        assert!(m.at(1.0).is_empty());
        assert_eq!(m.at(0.999).len(), 1);
    }

    #[test]
    fn losing_compatible_source_is_absent_at_every_t() {
        // Both circles could pair with the single target; the far one loses
        // the greedy round and must not appear, not even shrinking.
        let from = [circle(0.0, 0.0, 1.0), circle(10.0, 0.0, 1.0)];
        let to = [circle(0.1, 0.0, 1.0)];
        let m = Morph::new(&from, &to);
        for t in [0.0, 0.25, 0.5, 0.999, 1.0] {
            assert_eq!(m.at(t).len(), 1);
        }
        let Shape::Circle(c) = &m.at(0.5)[0] else {
            panic!("expected circle");
        };
        assert!((c.position.x - 0.05).abs() < TOLERANCE);
    }

    #[test]
    fn leftover_hole_is_dropped_not_shrunk() {
        let from = HollowShape::new(
            square(10.0),
            vec![
                square(1.0),
                square(1.0).translate(Vector::new(5.0, 5.0)),
            ],
        );
        let to = HollowShape::new(square(10.0), vec![square(1.0)]);
        // Polygon holes are always mutually compatible, so the losing hole
        // vanishes immediately instead of animating out.
        let half = from.interpolate(0.5, &to);
        assert_eq!(half.holes().len(), 1);
    }

    #[test]
    fn cross_kind_transition_swaps_via_start_states() {
        let from = [circle(0.0, 0.0, 1.0)];
        let to = [Shape::Rect(RectSolid::new(5.0, 5.0, 2.0, 2.0))];
        let m = Morph::new(&from, &to);

        let half = m.at(0.5);
        assert_eq!(half.len(), 2);
        // The rect grows in while the circle shrinks out.
        assert!(half.iter().any(|s| matches!(s, Shape::Rect(_))));
        assert!(half.iter().any(|s| matches!(s, Shape::Circle(_))));

        let done = m.at(1.0);
        assert_eq!(done.len(), 1);
        assert!(matches!(done[0], Shape::Rect(_)));
    }

    #[test]
    fn mismatched_bezier_rings_never_pair() {
        let ring3 = Shape::Bezier(crate::geometry::BezierSolidBuilder::new(Point::origin())
            .line_to(Point::new(2.0, 0.0))
            .line_to(Point::new(1.0, 2.0))
            .close());
        let ring4 = Shape::Bezier(CircleSolid::new(Point::origin(), 1.0).to_bezier());
        assert!(!ring3.can_interpolate(&ring4));
        let m = Morph::new(std::slice::from_ref(&ring3), std::slice::from_ref(&ring4));
        // Two entries: ring4 entering, ring3 exiting.
        assert_eq!(m.at(0.5).len(), 2);
        assert_eq!(m.at(1.0).len(), 1);
    }

    #[test]
    fn hollow_hole_groups_animate() {
        let from = HollowShape::new(square(10.0), vec![square(1.0)]);
        let to = HollowShape::new(
            square(10.0),
            vec![
                square(1.0).translate(Vector::new(2.0, 2.0)),
                square(1.0).translate(Vector::new(6.0, 6.0)),
            ],
        );
        let half = from.interpolate(0.5, &to);
        assert_eq!(half.holes().len(), 2);
        let done = from.interpolate(1.0, &to);
        assert_eq!(done.holes().len(), 2);
        assert!((done.area() - to.area()).abs() < 1e-9);
    }

    #[test]
    fn one_off_morph_matches_prepared() {
        let from = [circle(0.0, 0.0, 1.0)];
        let to = [circle(2.0, 0.0, 3.0)];
        let quick = morph(&from, &to, 0.5);
        let prepared = Morph::new(&from, &to).at(0.5);
        assert_eq!(quick, prepared);
    }
}

mod bezier_solid;
mod builder;
mod circle_solid;
mod full_bezier;
mod hollow_shape;
mod line_segment;
mod partial_bezier;
mod point;
mod polygon_solid;
mod rect_solid;
mod triangle_solid;

pub use bezier_solid::BezierSolid;
pub use builder::{BezierSolidBuilder, HollowShapeBuilder};
pub use circle_solid::CircleSolid;
pub use full_bezier::FullBezier;
pub use hollow_shape::HollowShape;
pub use line_segment::LineSegment;
pub use partial_bezier::PartialBezier;
pub use point::PointOps;
pub use polygon_solid::PolygonSolid;
pub use rect_solid::RectSolid;
pub use triangle_solid::TriangleSolid;

use crate::error::Result;
use crate::math::{Point, Vector};
use crate::render::{PathAction, PathSink};

/// Axis selector for flip and recenter operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Both,
}

/// Four-way classification of how two closed outlines relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRelation {
    ThisInsideOther,
    OtherInsideThis,
    OutlineIntersect,
    Disjoint,
}

impl ShapeRelation {
    /// The relation as seen from the other shape's perspective.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::ThisInsideOther => Self::OtherInsideThis,
            Self::OtherInsideThis => Self::ThisInsideOther,
            other => other,
        }
    }

    /// Whether the shapes share any point (containment or crossing).
    #[must_use]
    pub fn intersects(self) -> bool {
        self != Self::Disjoint
    }
}

/// Affine transform operations shared by every geometric value.
///
/// All operations are pure: they return a new instance and leave `self`
/// untouched.
pub trait Transform2: Sized {
    #[must_use]
    fn translate(&self, offset: Vector) -> Self;

    /// Scales around `origin`.
    #[must_use]
    fn scale(&self, factor: f64, origin: Point) -> Self;

    /// Rotates by `angle` radians around `origin`, or around the shape's own
    /// center when `origin` is `None`.
    #[must_use]
    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self;

    #[must_use]
    fn flip(&self, axis: Axis) -> Self;

    fn center(&self) -> Point;

    /// Translates so the center's selected component(s) land on zero.
    #[must_use]
    fn recenter(&self, axis: Axis) -> Self {
        let c = self.center();
        let offset = match axis {
            Axis::X => Vector::new(-c.x, 0.0),
            Axis::Y => Vector::new(0.0, -c.y),
            Axis::Both => Vector::new(-c.x, -c.y),
        };
        self.translate(offset)
    }
}

/// Contract shared by every closed-outline primitive.
///
/// Ring-based shapes answer `contains` through even-odd ray crossing;
/// exact primitives override it (and `area`, `outline_length`) with
/// closed-form math.
pub trait SolidShape: Transform2 {
    fn area(&self) -> f64;

    fn outline_length(&self) -> f64;

    fn bbox(&self) -> RectSolid;

    /// Number of outline crossings of the rightward horizontal ray from `p`.
    fn right_point_intersections(&self, p: Point) -> usize;

    /// Even-odd point containment.
    fn contains(&self, p: Point) -> bool {
        self.right_point_intersections(p) % 2 == 1
    }

    /// Converts the outline to a polygon at the given fidelity.
    ///
    /// `quality` is monotonic: higher values produce more vertices. The exact
    /// vertex count per level is primitive-specific (see each impl).
    fn approximated(&self, quality: f64) -> PolygonSolid;

    /// Evenly spaced outline points at `min_per_unit` density.
    fn sample_on_length(&self, min_per_unit: f64) -> Vec<Point>;

    /// Deterministic interior points at roughly `min_per_unit` per unit
    /// area, distributed over the `quality` triangulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline cannot be triangulated.
    fn sample_on_area(&self, min_per_unit: f64, quality: f64) -> Result<Vec<Point>> {
        let mut out = Vec::new();
        for triangle in self.triangulate(quality)? {
            let amount = crate::math::sample_amount(triangle.area(), min_per_unit);
            out.extend(triangle.sample_points(amount));
        }
        Ok(out)
    }

    /// Triangulates the shape's interior.
    ///
    /// # Errors
    ///
    /// Returns an error only if the outline cannot be triangulated
    /// (non-finite coordinates); degenerate outlines yield an empty list.
    fn triangulate(&self, quality: f64) -> Result<Vec<TriangleSolid>> {
        crate::tessellation::triangulate_polygon(self.approximated(quality).points())
    }

    /// Classifies this shape against `other`, outline crossings taking
    /// priority over containment.
    fn relation_to(&self, other: &Self) -> ShapeRelation;

    /// Emits the outline as path commands, without beginning or closing a
    /// drawing operation.
    fn select_shape(&self, sink: &mut dyn PathSink);

    /// Emits a complete fill or stroke of the outline.
    fn render(&self, sink: &mut dyn PathSink, action: PathAction) {
        sink.begin_path();
        self.select_shape(sink);
        match action {
            PathAction::Fill => sink.fill(),
            PathAction::Stroke => sink.stroke(),
        }
    }
}

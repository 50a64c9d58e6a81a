use crate::error::Result;
use crate::geometry::{Axis, RectSolid, SolidShape, Transform2, TriangleSolid};
use crate::math::{Point, Vector};
use crate::morph::{Interpolatable, Morph, Shape};
use crate::render::{PathAction, PathSink};

/// An ordered group of shapes treated as one drawable unit.
///
/// Transforms apply to every member around the group's collective center;
/// metrics sum or union over the members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
}

impl ShapeCollection {
    #[must_use]
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Summed member area (overlap is counted twice).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.shapes.iter().map(Shape::area).sum()
    }

    /// Summed member outline length.
    #[must_use]
    pub fn outline_length(&self) -> f64 {
        self.shapes.iter().map(Shape::outline_length).sum()
    }

    /// Union of member bounding boxes; zero-size at the origin when empty.
    #[must_use]
    pub fn bbox(&self) -> RectSolid {
        RectSolid::union_bbox(self.shapes.iter().map(Shape::bbox))
            .unwrap_or(RectSolid::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Whether any member contains `p`.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.shapes.iter().any(|s| s.contains(p))
    }

    /// Triangulates every member into one flat list.
    ///
    /// # Errors
    ///
    /// Returns the first member triangulation error.
    pub fn triangulate(&self, quality: f64) -> Result<Vec<TriangleSolid>> {
        let mut out = Vec::new();
        for s in &self.shapes {
            out.extend(s.triangulate(quality)?);
        }
        Ok(out)
    }

    /// Prepared animation from this collection to `target`.
    #[must_use]
    pub fn morph_to(&self, target: &ShapeCollection) -> Morph {
        Morph::new(&self.shapes, &target.shapes)
    }

    /// Emits every member's outline into `sink` as one compound path.
    pub fn select_shape(&self, sink: &mut dyn PathSink) {
        for s in &self.shapes {
            s.select_shape(sink);
        }
    }

    /// Fills or strokes the whole group as one path.
    pub fn render(&self, sink: &mut dyn PathSink, action: PathAction) {
        sink.begin_path();
        self.select_shape(sink);
        match action {
            PathAction::Fill => sink.fill(),
            PathAction::Stroke => sink.stroke(),
        }
    }

    fn map_shapes(&self, f: impl Fn(&Shape) -> Shape) -> Self {
        Self::new(self.shapes.iter().map(f).collect())
    }
}

impl FromIterator<Shape> for ShapeCollection {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Transform2 for ShapeCollection {
    fn translate(&self, offset: Vector) -> Self {
        self.map_shapes(|s| s.translate(offset))
    }

    fn scale(&self, factor: f64, origin: Point) -> Self {
        self.map_shapes(|s| s.scale(factor, origin))
    }

    fn rotate(&self, angle: f64, origin: Option<Point>) -> Self {
        // Members rotate around the shared origin so the group moves rigidly.
        let o = origin.unwrap_or_else(|| self.center());
        self.map_shapes(|s| s.rotate(angle, Some(o)))
    }

    fn flip(&self, axis: Axis) -> Self {
        self.map_shapes(|s| s.flip(axis))
    }

    fn center(&self) -> Point {
        self.bbox().center()
    }
}

impl Interpolatable for ShapeCollection {
    /// Full group animation via a one-off [`Morph`].
    fn interpolate(&self, t: f64, to: &Self) -> Self {
        Self::new(self.morph_to(to).at(t))
    }

    fn to_start(&self) -> Self {
        self.map_shapes(Interpolatable::to_start)
    }

    fn similarity(&self, other: &Self) -> f64 {
        let pairwise: f64 = self
            .shapes
            .iter()
            .zip(&other.shapes)
            .map(|(a, b)| a.similarity(b))
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let imbalance = 1.0 + (self.len().abs_diff(other.len())) as f64;
        pairwise * imbalance
    }
}

use crate::math::{Point, TOLERANCE};

use super::{BezierSolid, HollowShape, PartialBezier, PointOps, SolidShape};

/// Incremental construction of a closed [`BezierSolid`] ring.
///
/// Segments are appended from a start point; `close` adds the straight
/// closing segment if the path has not returned to the start.
#[derive(Debug, Clone)]
pub struct BezierSolidBuilder {
    start: Point,
    current: Point,
    segments: Vec<PartialBezier>,
}

impl BezierSolidBuilder {
    #[must_use]
    pub fn new(start: Point) -> Self {
        Self {
            start,
            current: start,
            segments: Vec::new(),
        }
    }

    /// Appends a cubic segment ending at `end`.
    #[must_use]
    pub fn curve_to(mut self, handle1: Point, handle2: Point, end: Point) -> Self {
        self.segments.push(PartialBezier::new(handle1, handle2, end));
        self.current = end;
        self
    }

    /// Appends a straight segment (handles on the chord thirds).
    #[must_use]
    pub fn line_to(self, end: Point) -> Self {
        let from = self.current;
        self.curve_to(from.lerp_to(end, 1.0 / 3.0), from.lerp_to(end, 2.0 / 3.0), end)
    }

    /// Closes the ring and yields the solid.
    #[must_use]
    pub fn close(self) -> BezierSolid {
        let start = self.start;
        if self.current.distance_to(start) > TOLERANCE {
            self.line_to(start).close()
        } else {
            BezierSolid::new(self.segments)
        }
    }
}

/// Incremental construction of a [`HollowShape`].
#[derive(Debug, Clone)]
pub struct HollowShapeBuilder<T: SolidShape> {
    exterior: T,
    holes: Vec<T>,
}

impl<T: SolidShape + Clone + std::fmt::Debug> HollowShapeBuilder<T> {
    #[must_use]
    pub fn new(exterior: T) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    #[must_use]
    pub fn hole(mut self, hole: T) -> Self {
        self.holes.push(hole);
        self
    }

    #[must_use]
    pub fn build(self) -> HollowShape<T> {
        HollowShape::new(self.exterior, self.holes)
    }
}

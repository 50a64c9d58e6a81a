use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

use crate::geometry::RectSolid;

/// A packed static R-tree over a fixed set of elements.
///
/// Built once from the elements' bounding boxes; candidate queries return
/// every element whose box overlaps the query box. Exact tests stay with the
/// caller.
pub struct BboxCollider<T> {
    elements: Vec<T>,
    index: Option<StaticAABB2DIndex<f64>>,
}

impl<T> BboxCollider<T> {
    /// Builds the index from `elements`, using `bbox` to extract each box.
    ///
    /// Elements with non-finite boxes would poison the tree, so a failed
    /// build falls back to scanning every element on query.
    pub fn new(elements: Vec<T>, bbox: impl Fn(&T) -> RectSolid) -> Self {
        if elements.is_empty() {
            return Self {
                elements,
                index: None,
            };
        }
        let mut builder = StaticAABB2DIndexBuilder::<f64>::new(elements.len());
        for e in &elements {
            let b = bbox(e);
            builder.add(b.x, b.y, b.max_x(), b.max_y());
        }
        let index = builder.build().ok();
        Self { elements, index }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Elements whose bounding box overlaps `query`.
    pub fn query(&self, query: &RectSolid) -> Vec<&T> {
        match &self.index {
            Some(index) => index
                .query(query.x, query.y, query.max_x(), query.max_y())
                .into_iter()
                .map(|i| &self.elements[i])
                .collect(),
            None => self.elements.iter().collect(),
        }
    }

    /// Whether any candidate overlapping `query` satisfies `test`.
    pub fn any_overlapping(&self, query: &RectSolid, test: impl Fn(&T) -> bool) -> bool {
        self.query(query).into_iter().any(test)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{LineSegment, Transform2};
    use crate::math::Point;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn query_returns_overlapping_only() {
        let collider = BboxCollider::new(
            vec![
                seg(0.0, 0.0, 1.0, 1.0),
                seg(10.0, 10.0, 11.0, 11.0),
                seg(0.5, 0.5, 2.0, 0.5),
            ],
            LineSegment::bbox,
        );
        let hits = collider.query(&RectSolid::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn empty_collider_finds_nothing() {
        let collider = BboxCollider::new(Vec::<LineSegment>::new(), LineSegment::bbox);
        assert!(collider.is_empty());
        assert!(collider.query(&RectSolid::new(-10.0, -10.0, 20.0, 20.0)).is_empty());
    }

    #[test]
    fn crossing_detection_through_candidates() {
        let edges: Vec<_> = (0..20)
            .map(|i| seg(f64::from(i), 0.0, f64::from(i), 1.0))
            .collect();
        let collider = BboxCollider::new(edges, LineSegment::bbox);
        let probe = seg(4.5, 0.5, 5.5, 0.5);
        assert!(collider.any_overlapping(&probe.bbox(), |l| l.crosses(&probe)));
        let miss = probe.translate(crate::math::Vector::new(0.0, 10.0));
        assert!(!collider.any_overlapping(&miss.bbox(), |l| l.crosses(&miss)));
    }
}

//! Acceleration structures for outline queries.
//!
//! Ring shapes with many edges build these lazily: a packed bounding-box
//! index for edge-edge crossing tests and an interval index for ray-casting
//! scanline lookups.

mod bbox_collider;
mod interval_collider;

pub use bbox_collider::BboxCollider;
pub use interval_collider::IntervalCollider;

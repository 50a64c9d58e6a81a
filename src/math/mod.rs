pub mod roots;

pub use roots::{find_roots_cubic, find_roots_linear, find_roots_quadratic, find_roots_quartic};

/// 2D point type.
pub type Point = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Linear interpolation between two scalars.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Sample count for a region of `size` at `per_unit` density.
///
/// Any fractional remainder rounds the count up, so a non-empty region
/// always yields at least one sample.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sample_amount(size: f64, per_unit: f64) -> usize {
    let exact = (size * per_unit).max(0.0);
    let base = exact.floor();
    let amount = if exact - base > 0.0 { base + 1.0 } else { base };
    amount as usize
}

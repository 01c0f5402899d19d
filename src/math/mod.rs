//! Scalar helpers and the shared point/vector/color tuple

mod tuple;

pub use tuple::{point, rgb, rgba, vector, Tuple4};

/// Absolute tolerance for float comparisons.
///
/// Calibrated for values near the unit range (colors, unit vectors). Large
/// magnitudes need a relative comparison, which this crate does not offer.
pub const EPSILON: f32 = 0.00001;

/// Returns true if `a` and `b` differ by strictly less than [`EPSILON`].
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

//! # Interpolation Primitives
//!
//! Small numeric helpers every generator is built on. All are pure and
//! unvalidated: an empty input range (`x == y`) divides by zero and the
//! NaN/Infinity flows through to the caller.
//!
//! ```rust
//! use fluid_core::interpolate::{range, round_to};
//!
//! // Map a 780px viewport from [320, 1240] onto a [16, 32] size ramp
//! let size = range(320.0, 1240.0, 16.0, 32.0, 780.0);
//! assert_eq!(round_to(size, 4), 24.0);
//! ```

use crate::options::MAX_PRECISION;

/// Linear interpolation between `x` and `y` at parameter `a`.
pub fn lerp(x: f64, y: f64, a: f64) -> f64 {
    x * (1.0 - a) + y * a
}

/// Clamp `a` into `[min, max]`.
///
/// A NaN in any argument yields NaN; `f64::min`/`f64::max` alone drop it.
pub fn clamp_scalar(a: f64, min: f64, max: f64) -> f64 {
    if a.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    max.min(min.max(a))
}

/// Clamp `a` into `[0, 1]`.
pub fn unit_clamp(a: f64) -> f64 {
    clamp_scalar(a, 0.0, 1.0)
}

/// Position of `a` within `[x, y]` as a fraction, saturating outside the range.
pub fn inverse_lerp(x: f64, y: f64, a: f64) -> f64 {
    unit_clamp((a - x) / (y - x))
}

/// Map `a` from the domain `[x1, y1]` onto the codomain `[x2, y2]`.
pub fn range(x1: f64, y1: f64, x2: f64, y2: f64, a: f64) -> f64 {
    lerp(x2, y2, inverse_lerp(x1, y1, a))
}

/// Round to `decimals` places, half away from zero.
///
/// `f64::EPSILON` is added before scaling so values such as `0.78125`
/// (stored as `0.78124999...`) still round up. Negative zero comes back as `0`.
/// `decimals` is capped at [`MAX_PRECISION`]; past that the scale factor
/// overflows to infinity.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_PRECISION) as i32);
    ((value + f64::EPSILON) * factor).round() / factor + 0.0
}

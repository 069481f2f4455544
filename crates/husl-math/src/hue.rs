//! HUSL hue from the (U, V) chroma components.
//!
//! Hue is the angle of the (U, V) vector in degrees, wrapped to [0, 360).
//! Two evaluations are available: the exact `atan2`, and a self-normalizing
//! rational approximation that replaces the transcendental call with a few
//! multiplies (see dspguru's "fixed-point atan2 with self normalization").
//! The approximation is quadrant-aware and accurate to within 0.6 degrees.

use std::f64::consts::PI;

/// Degrees per radian.
pub const DEG_PER_RAD: f64 = 180.0 / PI;

/// Hue in [0, 360) from LUV chroma components, via `atan2`.
///
/// # Example
///
/// ```rust
/// use husl_math::hue_degrees;
///
/// assert_eq!(hue_degrees(1.0, 0.0), 0.0);
/// assert_eq!(hue_degrees(0.0, 1.0), 90.0);
/// assert_eq!(hue_degrees(0.0, -1.0), 270.0);
/// ```
#[inline]
pub fn hue_degrees(u: f64, v: f64) -> f64 {
    let mut hue = v.atan2(u) * DEG_PER_RAD;
    if hue < 0.0 {
        hue += 360.0;
    }
    hue
}

/// Hue in [0, 360) via the rational approximation; worst error ≤ 0.6°.
#[inline]
pub fn hue_degrees_approx(u: f64, v: f64) -> f64 {
    let mut hue = atan2_approx(v, u) * DEG_PER_RAD;
    if hue < 0.0 {
        hue += 360.0;
    }
    hue
}

/// Self-normalizing atan2 approximation.
///
/// The `1e-10` bias on |y| prevents a divide by zero on the axes.
#[inline]
fn atan2_approx(y: f64, x: f64) -> f64 {
    const PI_4: f64 = PI / 4.0;
    const PI_3_4: f64 = 3.0 * PI / 4.0;

    let abs_y = y.abs() + 1e-10;
    let (r, base) = if x < 0.0 {
        ((x + abs_y) / (abs_y - x), PI_3_4)
    } else {
        ((x - abs_y) / (x + abs_y), PI_4)
    };
    let angle = base + (0.1963 * r * r - 0.9817) * r;
    if y < 0.0 { -angle } else { angle }
}

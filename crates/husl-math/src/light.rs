//! Piecewise CIE lightness, both directions.
//!
//! The lightness curve is a cube root with a linear segment below
//! [`EPSILON`](crate::constants::EPSILON); the linear segment avoids the
//! numerically unstable cube root near zero.

use crate::constants::{EPSILON, KAPPA, REF_Y};

/// Maps XYZ luminance to perceptual lightness L in [0, 100].
///
/// # Formula
///
/// ```text
/// if y > ε:  L = 116·cbrt(y / Yref) − 16
/// else:      L = (y / Yref)·κ
/// ```
///
/// # Example
///
/// ```rust
/// use husl_math::y_to_lightness;
///
/// assert!((y_to_lightness(1.0) - 100.0).abs() < 1e-9);
/// assert_eq!(y_to_lightness(0.0), 0.0);
/// ```
#[inline]
pub fn y_to_lightness(y: f64) -> f64 {
    if y > EPSILON {
        116.0 * (y / REF_Y).cbrt() - 16.0
    } else {
        (y / REF_Y) * KAPPA
    }
}

/// Maps perceptual lightness L back to XYZ luminance.
///
/// Inverse of [`y_to_lightness`]; the branch point sits at L = 8, the
/// lightness both segments produce at y = ε.
#[inline]
pub fn lightness_to_y(l: f64) -> f64 {
    if l > 8.0 {
        REF_Y * ((l + 16.0) / 116.0).powi(3)
    } else {
        REF_Y * l / KAPPA
    }
}

//! Linear RGB ↔ CIE-XYZ projection.
//!
//! Both directions are fixed 3×3 transforms tied to the sRGB primaries and
//! D65 white point. Pure functions, no failure modes.

use crate::constants::{RGB_TO_XYZ, XYZ_TO_RGB};

/// Multiplies a row-major 3×3 matrix by a column vector.
#[inline]
fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Projects a linear RGB triple (each channel in [0, 1]) into XYZ.
///
/// # Example
///
/// ```rust
/// use husl_math::linear_rgb_to_xyz;
///
/// let [x, y, z] = linear_rgb_to_xyz([1.0, 1.0, 1.0]);
/// assert!((y - 1.0).abs() < 1e-9); // white has unit luminance
/// # let _ = (x, z);
/// ```
#[inline]
pub fn linear_rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    mul3(&RGB_TO_XYZ, rgb)
}

/// Projects an XYZ triple back to linear RGB.
///
/// Output channels may fall outside [0, 1] for out-of-gamut XYZ points;
/// the caller clamps after the transfer re-encode.
#[inline]
pub fn xyz_to_linear_rgb(xyz: [f64; 3]) -> [f64; 3] {
    mul3(&XYZ_TO_RGB, xyz)
}

//! CIE-XYZ ↔ CIE-LUV transformation.

use husl_math::{lightness_to_y, y_to_lightness, REF_U, REF_V};

use crate::strategy::{LightMethod, Strategy};
use crate::tables::Tables;

/// Converts an XYZ triple to LUV.
///
/// `scale` is zero only for pure black, which the boundary handler
/// intercepts before its LUV value is ever read; the NaNs written for that
/// one pixel are overwritten in the HUSL stage.
#[inline]
pub fn xyz_to_luv(xyz: [f64; 3], tables: &Tables, strategy: Strategy) -> [f64; 3] {
    let [x, y, z] = xyz;
    let scale = x + 15.0 * y + 3.0 * z;
    let u_prime = 4.0 * x / scale;
    let v_prime = 9.0 * y / scale;
    let l = match strategy.light {
        LightMethod::Exact => y_to_lightness(y),
        LightMethod::Table => tables.light.lookup(y),
    };
    let l13 = 13.0 * l;
    [l, l13 * (u_prime - REF_U), l13 * (v_prime - REF_V)]
}

/// Converts a LUV triple back to XYZ.
///
/// The caller guarantees `l` is strictly positive; the lightness extremes
/// are clamped to pure black/white before this stage in the reverse
/// pipeline.
#[inline]
pub fn luv_to_xyz(luv: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    let y = lightness_to_y(l);
    let l13 = 13.0 * l;
    let u_prime = u / l13 + REF_U;
    let v_prime = v / l13 + REF_V;
    let x = -(9.0 * y * u_prime) / ((u_prime - 4.0) * v_prime - u_prime * v_prime);
    let z = (9.0 * y - 15.0 * v_prime * y - v_prime * x) / (3.0 * v_prime);
    [x, y, z]
}

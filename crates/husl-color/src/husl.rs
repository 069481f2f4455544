//! LUV → HUSL resolution: hue, gamut-normalized saturation, and the
//! lightness special cases.

use husl_math::{hue_degrees, hue_degrees_approx, max_chroma};

use crate::strategy::{ChromaMethod, HueMethod, Strategy};
use crate::tables::Tables;

/// Hue assigned to pure white, where the hue formula is 0/0.
///
/// White has zero chroma, so any hue is representable; this fixed value
/// keeps the white → HUSL → white round trip stable.
pub const WHITE_HUE: f64 = 19.916405993809086;

/// Saturation assigned to pure white.
pub const WHITE_SATURATION: f64 = 0.0;

/// Lightness assigned to pure white.
pub const WHITE_LIGHTNESS: f64 = 100.0;

/// Lightness above which a color is treated as white.
pub const L_MAX: f64 = 99.99;

/// Lightness below which a color is treated as black.
pub const L_MIN: f64 = 0.01;

/// Hue of a (U, V) pair per the selected method, in [0, 360).
#[inline]
pub fn resolve_hue(u: f64, v: f64, strategy: Strategy) -> f64 {
    match strategy.hue {
        HueMethod::Atan2 => hue_degrees(u, v),
        HueMethod::Approximate => hue_degrees_approx(u, v),
    }
}

/// Saturation in [0, 100]: chroma magnitude normalized by the maximum
/// in-gamut chroma at (L, H).
///
/// The forward XYZ matrix is a minimax approximation, so fully saturated
/// inputs can overshoot 100 by about 1e-4; the result is clamped to keep
/// the documented range invariant.
#[inline]
pub fn resolve_saturation(l: f64, u: f64, v: f64, h: f64, tables: &Tables, strategy: Strategy) -> f64 {
    let chroma = (u * u + v * v).sqrt();
    let max = match strategy.chroma {
        ChromaMethod::Exact => max_chroma(l, h),
        ChromaMethod::Table => tables.chroma.lookup(h, l),
    };
    (100.0 * chroma / max).min(100.0)
}

/// Resolves a LUV triple into HUSL.
///
/// Lightness beyond [`L_MIN`], [`L_MAX`] clamps to pure black/white
/// saturation and lightness while keeping the computed hue, so
/// near-extreme pixels never divide by a vanishing max chroma.
#[inline]
pub fn luv_to_husl(luv: [f64; 3], tables: &Tables, strategy: Strategy) -> [f64; 3] {
    let [l, u, v] = luv;
    let h = resolve_hue(u, v, strategy);
    if l > L_MAX {
        return [h, 0.0, 100.0];
    }
    if l < L_MIN {
        return [h, 0.0, 0.0];
    }
    let s = resolve_saturation(l, u, v, h, tables, strategy);
    [h, s, l]
}

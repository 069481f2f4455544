//! Maximum in-gamut chroma for an (L, H) pair.
//!
//! HUSL normalizes saturation by the largest chroma that still projects
//! into the sRGB gamut at the given lightness and hue. Each of the three
//! RGB channels clipping at 0 or 1 defines a pair of boundary lines in the
//! chroma plane; the tightest positive ray intersection across all three
//! planes is the answer.
//!
//! This is the dominant cost center of the forward conversion; the
//! lookup-table alternative lives in `husl-lut`.

use crate::constants::{
    BOTTOM_OFFSET, BOTTOM_SCALE, EPSILON, KAPPA, TOP1_SCALE, TOP2_L_OFFSET, TOP2_SCALE,
};

/// Sentinel for "no valid candidate yet"; larger than any real chroma.
///
/// Only returned when both candidates of every plane are non-positive,
/// which does not happen for lightness strictly inside (0, 100).
pub const CHROMA_SENTINEL: f64 = 10000.0;

/// Returns the maximum chroma magnitude at the given lightness and hue
/// before the color leaves the sRGB gamut.
///
/// `lightness` in (0, 100), `hue_deg` in [0, 360). At the degenerate
/// extreme L = 0 no candidate is positive and the result is
/// [`CHROMA_SENTINEL`]; at L = 100 the result underflows toward zero.
/// The pipeline intercepts both extremes before calling here.
///
/// # Example
///
/// ```rust
/// use husl_math::max_chroma;
///
/// let c = max_chroma(50.0, 120.0);
/// assert!((c - 68.875423386301).abs() < 1e-6);
/// ```
pub fn max_chroma(lightness: f64, hue_deg: f64) -> f64 {
    let sub1 = (lightness + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { lightness / KAPPA };
    let theta = hue_deg.to_radians();
    let (sin_theta, cos_theta) = theta.sin_cos();

    let mut best = CHROMA_SENTINEL;
    for plane in 0..3 {
        best = best.min(plane_min_length(
            plane, lightness, sub2, sin_theta, cos_theta,
        ));
    }
    best
}

/// Tightest positive ray length against one gamut plane's two boundary
/// lines (channel = 0 and channel = 1).
#[inline]
fn plane_min_length(
    plane: usize,
    lightness: f64,
    sub2: f64,
    sin_theta: f64,
    cos_theta: f64,
) -> f64 {
    let top1 = TOP1_SCALE[plane] * sub2;
    let top2 = TOP2_SCALE[plane] * lightness * sub2;
    let top2_b = top2 - TOP2_L_OFFSET * lightness;
    let bottom = BOTTOM_SCALE[plane] * sub2;
    let bottom_b = bottom + BOTTOM_OFFSET;

    let mut min_length = CHROMA_SENTINEL;

    // length of the hue ray to line (slope, intercept); non-positive or
    // NaN lengths mean the ray exits the other way and are skipped
    let len = (top2 / bottom) / (sin_theta - (top1 / bottom) * cos_theta);
    if len > 0.0 {
        min_length = len;
    }
    let len = (top2_b / bottom_b) / (sin_theta - (top1 / bottom_b) * cos_theta);
    if len > 0.0 {
        min_length = min_length.min(len);
    }
    min_length
}

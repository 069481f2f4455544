//! Per-pixel conversions between 8-bit sRGB and HUSL.
//!
//! These are the units of work the bulk driver maps over a buffer. The
//! forward direction is split into its two stages (RGB → LUV, LUV → HUSL)
//! so the driver can run each stage across the whole buffer with a barrier
//! in between; [`rgb_to_husl_pixel`] composes them for sequential use.

use husl_math::{linear_rgb_to_xyz, max_chroma, xyz_to_linear_rgb, y_to_lightness};
use husl_transfer::oetf;

use crate::husl::{self, luv_to_husl, WHITE_HUE, WHITE_LIGHTNESS, WHITE_SATURATION};
use crate::luv::{luv_to_xyz, xyz_to_luv};
use crate::strategy::{ChromaMethod, LightMethod, Strategy};
use crate::tables::Tables;

/// Forward stage 1: decodes an RGB triple and projects it into LUV.
#[inline]
pub fn rgb_to_luv_pixel(rgb: [u8; 3], tables: &Tables, strategy: Strategy) -> [f64; 3] {
    let linear = [
        tables.linear[rgb[0] as usize],
        tables.linear[rgb[1] as usize],
        tables.linear[rgb[2] as usize],
    ];
    xyz_to_luv(linear_rgb_to_xyz(linear), tables, strategy)
}

/// Forward stage 2: resolves a LUV triple into HUSL, intercepting the two
/// boundary pixels.
///
/// The original RGB triple is consulted for the exact-white / exact-black
/// check; those two inputs bypass the general formula entirely and are the
/// only early exits.
#[inline]
pub fn luv_to_husl_pixel(rgb: [u8; 3], luv: [f64; 3], tables: &Tables, strategy: Strategy) -> [f64; 3] {
    match rgb {
        [255, 255, 255] => [WHITE_HUE, WHITE_SATURATION, WHITE_LIGHTNESS],
        [0, 0, 0] => [0.0, 0.0, 0.0],
        _ => luv_to_husl(luv, tables, strategy),
    }
}

/// Full forward conversion of one pixel.
///
/// # Example
///
/// ```rust
/// use husl_color::{rgb_to_husl_pixel, Strategy, Tables};
///
/// let [h, s, l] = rgb_to_husl_pixel([255, 0, 0], Tables::shared(), Strategy::default());
/// assert!((h - 12.177).abs() < 1e-3);
/// assert_eq!(s, 100.0);
/// assert!((l - 53.237).abs() < 1e-3);
/// ```
#[inline]
pub fn rgb_to_husl_pixel(rgb: [u8; 3], tables: &Tables, strategy: Strategy) -> [f64; 3] {
    let luv = rgb_to_luv_pixel(rgb, tables, strategy);
    luv_to_husl_pixel(rgb, luv, tables, strategy)
}

/// Reverse conversion of one pixel.
///
/// Saturation is denormalized through the same max-chroma strategy as the
/// forward direction, then LCH → LUV → XYZ → linear RGB → sRGB. Channels
/// are clamped to [0, 1] before rounding; out-of-gamut HUSL inputs saturate
/// at the channel limits.
pub fn husl_to_rgb_pixel(hsl: [f64; 3], tables: &Tables, strategy: Strategy) -> [u8; 3] {
    let [h, s, l] = hsl;
    if l > husl::L_MAX {
        return [255, 255, 255];
    }
    if l < husl::L_MIN {
        return [0, 0, 0];
    }
    let max = match strategy.chroma {
        ChromaMethod::Exact => max_chroma(l, h),
        ChromaMethod::Table => tables.chroma.lookup(h, l),
    };
    let chroma = max / 100.0 * s;
    let h_rad = h.to_radians();
    let u = h_rad.cos() * chroma;
    let v = h_rad.sin() * chroma;
    let linear = xyz_to_linear_rgb(luv_to_xyz([l, u, v]));
    [
        encode_channel(linear[0]),
        encode_channel(linear[1]),
        encode_channel(linear[2]),
    ]
}

/// Hue channel only; identical branch structure to the full conversion,
/// so the result is bit-identical to `rgb_to_husl_pixel(..)[0]`.
#[inline]
pub fn rgb_to_hue_pixel(rgb: [u8; 3], tables: &Tables, strategy: Strategy) -> f64 {
    match rgb {
        [255, 255, 255] => WHITE_HUE,
        [0, 0, 0] => 0.0,
        _ => {
            let [_, u, v] = rgb_to_luv_pixel(rgb, tables, strategy);
            husl::resolve_hue(u, v, strategy)
        }
    }
}

/// Lightness channel only; bit-identical to `rgb_to_husl_pixel(..)[2]`.
#[inline]
pub fn rgb_to_lightness_pixel(rgb: [u8; 3], tables: &Tables, strategy: Strategy) -> f64 {
    match rgb {
        [255, 255, 255] => WHITE_LIGHTNESS,
        [0, 0, 0] => 0.0,
        _ => {
            let linear = [
                tables.linear[rgb[0] as usize],
                tables.linear[rgb[1] as usize],
                tables.linear[rgb[2] as usize],
            ];
            let [_, y, _] = linear_rgb_to_xyz(linear);
            let l = match strategy.light {
                LightMethod::Exact => y_to_lightness(y),
                LightMethod::Table => tables.light.lookup(y),
            };
            if l > husl::L_MAX {
                100.0
            } else if l < husl::L_MIN {
                0.0
            } else {
                l
            }
        }
    }
}

/// Re-encodes one linear channel to 8 bits.
#[inline]
fn encode_channel(linear: f64) -> u8 {
    (oetf(linear).clamp(0.0, 1.0) * 255.0).round() as u8
}

//! 2D max-chroma lookup table.
//!
//! Finding the maximum in-gamut chroma is the most expensive operation in
//! the RGB → HUSL direction. This table precomputes it on a hue ×
//! lightness grid and answers queries with unit-square bilinear
//! interpolation: four reads and a weighted sum instead of three
//! line-intersection evaluations with trigonometry.
//!
//! # Reference
//!
//! Bilinear interpolation, unit-square formulation:
//! `f(x,y) = f00·(1−x)(1−y) + f10·x(1−y) + f01·(1−x)y + f11·xy`

use crate::error::{LutError, LutResult};
use husl_math::max_chroma;

/// Grid resolution along each axis (hue and lightness).
pub const CHROMA_TABLE_SIZE: usize = 1024;

const H_STEP: f64 = 360.0 / (CHROMA_TABLE_SIZE - 1) as f64;
const L_STEP: f64 = 100.0 / (CHROMA_TABLE_SIZE - 1) as f64;

// Node lightness is clamped into the open (0, 100) interval so the exact
// evaluator's degenerate L ∈ {0, 100} behavior never enters the table.
const L_NODE_MIN: f64 = 0.01;
const L_NODE_MAX: f64 = 99.99;

/// Bilinear max-chroma table indexed by quantized hue and lightness.
///
/// Axis 0 is hue in [0, 360], axis 1 is lightness in [0, 100], row-major.
///
/// # Example
///
/// ```rust
/// use husl_lut::ChromaTable;
/// use husl_math::max_chroma;
///
/// let table = ChromaTable::build();
/// let approx = table.lookup(24.0, 33.0);
/// assert!((approx - max_chroma(33.0, 24.0)).abs() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ChromaTable {
    entries: Vec<f64>,
}

impl ChromaTable {
    /// Builds the table from the exact gamut intersection.
    ///
    /// Evaluates the closed form at every grid node
    /// ([`CHROMA_TABLE_SIZE`]² points); intended to run once at startup
    /// and be shared read-only afterwards.
    pub fn build() -> Self {
        let mut entries = Vec::with_capacity(CHROMA_TABLE_SIZE * CHROMA_TABLE_SIZE);
        for h_idx in 0..CHROMA_TABLE_SIZE {
            let hue = h_idx as f64 * H_STEP;
            for l_idx in 0..CHROMA_TABLE_SIZE {
                entries.push(max_chroma(node_lightness(l_idx), hue));
            }
        }
        Self { entries }
    }

    /// Wraps caller-supplied entries (row-major, hue-major).
    ///
    /// # Errors
    ///
    /// [`LutError::InvalidSize`] unless exactly [`CHROMA_TABLE_SIZE`]²
    /// entries are supplied.
    pub fn from_entries(entries: Vec<f64>) -> LutResult<Self> {
        let expected = CHROMA_TABLE_SIZE * CHROMA_TABLE_SIZE;
        if entries.len() != expected {
            return Err(LutError::InvalidSize {
                expected,
                got: entries.len(),
            });
        }
        Ok(Self { entries })
    }

    /// Grid resolution along one axis.
    #[inline]
    pub fn size(&self) -> usize {
        CHROMA_TABLE_SIZE
    }

    /// Interpolated maximum chroma at (hue, lightness).
    ///
    /// Fractional indices are floored and clamped to
    /// `[0, CHROMA_TABLE_SIZE − 2]`, then the four surrounding corners are
    /// blended with the normalized offsets.
    #[inline]
    pub fn lookup(&self, hue: f64, lightness: f64) -> f64 {
        let h_idx = hue / H_STEP;
        let l_idx = lightness / L_STEP;
        let h0 = (h_idx.floor().max(0.0) as usize).min(CHROMA_TABLE_SIZE - 2);
        let l0 = (l_idx.floor().max(0.0) as usize).min(CHROMA_TABLE_SIZE - 2);

        let c00 = self.entries[h0 * CHROMA_TABLE_SIZE + l0];
        let c10 = self.entries[(h0 + 1) * CHROMA_TABLE_SIZE + l0];
        let c01 = self.entries[h0 * CHROMA_TABLE_SIZE + l0 + 1];
        let c11 = self.entries[(h0 + 1) * CHROMA_TABLE_SIZE + l0 + 1];

        let h_frac = h_idx - h0 as f64;
        let l_frac = l_idx - l0 as f64;
        let h_inv = 1.0 - h_frac;
        let l_inv = 1.0 - l_frac;

        c00 * h_inv * l_inv + c10 * h_frac * l_inv + c01 * h_inv * l_frac + c11 * h_frac * l_frac
    }
}

/// Lightness value of a grid node, clamped away from the degenerate
/// extremes.
fn node_lightness(l_idx: usize) -> f64 {
    (l_idx as f64 * L_STEP).clamp(L_NODE_MIN, L_NODE_MAX)
}

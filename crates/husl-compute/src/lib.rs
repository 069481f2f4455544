//! # husl-compute
//!
//! Bulk conversion between flat 8-bit sRGB buffers and HUSL buffers.
//!
//! The forward conversion runs as a two-stage pipeline over the output
//! buffer: every pixel is taken to LUV first, then every pixel is resolved
//! to HUSL in place. The stages are separate parallel regions, so all LUV
//! writes are visible before any HUSL read; the join at the end of the
//! first region is the synchronization barrier.
//!
//! Inputs below [`MIN_PIXELS_PARALLEL`] run sequentially; parallel dispatch
//! overhead would dominate small buffers. Both paths perform identical
//! per-pixel arithmetic and produce bit-identical output.
//!
//! # Example
//!
//! ```rust
//! let rgb = vec![128u8, 64, 32, 0, 0, 0];
//! let husl = husl_compute::to_husl(&rgb).unwrap();
//! assert_eq!(husl.len(), rgb.len());
//! assert_eq!(&husl[3..6], &[0.0, 0.0, 0.0]); // black short-circuits
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod pipeline;

pub use pipeline::{Converter, MIN_PIXELS_PARALLEL};

use husl_color::{Strategy, Tables};
use husl_core::Result;

/// Converts a flat RGB buffer (length 3·N) to an interleaved HUSL buffer,
/// using the shared tables and the all-exact strategy.
///
/// # Errors
///
/// [`husl_core::Error::InvalidLength`] if the buffer is not a multiple of
/// three; [`husl_core::Error::AllocationFailed`] if the output cannot be
/// reserved.
pub fn to_husl(rgb: &[u8]) -> Result<Vec<f64>> {
    Converter::new(Tables::shared(), Strategy::default()).to_husl(rgb)
}

/// Converts a flat HUSL buffer (length 3·N) back to 8-bit RGB.
///
/// # Errors
///
/// Same conditions as [`to_husl`].
pub fn to_rgb(husl: &[f64]) -> Result<Vec<u8>> {
    Converter::new(Tables::shared(), Strategy::default()).to_rgb(husl)
}

/// Extracts the HUSL hue channel (one `f64` per pixel) from an RGB buffer.
///
/// # Errors
///
/// Same conditions as [`to_husl`].
pub fn to_hue(rgb: &[u8]) -> Result<Vec<f64>> {
    Converter::new(Tables::shared(), Strategy::default()).to_hue(rgb)
}

/// Extracts the HUSL lightness channel (one `f64` per pixel) from an RGB
/// buffer.
///
/// # Errors
///
/// Same conditions as [`to_husl`].
pub fn to_lightness(rgb: &[u8]) -> Result<Vec<f64>> {
    Converter::new(Tables::shared(), Strategy::default()).to_lightness(rgb)
}

//! Two-stage fork-join pipeline over interleaved pixel buffers.

use rayon::prelude::*;

use husl_color::{
    convert::{
        husl_to_rgb_pixel, luv_to_husl_pixel, rgb_to_hue_pixel, rgb_to_lightness_pixel,
        rgb_to_luv_pixel,
    },
    Strategy, Tables,
};
use husl_core::{pixel_count, rgb_triples, triples_mut, try_alloc, Result, CHANNELS};

/// Minimum pixel count before parallel dispatch is engaged.
///
/// Below this (roughly a 30×30 image), fork-join overhead dominates and
/// the sequential path wins.
pub const MIN_PIXELS_PARALLEL: usize = 900;

/// Pixels per work chunk in the variable-cost HUSL stage.
///
/// Small enough for work stealing to rebalance around cheap boundary
/// pixels, large enough to amortize per-chunk dispatch.
const HUSL_CHUNK_PIXELS: usize = 64;

/// Bulk converter binding a strategy to a shared table set.
///
/// The converter holds only borrows and copies; it retains no reference to
/// any input or output buffer beyond a call.
///
/// # Example
///
/// ```rust
/// use husl_color::{Strategy, Tables};
/// use husl_compute::Converter;
///
/// let converter = Converter::new(Tables::shared(), Strategy::approximate());
/// let husl = converter.to_husl(&[200, 30, 90]).unwrap();
/// assert_eq!(husl.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    tables: &'t Tables,
    strategy: Strategy,
}

impl<'t> Converter<'t> {
    /// Creates a converter over the given tables and strategy.
    pub fn new(tables: &'t Tables, strategy: Strategy) -> Self {
        Self { tables, strategy }
    }

    /// Converts a flat RGB buffer to an interleaved HUSL buffer.
    ///
    /// Stage 1 fills the output with LUV triples; stage 2 overwrites each
    /// triple with HUSL. Stage 2 never starts before stage 1 has finished
    /// for every pixel.
    ///
    /// # Errors
    ///
    /// [`husl_core::Error::InvalidLength`],
    /// [`husl_core::Error::AllocationFailed`].
    pub fn to_husl(&self, rgb: &[u8]) -> Result<Vec<f64>> {
        let pixels = pixel_count(rgb)?;
        let mut out = try_alloc::<f64>(rgb.len())?;
        if pixels < MIN_PIXELS_PARALLEL {
            self.luv_stage(rgb, &mut out);
            self.husl_stage(rgb, &mut out);
        } else {
            // stage 1: uniform cost, one contiguous slab per worker
            let workers = rayon::current_num_threads().max(1);
            let slab = pixels.div_ceil(workers) * CHANNELS;
            out.par_chunks_mut(slab)
                .zip(rgb.par_chunks(slab))
                .for_each(|(luv, src)| self.luv_stage(src, luv));

            // barrier: the first parallel region has joined, so every LUV
            // write is visible before any HUSL read below

            // stage 2: variable cost, fine chunks balanced by work stealing
            out.par_chunks_mut(HUSL_CHUNK_PIXELS * CHANNELS)
                .zip(rgb.par_chunks(HUSL_CHUNK_PIXELS * CHANNELS))
                .for_each(|(luv, src)| self.husl_stage(src, luv));
        }
        Ok(out)
    }

    /// Sequential forward conversion; same arithmetic, no worker pool.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Converter::to_husl`].
    pub fn to_husl_sequential(&self, rgb: &[u8]) -> Result<Vec<f64>> {
        pixel_count(rgb)?;
        let mut out = try_alloc::<f64>(rgb.len())?;
        self.luv_stage(rgb, &mut out);
        self.husl_stage(rgb, &mut out);
        Ok(out)
    }

    /// Converts a flat HUSL buffer back to 8-bit RGB.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Converter::to_husl`].
    pub fn to_rgb(&self, husl: &[f64]) -> Result<Vec<u8>> {
        let pixels = pixel_count(husl)?;
        let mut out = try_alloc::<u8>(husl.len())?;
        let chunk = HUSL_CHUNK_PIXELS * CHANNELS;
        if pixels < MIN_PIXELS_PARALLEL {
            self.rgb_stage(husl, &mut out);
        } else {
            out.par_chunks_mut(chunk)
                .zip(husl.par_chunks(chunk))
                .for_each(|(dst, src)| self.rgb_stage(src, dst));
        }
        Ok(out)
    }

    /// Extracts the hue channel: one `f64` per pixel.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Converter::to_husl`].
    pub fn to_hue(&self, rgb: &[u8]) -> Result<Vec<f64>> {
        self.channel(rgb, |this, px| rgb_to_hue_pixel(px, this.tables, this.strategy))
    }

    /// Extracts the lightness channel: one `f64` per pixel.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Converter::to_husl`].
    pub fn to_lightness(&self, rgb: &[u8]) -> Result<Vec<f64>> {
        self.channel(rgb, |this, px| {
            rgb_to_lightness_pixel(px, this.tables, this.strategy)
        })
    }

    /// Shared single-channel extraction driver.
    fn channel(&self, rgb: &[u8], f: fn(&Self, [u8; 3]) -> f64) -> Result<Vec<f64>> {
        let pixels = pixel_count(rgb)?;
        let mut out = try_alloc::<f64>(pixels)?;
        if pixels < MIN_PIXELS_PARALLEL {
            for (dst, px) in out.iter_mut().zip(rgb_triples(rgb)) {
                *dst = f(self, px);
            }
        } else {
            out.par_chunks_mut(HUSL_CHUNK_PIXELS)
                .zip(rgb.par_chunks(HUSL_CHUNK_PIXELS * CHANNELS))
                .for_each(|(dst, src)| {
                    for (d, px) in dst.iter_mut().zip(rgb_triples(src)) {
                        *d = f(self, px);
                    }
                });
        }
        Ok(out)
    }

    /// Stage 1 over one span: RGB → LUV into the output buffer.
    fn luv_stage(&self, rgb: &[u8], luv: &mut [f64]) {
        for (dst, px) in triples_mut(luv).zip(rgb_triples(rgb)) {
            dst.copy_from_slice(&rgb_to_luv_pixel(px, self.tables, self.strategy));
        }
    }

    /// Stage 2 over one span: LUV → HUSL in place, boundary pixels
    /// short-circuited.
    fn husl_stage(&self, rgb: &[u8], luv_husl: &mut [f64]) {
        for (dst, px) in triples_mut(luv_husl).zip(rgb_triples(rgb)) {
            let luv = [dst[0], dst[1], dst[2]];
            dst.copy_from_slice(&luv_to_husl_pixel(px, luv, self.tables, self.strategy));
        }
    }

    /// Reverse over one span: HUSL → RGB.
    fn rgb_stage(&self, husl: &[f64], rgb: &mut [u8]) {
        for (dst, src) in rgb.chunks_exact_mut(CHANNELS).zip(husl.chunks_exact(CHANNELS)) {
            let hsl = [src[0], src[1], src[2]];
            dst.copy_from_slice(&husl_to_rgb_pixel(hsl, self.tables, self.strategy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use husl_color::convert::rgb_to_husl_pixel;

    /// Deterministic pseudo-random pixel data, large enough to engage the
    /// parallel path.
    fn sample_image(pixels: usize) -> Vec<u8> {
        let mut state = 0x2545f4914f6cdd1du64;
        (0..pixels * CHANNELS)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 56) as u8
            })
            .collect()
    }

    fn converter() -> Converter<'static> {
        Converter::new(Tables::shared(), Strategy::default())
    }

    #[test]
    fn test_rejects_partial_triples() {
        assert!(converter().to_husl(&[1, 2, 3, 4]).is_err());
        assert!(converter().to_rgb(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(converter().to_husl(&[]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_matches_per_pixel_conversion() {
        let rgb = sample_image(64);
        let husl = converter().to_husl(&rgb).unwrap();
        for (i, px) in rgb_triples(&rgb).enumerate() {
            let expected = rgb_to_husl_pixel(px, Tables::shared(), Strategy::default());
            assert_eq!(&husl[i * 3..i * 3 + 3], &expected, "pixel {i}");
        }
    }

    #[test]
    fn test_parallel_matches_sequential_bitwise() {
        let rgb = sample_image(4096); // well above the parallel threshold
        let c = converter();
        let parallel = c.to_husl(&rgb).unwrap();
        let sequential = c.to_husl_sequential(&rgb).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_parallel_repeatable() {
        let rgb = sample_image(2048);
        let c = converter();
        let first = c.to_husl(&rgb).unwrap();
        for _ in 0..3 {
            assert_eq!(c.to_husl(&rgb).unwrap(), first);
        }
    }

    #[test]
    fn test_channel_extractors_match_full() {
        let rgb = sample_image(1500);
        let c = converter();
        let husl = c.to_husl(&rgb).unwrap();
        let hue = c.to_hue(&rgb).unwrap();
        let light = c.to_lightness(&rgb).unwrap();
        assert_eq!(hue.len(), 1500);
        for i in 0..1500 {
            assert_eq!(hue[i], husl[i * 3], "hue at pixel {i}");
            assert_eq!(light[i], husl[i * 3 + 2], "lightness at pixel {i}");
        }
    }

    #[test]
    fn test_boundary_pixels_in_bulk() {
        let mut rgb = sample_image(1200);
        rgb[0..3].copy_from_slice(&[255, 255, 255]);
        rgb[3..6].copy_from_slice(&[0, 0, 0]);
        let husl = converter().to_husl(&rgb).unwrap();
        assert_eq!(&husl[0..3], &[husl_color::WHITE_HUE, 0.0, 100.0]);
        assert_eq!(&husl[3..6], &[0.0, 0.0, 0.0]);
    }
}

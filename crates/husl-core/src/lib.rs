//! # husl-core
//!
//! Core types for bulk HUSL color conversion.
//!
//! This crate provides the foundational pieces shared by the rest of the
//! workspace:
//!
//! - [`Error`], [`Result`] - Unified error handling
//! - [`buffer`] - Validated views over flat interleaved pixel buffers
//! - [`buffer::try_alloc`] - Fallible output-buffer allocation
//!
//! ## Buffer convention
//!
//! Pixel data is a flat, contiguous, interleaved sequence of triples:
//! `R,G,B,R,G,B,...` for 8-bit input, `H,S,L,H,S,L,...` for converted
//! output. Buffer lengths are validated once, at the array level, never
//! per access.
//!
//! ## Crate structure
//!
//! This crate has no internal dependencies. All other husl-rs crates
//! depend on it:
//!
//! ```text
//! husl-core (this crate)
//!    ^
//!    |
//!    +-- husl-lut (lookup tables)
//!    +-- husl-color (conversion pipeline)
//!    +-- husl-compute (parallel driver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;

pub use buffer::{rgb_triples, triples_mut, pixel_count, try_alloc, CHANNELS};
pub use error::{Error, Result};

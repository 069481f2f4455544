//! # husl-transfer
//!
//! sRGB transfer functions (EOTF/OETF) for the HUSL pipeline.
//!
//! The forward pipeline decodes 8-bit channels through a precomputed
//! 256-entry table ([`srgb::decode_table`]); the reverse pipeline re-encodes
//! linear light with [`srgb::oetf`]. The closed-form pair is also exported
//! for table construction and tests.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{decode_table, eotf, oetf};

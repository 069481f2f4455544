//! # husl-color
//!
//! The sRGB ↔ HUSL conversion pipeline, one pixel at a time.
//!
//! HUSL is a perceptually uniform hue/saturation/lightness encoding derived
//! from CIE-LUV: hue and lightness are taken from LUV/LCH, and saturation
//! rescales chroma by the largest value attainable inside the sRGB gamut at
//! that hue and lightness, giving a [0, 100] percentage that is meaningful
//! for every color.
//!
//! # Pipeline
//!
//! ```text
//! forward:  RGB --(decode table)--> linear RGB --> XYZ --> LUV --> HUSL
//! reverse:  HUSL --> LCH --> LUV --> XYZ --> linear RGB --(OETF)--> RGB
//! ```
//!
//! The two expensive sub-computations (maximum chroma, lightness) and the
//! hue angle each have two interchangeable evaluations selected by a
//! runtime [`Strategy`]; the lookup-table variants read from the shared
//! [`Tables`] resource.
//!
//! # Quick start
//!
//! ```rust
//! use husl_color::{rgb_to_husl_pixel, husl_to_rgb_pixel, Strategy, Tables};
//!
//! let tables = Tables::shared();
//! let strategy = Strategy::default(); // all-exact
//!
//! let [h, s, l] = rgb_to_husl_pixel([128, 64, 32], tables, strategy);
//! let back = husl_to_rgb_pixel([h, s, l], tables, strategy);
//! assert_eq!(back, [128, 64, 32]);
//! ```
//!
//! Bulk (parallel) conversion over flat buffers lives in `husl-compute`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod husl;
pub mod luv;
pub mod strategy;
pub mod tables;

pub use convert::{
    husl_to_rgb_pixel, rgb_to_hue_pixel, rgb_to_husl_pixel, rgb_to_lightness_pixel,
    rgb_to_luv_pixel, luv_to_husl_pixel,
};
pub use husl::{L_MAX, L_MIN, WHITE_HUE, WHITE_LIGHTNESS, WHITE_SATURATION};
pub use strategy::{ChromaMethod, HueMethod, LightMethod, Strategy};
pub use tables::Tables;

//! # husl-math
//!
//! Closed-form math for HUSL ↔ RGB conversion.
//!
//! This crate holds the numeric heart of the pipeline:
//!
//! - [`constants`] - CIE reference white, κ/ε, and the two fixed 3×3 matrices
//! - [`xyz`] - Linear RGB ↔ CIE-XYZ projection
//! - [`light`] - Piecewise cube-root lightness, both directions
//! - [`gamut`] - Maximum in-gamut chroma for an (L, H) pair
//! - [`hue`] - Hue from (U, V), exact and approximate
//!
//! Everything here is a pure `f64` function with no failure modes; the
//! formulas are total over the domains the pipeline feeds them (boundary
//! pixels are intercepted before they reach this crate).
//!
//! # Convention
//!
//! Matrices are stored row-major and multiply column vectors:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | x |
//! | m10 m11 m12 | * | g | = | y |
//! | m20 m21 m22 |   | b |   | z |
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod constants;
pub mod gamut;
pub mod hue;
pub mod light;
pub mod xyz;

pub use constants::{EPSILON, KAPPA, REF_U, REF_V, REF_Y, RGB_TO_XYZ, XYZ_TO_RGB};
pub use gamut::max_chroma;
pub use hue::{hue_degrees, hue_degrees_approx};
pub use light::{lightness_to_y, y_to_lightness};
pub use xyz::{linear_rgb_to_xyz, xyz_to_linear_rgb};

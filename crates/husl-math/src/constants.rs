//! Shared numeric constants for the HUSL pipeline.
//!
//! # Reference
//!
//! The CIE constants and the XYZ→RGB matrix follow the husl reference
//! implementation. The forward RGB→XYZ matrix is the minimax approximation
//! from Celebi et al., "Fast Color Space Transformations Using Minimax
//! Approximations", which is what the conversion kernel was tuned against.

/// Reference white luminance (Y of D65 normalized to 1).
pub const REF_Y: f64 = 1.0;

/// u' chromaticity of the reference white.
pub const REF_U: f64 = 0.19783000664283;

/// v' chromaticity of the reference white.
pub const REF_V: f64 = 0.46831999493879;

/// CIE κ constant for the linear segment of the lightness curve.
pub const KAPPA: f64 = 903.2962962;

/// CIE ε threshold between the linear and cube-root lightness segments.
pub const EPSILON: f64 = 0.0088564516;

/// Linear RGB → XYZ, row-major (Celebi minimax approximation of sRGB/D65).
pub const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412391, 0.357584, 0.180481],
    [0.212639, 0.715169, 0.072192],
    [0.019331, 0.119195, 0.950532],
];

/// XYZ → linear RGB, row-major (husl reference matrix, sRGB/D65).
pub const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];

// Per-plane scale constants for the gamut-boundary line equations. Each
// sRGB channel hitting 0 or 1 bounds chroma along one plane; the line
// coefficients are fixed combinations of that channel's XYZ→RGB row.

/// Slope numerator scale per gamut plane: `284517·m1 − 94839·m3`.
pub const TOP1_SCALE: [f64; 3] = [
    284517.0 * XYZ_TO_RGB[0][0] - 94839.0 * XYZ_TO_RGB[0][2],
    284517.0 * XYZ_TO_RGB[1][0] - 94839.0 * XYZ_TO_RGB[1][2],
    284517.0 * XYZ_TO_RGB[2][0] - 94839.0 * XYZ_TO_RGB[2][2],
];

/// Intercept numerator scale per gamut plane:
/// `838422·m3 + 769860·m2 + 731718·m1`.
pub const TOP2_SCALE: [f64; 3] = [
    838422.0 * XYZ_TO_RGB[0][2] + 769860.0 * XYZ_TO_RGB[0][1] + 731718.0 * XYZ_TO_RGB[0][0],
    838422.0 * XYZ_TO_RGB[1][2] + 769860.0 * XYZ_TO_RGB[1][1] + 731718.0 * XYZ_TO_RGB[1][0],
    838422.0 * XYZ_TO_RGB[2][2] + 769860.0 * XYZ_TO_RGB[2][1] + 731718.0 * XYZ_TO_RGB[2][0],
];

/// Denominator scale per gamut plane: `632260·m3 − 126452·m2`.
pub const BOTTOM_SCALE: [f64; 3] = [
    632260.0 * XYZ_TO_RGB[0][2] - 126452.0 * XYZ_TO_RGB[0][1],
    632260.0 * XYZ_TO_RGB[1][2] - 126452.0 * XYZ_TO_RGB[1][1],
    632260.0 * XYZ_TO_RGB[2][2] - 126452.0 * XYZ_TO_RGB[2][1],
];

/// Offset applied to the intercept numerator of the second candidate line.
pub const TOP2_L_OFFSET: f64 = 769860.0;

/// Offset applied to the denominator of the second candidate line.
pub const BOTTOM_OFFSET: f64 = 126452.0;

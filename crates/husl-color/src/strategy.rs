//! Runtime selection between exact and approximate evaluation.
//!
//! The accuracy/performance tradeoff is an explicit, testable policy value
//! carried alongside the shared tables rather than a compile-time switch.
//! The default is all-exact; [`Strategy::approximate`] switches every axis
//! to its cheap variant.

/// Lightness evaluation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightMethod {
    /// Piecewise cube-root formula.
    #[default]
    Exact,

    /// Three-segment nearest-neighbor table; agrees with exact within
    /// 0.5 L units.
    Table,
}

/// Maximum-chroma evaluation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromaMethod {
    /// Three-plane gamut line intersection.
    #[default]
    Exact,

    /// 2D bilinear table; agrees with exact within 1.0 saturation units
    /// over the 8-bit RGB cube.
    Table,
}

/// Hue evaluation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueMethod {
    /// `f64::atan2`.
    #[default]
    Atan2,

    /// Self-normalizing rational approximation; within 0.6° of `atan2`.
    Approximate,
}

/// Evaluation policy for one conversion pass.
///
/// # Example
///
/// ```rust
/// use husl_color::{Strategy, ChromaMethod};
///
/// let fast = Strategy::approximate();
/// assert_eq!(fast.chroma, ChromaMethod::Table);
/// assert_eq!(Strategy::default().chroma, ChromaMethod::Exact);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Strategy {
    /// Lightness method (forward stage 1).
    pub light: LightMethod,
    /// Max-chroma method (both directions).
    pub chroma: ChromaMethod,
    /// Hue method (forward stage 2).
    pub hue: HueMethod,
}

impl Strategy {
    /// All-exact policy; identical to `Strategy::default()`.
    pub fn exact() -> Self {
        Self::default()
    }

    /// All-approximate policy: table lightness, table chroma, rational
    /// hue.
    pub fn approximate() -> Self {
        Self {
            light: LightMethod::Table,
            chroma: ChromaMethod::Table,
            hue: HueMethod::Approximate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        assert_eq!(Strategy::default(), Strategy::exact());
        assert_eq!(Strategy::default().light, LightMethod::Exact);
        assert_eq!(Strategy::default().hue, HueMethod::Atan2);
    }
}

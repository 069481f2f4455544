//! The precomputed read-only table set.
//!
//! All three tables are built once from the closed-form math and shared by
//! reference into every conversion; nothing mutates them afterwards, so
//! unsynchronized concurrent reads are safe. [`Tables::shared`] is the
//! lazily-initialized process-wide instance used by the convenience entry
//! points; callers that want explicit control of initialization order can
//! [`Tables::build`] their own.

use std::sync::LazyLock;

use husl_lut::{ChromaTable, LightTable};
use husl_transfer::decode_table;

/// The read-only tables consumed by the conversion pipeline.
#[derive(Debug, Clone)]
pub struct Tables {
    /// 256-entry linear-light values for 8-bit sRGB channels.
    pub linear: [f64; 256],
    /// Segmented Y → L table.
    pub light: LightTable,
    /// 2D (hue, lightness) → max-chroma table.
    pub chroma: ChromaTable,
}

impl Tables {
    /// Builds all tables from the exact formulas.
    ///
    /// The chroma grid dominates the cost (about a million closed-form
    /// gamut evaluations); intended to run once at startup.
    pub fn build() -> Self {
        Self {
            linear: decode_table(),
            light: LightTable::build(),
            chroma: ChromaTable::build(),
        }
    }

    /// Process-wide shared instance, built on first use.
    pub fn shared() -> &'static Tables {
        static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);
        &TABLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_is_singleton() {
        let a = Tables::shared() as *const Tables;
        let b = Tables::shared() as *const Tables;
        assert_eq!(a, b);
    }

    #[test]
    fn test_linear_table_endpoints() {
        let tables = Tables::shared();
        assert_eq!(tables.linear[0], 0.0);
        assert!((tables.linear[255] - 1.0).abs() < 1e-9);
    }
}

//! Error types for lookup-table construction.

use thiserror::Error;

/// Result type alias using [`LutError`].
pub type LutResult<T> = std::result::Result<T, LutError>;

/// Errors from building a lookup table out of caller-supplied data.
///
/// The in-process builders ([`crate::LightTable::build`],
/// [`crate::ChromaTable::build`]) cannot fail; these errors only arise from
/// the `from_entries` constructors.
#[derive(Debug, Error)]
pub enum LutError {
    /// Entry count does not match the table geometry.
    #[error("expected {expected} table entries, got {got}")]
    InvalidSize {
        /// Required entry count
        expected: usize,
        /// Supplied entry count
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let err = LutError::InvalidSize { expected: 3072, got: 7 };
        assert!(err.to_string().contains("3072"));
        assert!(err.to_string().contains("7"));
    }
}

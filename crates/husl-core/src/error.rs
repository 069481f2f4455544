//! Error types for HUSL conversion operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of bulk conversion:
//!
//! - Buffer shape errors: a flat pixel buffer whose length is not a
//!   multiple of the channel count
//! - Allocation errors: the output buffer could not be reserved
//!
//! Per-pixel numeric errors do not exist; every formula in the pipeline is
//! total over valid 8-bit inputs once the boundary cases are intercepted.
//!
//! # Usage
//!
//! ```rust
//! use husl_core::{Error, Result};
//!
//! fn pixel_count(buf: &[u8]) -> Result<usize> {
//!     if buf.len() % 3 != 0 {
//!         return Err(Error::InvalidLength { len: buf.len(), channels: 3 });
//!     }
//!     Ok(buf.len() / 3)
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during bulk HUSL conversion.
///
/// Uses [`thiserror`] for the [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Flat buffer length is not a multiple of the channel count.
    ///
    /// Interleaved pixel buffers must hold whole triples. Validation
    /// happens once per call, at the buffer level.
    #[error("buffer length {len} is not a multiple of {channels} channels")]
    InvalidLength {
        /// Buffer length that was rejected
        len: usize,
        /// Required channel multiple
        channels: usize,
    },

    /// Memory allocation for an output buffer failed.
    ///
    /// The conversion kernel allocates one output buffer per call. An
    /// allocation failure is reported to the caller rather than aborting
    /// the process; it is never silently ignored.
    #[error("failed to allocate {requested} bytes for output buffer")]
    AllocationFailed {
        /// Bytes requested
        requested: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidLength`] for a triple-interleaved buffer.
    #[inline]
    pub fn invalid_length(len: usize, channels: usize) -> Self {
        Self::InvalidLength { len, channels }
    }

    /// Creates an [`Error::AllocationFailed`].
    #[inline]
    pub fn allocation_failed(requested: usize) -> Self {
        Self::AllocationFailed { requested }
    }

    /// Returns `true` if this is an allocation error.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}

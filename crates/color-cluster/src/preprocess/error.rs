//! Error type for pixel preprocessing.

use thiserror::Error;

/// Error returned when a pixel grid cannot be built or sampled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreprocessError {
    /// Pixels must have 3 (RGB) or 4 (RGBA) channels
    #[error("invalid channel count {0} (expected 3 for RGB or 4 for RGBA)")]
    InvalidChannelCount(usize),
    /// Raw buffer length does not match `width * height * channels`
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    DimensionMismatch {
        /// Bytes implied by the dimensions
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },
}

//! Unified error type for the color-cluster public API.
//!
//! [`ExtractError`] wraps every stage's error so a whole extraction can be
//! driven with `?`, and names the failure condition for callers that report
//! it over the wire.

use thiserror::Error;

use crate::kmeans::ClusterError;
use crate::palette::PaletteError;
use crate::preprocess::PreprocessError;

/// Error from any stage of an extraction.
///
/// # Example
///
/// ```
/// use color_cluster::{ExtractError, NamingConvention};
///
/// fn parse(selector: &str) -> Result<NamingConvention, ExtractError> {
///     Ok(selector.parse()?)
/// }
///
/// let err = parse("foo").unwrap_err();
/// assert_eq!(err.condition(), "UnknownConvention");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
    #[error(transparent)]
    Cluster(#[from] ClusterError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    /// A remote palette could not be fetched or parsed
    #[error("palette unavailable: {0}")]
    PaletteUnavailable(String),
}

impl ExtractError {
    /// Stable name of the failure condition.
    pub fn condition(&self) -> &'static str {
        match self {
            ExtractError::Preprocess(PreprocessError::InvalidChannelCount(_)) => {
                "InvalidChannelCount"
            }
            ExtractError::Preprocess(PreprocessError::DimensionMismatch { .. }) => {
                "DimensionMismatch"
            }
            ExtractError::Cluster(ClusterError::EmptySample) => "EmptySample",
            ExtractError::Cluster(ClusterError::InvalidClusterCount(_)) => "InvalidClusterCount",
            ExtractError::Cluster(ClusterError::DidNotConverge { .. }) => {
                "ClusteringDidNotConverge"
            }
            ExtractError::Cluster(ClusterError::LabelOutOfRange { .. }) => "LabelOutOfRange",
            ExtractError::Palette(PaletteError::UnknownConvention(_)) => "UnknownConvention",
            ExtractError::Palette(_) => "InvalidPalette",
            ExtractError::PaletteUnavailable(_) => "PaletteUnavailable",
        }
    }

    /// Whether running again with a fresh random state may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExtractError::Cluster(ClusterError::DidNotConverge { .. })
        )
    }
}

//! k-means clustering of pixel samples.
//!
//! [`kmeans`] takes opaque RGB samples and a caller-owned random source and
//! returns a [`Clustering`]: one label per sample plus a centroid per
//! cluster. Optional per-channel standardization keeps one wide channel from
//! dominating the distance; centroids are mapped back to RGB before they are
//! returned.
//!
//! The engine never retries a failed run. Non-convergence is reported as
//! [`ClusterError::DidNotConverge`] and it is up to the caller to try again
//! with a fresh random state.

mod engine;
mod error;
mod normalize;
mod options;

pub use engine::{kmeans, Clustering};
pub use error::ClusterError;
pub use options::{
    KMeansOptions, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_ITERATIONS, DEFAULT_TOLERANCE,
};

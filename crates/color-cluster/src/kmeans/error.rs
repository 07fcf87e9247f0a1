use thiserror::Error;

/// Error returned by the clustering engine and the histogram builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// No pixels left to cluster (e.g. a fully transparent image)
    #[error("no pixels to cluster")]
    EmptySample,
    /// Cluster count must be at least 1
    #[error("invalid cluster count {0} (must be at least 1)")]
    InvalidClusterCount(usize),
    /// Iteration budget exhausted before centroids settled
    #[error("k-means did not converge within {iterations} iterations")]
    DidNotConverge {
        /// Iterations executed
        iterations: usize,
    },
    /// An assignment names a cluster that has no centroid
    #[error("cluster label {label} out of range for {k} clusters")]
    LabelOutOfRange {
        /// Offending label
        label: usize,
        /// Number of centroids
        k: usize,
    },
}

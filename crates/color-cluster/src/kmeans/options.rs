//! Clustering options.

/// Default iteration ceiling.
pub const DEFAULT_MAX_ITERATIONS: usize = 5000;

/// Default number of iterations before convergence is checked.
pub const DEFAULT_MIN_ITERATIONS: usize = 20;

/// Default largest centroid displacement still counted as "not moving".
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Configuration for a k-means run.
///
/// # Defaults
///
/// - k: 3
/// - normalize: true (per-channel z-score before clustering)
/// - max iterations: 5000
/// - min iterations: 20
/// - tolerance: 1e-6
///
/// A tolerance of `0.0` only accepts bit-identical centroids between two
/// iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeansOptions {
    /// Number of clusters.
    pub k: usize,

    /// Standardize each channel before clustering.
    pub normalize: bool,

    /// Hard ceiling on iterations, degenerate restarts included.
    pub max_iterations: usize,

    /// Convergence is only accepted once the iteration index exceeds this.
    pub min_iterations: usize,

    /// Largest per-centroid displacement that still counts as converged,
    /// measured in the clustering space (normalized when `normalize` is set).
    pub tolerance: f64,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            k: 3,
            normalize: true,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_iterations: DEFAULT_MIN_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl KMeansOptions {
    /// Options for `k` clusters, everything else at defaults.
    #[inline]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    #[inline]
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.normalize = enabled;
        self
    }

    #[inline]
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    #[inline]
    pub fn min_iterations(mut self, iterations: usize) -> Self {
        self.min_iterations = iterations;
        self
    }

    /// Set the convergence tolerance. Negative or NaN values become `0.0`.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance > 0.0 { tolerance } else { 0.0 };
        self
    }
}

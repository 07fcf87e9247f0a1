//! Cluster area weights.

use crate::kmeans::{ClusterError, Clustering};

/// Share of the sample covered by one cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramEntry {
    /// Cluster label
    pub cluster: usize,
    /// Fraction of sample pixels carrying this label, in `[0, 1]`
    pub weight: f64,
    /// Cluster mean in the 0..=255 RGB range
    pub centroid: [f64; 3],
}

/// Weight of every cluster, in label order.
///
/// Weights are `count(label) / N` and sum to 1 up to rounding.
///
/// # Errors
///
/// [`ClusterError::EmptySample`] when the assignment is empty,
/// [`ClusterError::LabelOutOfRange`] when a label has no centroid.
///
/// ```
/// use color_cluster::{histogram, Clustering};
///
/// let clustering = Clustering {
///     assignment: vec![0, 1, 1, 1],
///     centroids: vec![[255.0, 0.0, 0.0], [0.0, 0.0, 255.0]],
///     iterations: 1,
/// };
/// let entries = histogram(&clustering).unwrap();
/// assert_eq!(entries[0].weight, 0.25);
/// assert_eq!(entries[1].weight, 0.75);
/// ```
pub fn histogram(clustering: &Clustering) -> Result<Vec<HistogramEntry>, ClusterError> {
    let n = clustering.assignment.len();
    if n == 0 {
        return Err(ClusterError::EmptySample);
    }

    let k = clustering.k();
    let mut counts = vec![0usize; k];
    for &label in &clustering.assignment {
        let count = counts
            .get_mut(label)
            .ok_or(ClusterError::LabelOutOfRange { label, k })?;
        *count += 1;
    }

    Ok(counts
        .into_iter()
        .zip(&clustering.centroids)
        .enumerate()
        .map(|(cluster, (count, &centroid))| HistogramEntry {
            cluster,
            weight: count as f64 / n as f64,
            centroid,
        })
        .collect())
}

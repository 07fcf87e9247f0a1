//! Lloyd's k-means with random restarts on empty clusters.

use rand::Rng;

use super::error::ClusterError;
use super::normalize::ChannelStats;
use super::options::KMeansOptions;

/// Outcome of a converged k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Cluster label of each sample, in sample order. Every label in
    /// `0..k` occurs at least once.
    pub assignment: Vec<usize>,
    /// Cluster means in the 0..=255 RGB range, indexed by label.
    pub centroids: Vec<[f64; 3]>,
    /// Iterations executed, including those consumed by restarts.
    pub iterations: usize,
}

impl Clustering {
    /// Number of clusters.
    #[inline]
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
}

/// Partition `samples` into `options.k` non-empty clusters.
///
/// Initial centroids are `k` samples drawn uniformly with replacement. Each
/// iteration assigns every sample to its nearest centroid (squared
/// Euclidean distance, ties to the lower label) and recomputes the means.
/// When some cluster ends up empty, all centroids are redrawn and the
/// iteration still counts against `max_iterations`. The run stops once no
/// centroid moves more than `tolerance` and the iteration index exceeds
/// `min_iterations`.
///
/// The caller owns the random source, so seeding makes runs reproducible.
///
/// # Errors
///
/// - [`ClusterError::InvalidClusterCount`] if `k == 0`
/// - [`ClusterError::EmptySample`] if `samples` is empty
/// - [`ClusterError::DidNotConverge`] if `max_iterations` runs out; this
///   is certain when `k` exceeds the number of distinct colors
///
/// # Example
///
/// ```
/// use color_cluster::{kmeans, KMeansOptions};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut samples = vec![[250u8, 0, 0]; 10];
/// samples.extend(vec![[0u8, 0, 250]; 30]);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = kmeans(&samples, &KMeansOptions::new(2), &mut rng).unwrap();
///
/// assert_eq!(result.k(), 2);
/// let blue = result.assignment[10];
/// assert!((result.centroids[blue][2] - 250.0).abs() < 1e-9);
/// ```
pub fn kmeans<R>(
    samples: &[[u8; 3]],
    options: &KMeansOptions,
    rng: &mut R,
) -> Result<Clustering, ClusterError>
where
    R: Rng + ?Sized,
{
    let k = options.k;
    if k == 0 {
        return Err(ClusterError::InvalidClusterCount(k));
    }
    if samples.is_empty() {
        return Err(ClusterError::EmptySample);
    }

    let mut points: Vec<[f64; 3]> = samples
        .iter()
        .map(|p| [p[0] as f64, p[1] as f64, p[2] as f64])
        .collect();

    let stats = if options.normalize {
        let stats = ChannelStats::fit(&points);
        stats.apply(&mut points);
        Some(stats)
    } else {
        None
    };

    let mut centroids = draw_centroids(&points, k, rng);
    let mut assignment = vec![0usize; points.len()];

    for i in 0..options.max_iterations {
        assign(&points, &centroids, &mut assignment);

        let Some(updated) = recompute(&points, &assignment, k) else {
            centroids = draw_centroids(&points, k, rng);
            continue;
        };

        if max_displacement(&centroids, &updated) <= options.tolerance && i > options.min_iterations
        {
            let centroids = match &stats {
                Some(stats) => updated.into_iter().map(|c| stats.invert(c)).collect(),
                None => updated,
            };
            return Ok(Clustering {
                assignment,
                centroids,
                iterations: i + 1,
            });
        }

        centroids = updated;
    }

    Err(ClusterError::DidNotConverge {
        iterations: options.max_iterations,
    })
}

/// Draw `k` points uniformly with replacement.
fn draw_centroids<R>(points: &[[f64; 3]], k: usize, rng: &mut R) -> Vec<[f64; 3]>
where
    R: Rng + ?Sized,
{
    (0..k)
        .map(|_| points[rng.gen_range(0..points.len())])
        .collect()
}

#[inline]
fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

/// Label every point with its nearest centroid; ties go to the lower index.
fn assign(points: &[[f64; 3]], centroids: &[[f64; 3]], assignment: &mut [usize]) {
    for (label, point) in assignment.iter_mut().zip(points) {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (j, centroid) in centroids.iter().enumerate() {
            let dist = squared_distance(point, centroid);
            if dist < best_dist {
                best_dist = dist;
                best = j;
            }
        }
        *label = best;
    }
}

/// Per-cluster means, or `None` when a cluster has no members.
fn recompute(points: &[[f64; 3]], assignment: &[usize], k: usize) -> Option<Vec<[f64; 3]>> {
    let mut sums = vec![[0.0f64; 3]; k];
    let mut counts = vec![0usize; k];
    for (point, &label) in points.iter().zip(assignment) {
        counts[label] += 1;
        for c in 0..3 {
            sums[label][c] += point[c];
        }
    }

    if counts.contains(&0) {
        return None;
    }

    Some(
        sums.into_iter()
            .zip(counts)
            .map(|(sum, count)| sum.map(|s| s / count as f64))
            .collect(),
    )
}

/// Largest Euclidean distance any centroid moved.
fn max_displacement(old: &[[f64; 3]], new: &[[f64; 3]]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| squared_distance(a, b).sqrt())
        .fold(0.0, f64::max)
}

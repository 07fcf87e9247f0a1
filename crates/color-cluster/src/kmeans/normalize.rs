//! Per-channel standardization.

/// Mean and population standard deviation of each channel.
///
/// A channel with zero spread (solid-color images) keeps a divisor of 1.0 so
/// standardized values stay finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChannelStats {
    mean: [f64; 3],
    scale: [f64; 3],
}

impl ChannelStats {
    /// Compute stats over `points`. `points` must not be empty.
    pub(crate) fn fit(points: &[[f64; 3]]) -> Self {
        let n = points.len() as f64;
        let mut mean = [0.0; 3];
        for p in points {
            for c in 0..3 {
                mean[c] += p[c];
            }
        }
        mean = mean.map(|m| m / n);

        let mut var = [0.0; 3];
        for p in points {
            for c in 0..3 {
                var[c] += (p[c] - mean[c]).powi(2);
            }
        }
        let scale = var.map(|v| {
            let std = (v / n).sqrt();
            if std > 0.0 {
                std
            } else {
                1.0
            }
        });

        Self { mean, scale }
    }

    pub(crate) fn apply(&self, points: &mut [[f64; 3]]) {
        for p in points {
            for c in 0..3 {
                p[c] = (p[c] - self.mean[c]) / self.scale[c];
            }
        }
    }

    pub(crate) fn invert(&self, point: [f64; 3]) -> [f64; 3] {
        let mut out = point;
        for c in 0..3 {
            out[c] = point[c] * self.scale[c] + self.mean[c];
        }
        out
    }
}

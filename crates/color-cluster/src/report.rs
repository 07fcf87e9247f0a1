//! Ranked color report.

use crate::color::{Hsv, Rgb};
use crate::histogram::HistogramEntry;
use crate::palette::Palette;

/// One dominant color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// 0 for the largest cluster
    pub rank: usize,
    /// Cluster mean, 0..=255 per channel, unrounded
    pub rgb: [f64; 3],
    /// `#rrggbb` of the rounded mean
    pub hex: String,
    /// HSV of the mean, each component in `[0, 1]`
    pub hsv: [f64; 3],
    /// Name of the nearest palette color
    pub name: String,
    /// Fraction of sampled pixels in this cluster, in `[0, 1]`
    pub percentage: f64,
}

/// How a report was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMeta {
    pub has_alpha: bool,
    pub k: usize,
    /// Naming convention of the palette used
    pub color_space: String,
    pub normalize: bool,
    /// Clustering iterations executed
    pub iterations: usize,
    /// Wall time of the clustering call only
    pub compute_time_seconds: f64,
}

/// Dominant colors of one image, largest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorReport {
    pub centroids: Vec<ColorEntry>,
    pub meta: ReportMeta,
}

/// Rank histogram entries by weight and name each one.
///
/// Sorting is stable, so equal weights keep cluster order.
pub fn rank_entries(entries: &[HistogramEntry], palette: &Palette) -> Vec<ColorEntry> {
    let mut sorted: Vec<&HistogramEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    sorted
        .into_iter()
        .enumerate()
        .map(|(rank, entry)| ColorEntry {
            rank,
            rgb: entry.centroid,
            hex: Rgb::from_f64(entry.centroid).to_hex(),
            hsv: Hsv::from_rgb255(entry.centroid).to_array(),
            name: palette.nearest_name(entry.centroid).to_string(),
            percentage: entry.weight,
        })
        .collect()
}

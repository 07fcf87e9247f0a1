//! ColorExtractor builder, the main entry point of the crate.
//!
//! [`ColorExtractor`] runs preprocessing, clustering, the histogram and the
//! report assembly in sequence, configured through a fluent builder.

use std::time::Instant;

use image::imageops::FilterType;
use rand::Rng;

use super::error::ExtractError;
use crate::histogram::histogram;
use crate::kmeans::{kmeans, KMeansOptions};
use crate::palette::Palette;
use crate::preprocess::{PixelGrid, PixelSample, PreprocessOptions, Preprocessor};
use crate::report::{rank_entries, ColorReport, ReportMeta};

/// Dominant color extractor.
///
/// Configuration methods consume and return `self`; [`extract`](Self::extract)
/// borrows, so one extractor can serve many images. A run is single-threaded
/// and does not retry on its own.
///
/// # Example
///
/// ```
/// use color_cluster::{ColorExtractor, Palette, PixelGrid};
///
/// let grid = PixelGrid::filled(2, 2, &[255, 0, 0]).unwrap();
/// let report = ColorExtractor::new(1)
///     .min_iterations(0)
///     .extract(&grid, &Palette::css2())
///     .unwrap();
///
/// assert_eq!(report.centroids.len(), 1);
/// assert_eq!(report.centroids[0].name, "red");
/// assert_eq!(report.centroids[0].percentage, 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ColorExtractor {
    kmeans: KMeansOptions,
    preprocess: PreprocessOptions,
}

impl ColorExtractor {
    /// Extractor for `k` clusters with default options.
    pub fn new(k: usize) -> Self {
        Self {
            kmeans: KMeansOptions::new(k),
            preprocess: PreprocessOptions::default(),
        }
    }

    /// Standardize channels before clustering.
    #[inline]
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.kmeans = self.kmeans.normalize(enabled);
        self
    }

    #[inline]
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.kmeans = self.kmeans.max_iterations(iterations);
        self
    }

    #[inline]
    pub fn min_iterations(mut self, iterations: usize) -> Self {
        self.kmeans = self.kmeans.min_iterations(iterations);
        self
    }

    /// Centroid displacement below which a run counts as converged.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.kmeans = self.kmeans.tolerance(tolerance);
        self
    }

    /// Bound on the sampled image height.
    #[inline]
    pub fn max_height(mut self, height: u32) -> Self {
        self.preprocess = self.preprocess.max_height(height);
        self
    }

    /// Bound on the sampled image width, applied after the height bound.
    #[inline]
    pub fn max_width(mut self, width: u32) -> Self {
        self.preprocess = self.preprocess.max_width(width);
        self
    }

    /// Resampling filter used when downscaling.
    #[inline]
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.preprocess = self.preprocess.filter(filter);
        self
    }

    pub fn k(&self) -> usize {
        self.kmeans.k
    }

    pub fn kmeans_options(&self) -> &KMeansOptions {
        &self.kmeans
    }

    pub fn preprocess_options(&self) -> &PreprocessOptions {
        &self.preprocess
    }

    /// Extract dominant colors using the thread-local random source.
    pub fn extract(&self, grid: &PixelGrid, palette: &Palette) -> Result<ColorReport, ExtractError> {
        self.extract_with_rng(grid, palette, &mut rand::thread_rng())
    }

    /// Extract dominant colors with a caller-supplied random source.
    ///
    /// 1. Preprocess (downscale, flatten, strip transparent pixels)
    /// 2. Cluster
    /// 3. Weigh clusters
    /// 4. Rank and name
    pub fn extract_with_rng<R>(
        &self,
        grid: &PixelGrid,
        palette: &Palette,
        rng: &mut R,
    ) -> Result<ColorReport, ExtractError>
    where
        R: Rng + ?Sized,
    {
        let sample = Preprocessor::new(self.preprocess).process(grid)?;
        self.extract_sample(&sample, palette, rng)
    }

    /// Run clustering and reporting on an already preprocessed sample.
    pub fn extract_sample<R>(
        &self,
        sample: &PixelSample,
        palette: &Palette,
        rng: &mut R,
    ) -> Result<ColorReport, ExtractError>
    where
        R: Rng + ?Sized,
    {
        let started = Instant::now();
        let clustering = kmeans(&sample.pixels, &self.kmeans, rng)?;
        let compute_time_seconds = started.elapsed().as_secs_f64();

        let entries = histogram(&clustering)?;

        Ok(ColorReport {
            centroids: rank_entries(&entries, palette),
            meta: ReportMeta {
                has_alpha: sample.has_alpha,
                k: self.kmeans.k,
                color_space: palette.label().to_string(),
                normalize: self.kmeans.normalize,
                iterations: clustering.iterations,
                compute_time_seconds,
            },
        })
    }
}

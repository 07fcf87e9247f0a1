//! Turns a [`PixelGrid`] into a [`PixelSample`].
//!
//! The pipeline is short: downscale so the height (and optionally the
//! width) is bounded, then flatten
//! row-major and strip fully transparent pixels.

use super::error::PreprocessError;
use super::grid::{flatten_opaque, PixelGrid, PixelSample};
use super::options::PreprocessOptions;
use super::resize::downscale;

/// Builds clustering samples from decoded images.
///
/// # Example
///
/// ```
/// use color_cluster::{PixelGrid, PreprocessOptions, Preprocessor};
///
/// // 1x3 RGBA: opaque red, transparent green, half-transparent blue
/// let grid = PixelGrid::new(
///     1,
///     3,
///     4,
///     vec![255, 0, 0, 255, 0, 255, 0, 0, 0, 0, 255, 128],
/// )
/// .unwrap();
///
/// let sample = Preprocessor::new(PreprocessOptions::default())
///     .process(&grid)
///     .unwrap();
/// assert!(sample.has_alpha);
/// assert_eq!(sample.pixels, vec![[255, 0, 0], [0, 0, 255]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    #[inline]
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    /// Options this preprocessor was built with.
    #[inline]
    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Downscale, flatten and strip transparent pixels.
    ///
    /// An empty sample is not an error here; it is reported by the
    /// clustering stage, which is the first step that needs pixels.
    pub fn process(&self, grid: &PixelGrid) -> Result<PixelSample, PreprocessError> {
        let sampled = downscale(grid, &self.options)?;

        Ok(PixelSample {
            pixels: flatten_opaque(sampled.as_bytes(), sampled.channels()),
            has_alpha: sampled.has_alpha(),
            width: sampled.width(),
            height: sampled.height(),
        })
    }
}

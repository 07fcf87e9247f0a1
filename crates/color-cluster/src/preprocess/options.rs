//! Preprocessing options and configuration.

use image::imageops::FilterType;

/// Default bound on the sampled image height, in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 100;

/// Configuration for turning a pixel grid into a clustering sample.
///
/// # Defaults
///
/// - Max height: 100 pixels
/// - Max width: none
/// - Filter: [`FilterType::Triangle`], which averages the source area
///   covered by each output pixel without overshooting like Lanczos
///
/// # Example
///
/// ```
/// use color_cluster::{FilterType, PreprocessOptions};
///
/// let options = PreprocessOptions::new()
///     .max_height(64)
///     .filter(FilterType::Lanczos3);
/// assert_eq!(options.max_height, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreprocessOptions {
    /// Images taller than this are downscaled to exactly this height.
    pub max_height: u32,

    /// Optional bound on the width after the height bound is applied.
    ///
    /// Very wide images otherwise keep their full aspect ratio, so a
    /// panorama 100 pixels high can still yield millions of samples.
    pub max_width: Option<u32>,

    /// Resampling filter used when downscaling.
    pub filter: FilterType,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            max_width: None,
            filter: FilterType::Triangle,
        }
    }
}

impl PreprocessOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum sample height. Clamped to at least 1.
    #[inline]
    pub fn max_height(mut self, height: u32) -> Self {
        self.max_height = height.max(1);
        self
    }

    /// Cap the sample width as well. Clamped to at least 1.
    #[inline]
    pub fn max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width.max(1));
        self
    }

    /// Set the resampling filter.
    #[inline]
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}

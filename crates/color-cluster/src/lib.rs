#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! color-cluster: dominant color extraction with k-means
//!
//! Given a decoded image and a named color palette, this library finds the
//! `k` dominant colors of the image, weighs them by the share of pixels
//! they cover and names each one after the nearest palette color.
//!
//! # Quick Start
//!
//! The [`ColorExtractor`] builder is the primary entry point:
//!
//! ```
//! use color_cluster::{ColorExtractor, Palette, PixelGrid};
//!
//! // left half red, right half blue
//! let mut data = Vec::new();
//! for _row in 0..4 {
//!     data.extend_from_slice(&[255, 0, 0, 255, 0, 0, 0, 0, 255, 0, 0, 255]);
//! }
//! let grid = PixelGrid::new(4, 4, 3, data).unwrap();
//!
//! let report = ColorExtractor::new(2).extract(&grid, &Palette::css2()).unwrap();
//!
//! let mut names: Vec<&str> = report.centroids.iter().map(|c| c.name.as_str()).collect();
//! names.sort();
//! assert_eq!(names, vec!["blue", "red"]);
//! assert!(report.centroids.iter().all(|c| (c.percentage - 0.5).abs() < 1e-9));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelGrid (RGB or RGBA, any size)
//!     |
//!     v
//! Preprocessor          downscale to max height, flatten, drop alpha == 0
//!     |
//!     v
//! PixelSample           N opaque RGB vectors
//!     |
//!     v
//! kmeans                assignment + centroids (caller-owned RNG)
//!     |
//!     v
//! histogram             weight = count / N per cluster
//!     |
//!     v
//! rank_entries + Palette   sort by weight, HSV, nearest name
//!     |
//!     v
//! ColorReport
//! ```
//!
//! # Palettes
//!
//! [`Palette::css2()`] is built in. The xkcd list is parsed from its text
//! form with [`Palette::from_xkcd_text()`]; fetching it is left to the
//! caller, so this crate does no I/O.
//!
//! # Randomness
//!
//! Initial centroids are drawn at random. [`ColorExtractor::extract()`]
//! uses the thread-local generator; pass a seeded generator to
//! [`ColorExtractor::extract_with_rng()`] for reproducible runs. A run that
//! fails with [`ClusterError::DidNotConverge`] may succeed when retried with
//! a different random state ([`ExtractError::is_retryable()`]).

pub mod api;
pub mod color;
pub mod histogram;
pub mod kmeans;
pub mod palette;
pub mod preprocess;
pub mod report;

#[cfg(test)]
mod domain_tests;

pub use api::{ColorExtractor, ExtractError};
pub use color::{Hsv, Rgb};
pub use histogram::{histogram, HistogramEntry};
pub use image::imageops::FilterType;
pub use kmeans::{kmeans, ClusterError, Clustering, KMeansOptions};
pub use palette::{NamingConvention, Palette, PaletteEntry, PaletteError, ParseColorError};
pub use preprocess::{PixelGrid, PixelSample, PreprocessError, PreprocessOptions, Preprocessor};
pub use report::{rank_entries, ColorEntry, ColorReport, ReportMeta};

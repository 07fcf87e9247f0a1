//! Pixel preprocessing for clustering.
//!
//! Clustering cost grows with the pixel count, so large images are first
//! downscaled to a bounded height (100 pixels by default) with an averaging
//! filter. The result is flattened row-major into a [`PixelSample`].
//!
//! For RGBA input, pixels with alpha exactly 0 are dropped before the alpha
//! channel is discarded. Partially transparent pixels are kept with their
//! RGB values unchanged; no blending against a background happens.
//!
//! ```
//! use color_cluster::{PixelGrid, Preprocessor};
//!
//! let grid = PixelGrid::filled(400, 300, &[0, 128, 0]).unwrap();
//! let sample = Preprocessor::default().process(&grid).unwrap();
//!
//! assert_eq!((sample.width, sample.height), (133, 100));
//! assert!(sample.pixels.iter().all(|&p| p == [0, 128, 0]));
//! ```

mod error;
mod grid;
mod options;
mod preprocessor;
mod resize;

pub use error::PreprocessError;
pub use grid::{PixelGrid, PixelSample};
pub use options::{PreprocessOptions, DEFAULT_MAX_HEIGHT};
pub use preprocessor::Preprocessor;

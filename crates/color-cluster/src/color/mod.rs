//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit color code used by palettes and the report
//! - [`Hsv`]: hue/saturation/value triple reported for every centroid
//!
//! # Example
//!
//! ```
//! use color_cluster::{Hsv, Rgb};
//!
//! let orange: Rgb = "#ffa500".parse().unwrap();
//! let hsv = Hsv::from_rgb255(orange.to_f64());
//! assert!(hsv.h > 0.0 && hsv.h < 1.0 / 6.0);
//! ```

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;

//! Public API for the color-cluster crate.
//!
//! This module provides the high-level API: the [`ColorExtractor`] builder
//! and the [`ExtractError`] unified error type.

mod error;
mod extractor;

pub use error::ExtractError;
pub use extractor::ColorExtractor;

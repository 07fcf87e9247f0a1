//! Palette types and utilities
//!
//! This module provides named color palettes, the closed set of naming
//! conventions, and the error types for parsing and validation.

mod convention;
mod error;
mod palette;

pub use convention::NamingConvention;
pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PaletteEntry};

//! Error types for palette operations
//!
//! This module provides error types for color parsing, palette validation
//! and naming convention lookup.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette construction and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// Duplicate color code found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// A palette list line is not `name<TAB>#hex`
    #[error("malformed palette line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number in the source text
        line: usize,
        /// The offending line, trimmed
        content: String,
    },
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
    /// Naming convention selector is not one of the known conventions
    #[error("unknown naming convention '{0}' (expected one of: css2, xkcd)")]
    UnknownConvention(String),
}

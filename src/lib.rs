//! Color Extractor
//!
//! HTTP service and CLI around the `color-cluster` crate: dominant color
//! extraction with k-means and nearest color naming.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;

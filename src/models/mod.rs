pub mod config;

pub use config::{AppConfig, ExtractionConfig, ImagesConfig, PaletteConfig};

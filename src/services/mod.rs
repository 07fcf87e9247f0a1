pub mod extraction;
pub mod image_source;
pub mod palette_registry;

pub use extraction::{extract_with_retries, ExtractParams, ExtractionService};
pub use image_source::{decode_image, ImageSource, ImageSourceError};
pub use palette_registry::{
    HttpPaletteFetcher, PaletteFetcher, PaletteRegistry, PaletteSourceError,
};

//! Image loading: URL downloads, local files and decoding.

use color_cluster::PixelGrid;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::models::ImagesConfig;

#[derive(Debug, Error)]
pub enum ImageSourceError {
    #[error("failed to fetch image: {0}")]
    Fetch(String),

    #[error("image source returned status {0}")]
    Status(u16),

    #[error("image too large (max {max} bytes)")]
    TooLarge { max: usize },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

/// Downloads and reads raw image bytes within a size limit
pub struct ImageSource {
    client: reqwest::Client,
    max_bytes: usize,
}

impl ImageSource {
    pub fn new(config: &ImagesConfig) -> Result<Self, ImageSourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| ImageSourceError::Fetch(e.to_string()))?;

        Ok(Self {
            client,
            max_bytes: config.max_bytes,
        })
    }

    /// Largest accepted image, in bytes
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Download an image, rejecting non-2xx responses and oversized bodies
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageSourceError> {
        tracing::debug!(url, "Fetching image");

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageSourceError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageSourceError::Status(status.as_u16()));
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_bytes as u64)
        {
            return Err(ImageSourceError::TooLarge {
                max: self.max_bytes,
            });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ImageSourceError::Fetch(e.to_string()))?
        {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(ImageSourceError::TooLarge {
                    max: self.max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        tracing::debug!(url, bytes = body.len(), "Fetched image");
        Ok(body)
    }

    /// Load from an `http(s)://` URL or a local path
    pub async fn load(&self, source: &str) -> Result<Vec<u8>, ImageSourceError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            return self.fetch(source).await;
        }

        let bytes = tokio::fs::read(Path::new(source))
            .await
            .map_err(|e| ImageSourceError::Read {
                path: source.to_string(),
                source: e,
            })?;

        if bytes.len() > self.max_bytes {
            return Err(ImageSourceError::TooLarge {
                max: self.max_bytes,
            });
        }
        Ok(bytes)
    }
}

/// Decode PNG, JPEG, GIF, WebP or BMP bytes into a pixel grid.
///
/// Runs on the caller's thread; decoding is CPU bound.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, ImageSourceError> {
    let image = image::load_from_memory(bytes)?;
    Ok(PixelGrid::from(image))
}

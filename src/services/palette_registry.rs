//! Palette lookup by naming convention.
//!
//! The CSS2 palette is built in. The xkcd palette is fetched from a remote
//! text list the first time it is asked for and then kept for the life of
//! the registry, or until [`PaletteRegistry::refresh`] replaces it.

use async_trait::async_trait;
use color_cluster::{ExtractError, NamingConvention, Palette};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

use crate::models::PaletteConfig;

#[derive(Debug, Error)]
pub enum PaletteSourceError {
    #[error("palette request failed: {0}")]
    Request(String),

    #[error("palette source returned status {0}")]
    Status(u16),
}

/// Source of the xkcd color list text
#[async_trait]
pub trait PaletteFetcher: Send + Sync {
    /// Fetch the raw `rgb.txt` contents
    async fn fetch(&self) -> Result<String, PaletteSourceError>;

    /// Where the list comes from, for logging
    fn source(&self) -> &str;
}

/// Fetches the xkcd list over HTTP
pub struct HttpPaletteFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpPaletteFetcher {
    pub fn new(config: &PaletteConfig) -> Result<Self, PaletteSourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| PaletteSourceError::Request(e.to_string()))?;

        Ok(Self {
            client,
            url: config.xkcd_url.clone(),
        })
    }
}

#[async_trait]
impl PaletteFetcher for HttpPaletteFetcher {
    async fn fetch(&self) -> Result<String, PaletteSourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PaletteSourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PaletteSourceError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| PaletteSourceError::Request(e.to_string()))
    }

    fn source(&self) -> &str {
        &self.url
    }
}

/// Shared palettes, keyed by naming convention
pub struct PaletteRegistry {
    css2: Arc<Palette>,
    xkcd: RwLock<Option<Arc<Palette>>>,
    /// Serializes loads and refreshes; readers of a cached palette never wait on it
    fetch_guard: Mutex<()>,
    fetcher: Arc<dyn PaletteFetcher>,
}

impl PaletteRegistry {
    pub fn new(fetcher: Arc<dyn PaletteFetcher>) -> Self {
        Self {
            css2: Arc::new(Palette::css2()),
            xkcd: RwLock::new(None),
            fetch_guard: Mutex::new(()),
            fetcher,
        }
    }

    /// Palette for `convention`, loading the xkcd list on first use.
    ///
    /// A failed load is not cached; the next call tries again.
    pub async fn resolve(&self, convention: NamingConvention) -> Result<Arc<Palette>, ExtractError> {
        match convention {
            NamingConvention::Css2 => Ok(self.css2.clone()),
            NamingConvention::Xkcd => {
                if let Some(palette) = self.cached_xkcd().await {
                    tracing::debug!(entries = palette.len(), "xkcd palette cache hit");
                    return Ok(palette);
                }

                let _guard = self.fetch_guard.lock().await;
                // Another request may have finished the load while we waited
                if let Some(palette) = self.cached_xkcd().await {
                    return Ok(palette);
                }

                let palette = Arc::new(self.load_xkcd().await?);
                *self.xkcd.write().await = Some(palette.clone());
                Ok(palette)
            }
        }
    }

    /// Fetch the xkcd list again and replace the cached palette.
    ///
    /// The previous palette keeps being served while the fetch runs, and
    /// stays in place if it fails.
    pub async fn refresh(&self) -> Result<Arc<Palette>, ExtractError> {
        let _guard = self.fetch_guard.lock().await;
        let palette = Arc::new(self.load_xkcd().await?);
        *self.xkcd.write().await = Some(palette.clone());
        Ok(palette)
    }

    /// Whether the xkcd palette has been loaded
    pub async fn is_xkcd_loaded(&self) -> bool {
        self.xkcd.read().await.is_some()
    }

    async fn cached_xkcd(&self) -> Option<Arc<Palette>> {
        self.xkcd.read().await.clone()
    }

    async fn load_xkcd(&self) -> Result<Palette, ExtractError> {
        let source = self.fetcher.source();
        tracing::info!(source, "Fetching xkcd palette");

        let text = self.fetcher.fetch().await.map_err(|e| {
            tracing::warn!(%e, source, "xkcd palette fetch failed");
            ExtractError::PaletteUnavailable(e.to_string())
        })?;

        let palette = Palette::from_xkcd_text(&text).map_err(|e| {
            tracing::warn!(%e, source, "xkcd palette list is invalid");
            ExtractError::PaletteUnavailable(format!("invalid xkcd palette: {e}"))
        })?;

        tracing::info!(entries = palette.len(), "Loaded xkcd palette");
        Ok(palette)
    }
}

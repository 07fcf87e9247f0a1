//! Runs color extraction off the async runtime, with retries.

use color_cluster::{ColorExtractor, ColorReport, ExtractError, Palette, PixelGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::ExtractionConfig;
use crate::services::image_source::decode_image;

/// Per-request clustering parameters, already validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractParams {
    pub k: usize,
    pub normalize: bool,
}

/// Decodes images and extracts their dominant colors
pub struct ExtractionService {
    config: ExtractionConfig,
}

impl ExtractionService {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Decode `bytes` and extract dominant colors.
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// decoding and clustering.
    pub async fn extract_bytes(
        &self,
        bytes: Vec<u8>,
        palette: Arc<Palette>,
        params: ExtractParams,
    ) -> Result<ColorReport, ApiError> {
        let extractor = self.config.extractor(params.k, params.normalize);
        let max_retries = self.config.max_retries;

        tokio::task::spawn_blocking(move || {
            let grid = decode_image(&bytes)?;
            tracing::debug!(
                width = grid.width(),
                height = grid.height(),
                has_alpha = grid.has_alpha(),
                "Decoded image"
            );
            let mut rng = StdRng::from_entropy();
            extract_with_retries(&extractor, &grid, &palette, max_retries, &mut rng)
                .map_err(ApiError::from)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Extraction task failed: {e}")))?
    }
}

/// Run `extractor`, retrying non-convergence up to `max_retries` times.
///
/// Every attempt continues drawing from `rng`, so each one starts from
/// different centroids.
pub fn extract_with_retries<R>(
    extractor: &ColorExtractor,
    grid: &PixelGrid,
    palette: &Palette,
    max_retries: usize,
    rng: &mut R,
) -> Result<ColorReport, ExtractError>
where
    R: Rng + ?Sized,
{
    let mut attempt = 0;
    loop {
        match extractor.extract_with_rng(grid, palette, rng) {
            Ok(report) => {
                tracing::debug!(
                    k = report.meta.k,
                    iterations = report.meta.iterations,
                    attempt,
                    compute_time_seconds = report.meta.compute_time_seconds,
                    "Extraction finished"
                );
                return Ok(report);
            }
            Err(e) if e.is_retryable() && attempt < max_retries => {
                attempt += 1;
                tracing::warn!(%e, attempt, max_retries, "Clustering did not converge, retrying");
            }
            Err(e) => return Err(e),
        }
    }
}

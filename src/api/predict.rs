use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use color_cluster::{ColorReport, NamingConvention};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ExtractParams, ExtractionService, ImageSource, PaletteRegistry};

/// Query parameters shared by both predict endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PredictQuery {
    /// Image to analyse (GET only)
    pub image_url: Option<String>,
    /// Number of clusters (default from configuration, usually 3)
    pub k: Option<usize>,
    /// Naming convention: "css2" or "xkcd"
    pub color_space: Option<String>,
    /// Standardize channels before clustering
    pub normalize: Option<bool>,
}

/// One dominant color
#[derive(Debug, Serialize, ToSchema)]
pub struct CentroidResponse {
    /// 0 for the largest cluster
    pub rank: usize,
    /// Cluster mean, 0-255 per channel
    #[schema(example = json!([254.3, 1.2, 0.0]))]
    pub rgb: Vec<f64>,
    /// Hex code of the rounded mean
    #[schema(example = "#fe0100")]
    pub hex: String,
    /// Hue, saturation, value, each in 0-1
    pub hsv: Vec<f64>,
    /// Nearest palette color name
    pub name: String,
    /// Fraction of pixels in this cluster, 0-1
    pub percentage: f64,
}

/// How the result was computed
#[derive(Debug, Serialize, ToSchema)]
pub struct PredictMeta {
    pub has_alpha: bool,
    pub k: usize,
    pub color_space: String,
    pub normalize: bool,
    pub iterations: usize,
    /// Clustering time only, excluding download and decoding
    pub compute_time_seconds: f64,
}

/// Dominant colors of an image, largest first
#[derive(Debug, Serialize, ToSchema)]
pub struct PredictResponse {
    pub centroids: Vec<CentroidResponse>,
    pub meta: PredictMeta,
}

impl From<ColorReport> for PredictResponse {
    fn from(report: ColorReport) -> Self {
        Self {
            centroids: report
                .centroids
                .into_iter()
                .map(|c| CentroidResponse {
                    rank: c.rank,
                    rgb: c.rgb.to_vec(),
                    hex: c.hex,
                    hsv: c.hsv.to_vec(),
                    name: c.name,
                    percentage: c.percentage,
                })
                .collect(),
            meta: PredictMeta {
                has_alpha: report.meta.has_alpha,
                k: report.meta.k,
                color_space: report.meta.color_space,
                normalize: report.meta.normalize,
                iterations: report.meta.iterations,
                compute_time_seconds: report.meta.compute_time_seconds,
            },
        }
    }
}

/// Validate query parameters against configuration and fill in defaults.
pub fn resolve_params(
    query: &PredictQuery,
    config: &AppConfig,
) -> Result<(NamingConvention, ExtractParams), ApiError> {
    let k = query.k.unwrap_or(config.extraction.default_k);
    let max_k = config.extraction.max_k;
    if k == 0 || k > max_k {
        return Err(ApiError::InvalidParameter(format!(
            "k must be between 1 and {max_k}, got {k}"
        )));
    }

    let convention = match query.color_space.as_deref() {
        Some(selector) => selector.parse::<NamingConvention>()?,
        None => config.palette.default_convention,
    };

    let normalize = query.normalize.unwrap_or(config.extraction.normalize);

    Ok((convention, ExtractParams { k, normalize }))
}

/// Extract dominant colors from an image URL
///
/// The image is downloaded, downscaled and clustered with k-means. Each
/// cluster is named after the nearest color of the selected palette.
#[utoipa::path(
    get,
    path = "/predict",
    params(PredictQuery),
    responses(
        (status = 200, description = "Dominant colors", body = PredictResponse),
        (status = 400, description = "Invalid parameter, unknown color space or unusable image"),
        (status = 422, description = "Image has no opaque pixels"),
        (status = 502, description = "xkcd palette could not be loaded"),
        (status = 503, description = "Clustering did not converge"),
    ),
    tag = "Colors"
)]
pub async fn handle_predict(
    State(config): State<Arc<AppConfig>>,
    State(palettes): State<Arc<PaletteRegistry>>,
    State(images): State<Arc<ImageSource>>,
    State(extraction): State<Arc<ExtractionService>>,
    query: Result<Query<PredictQuery>, QueryRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidParameter(e.body_text()))?;
    let (convention, params) = resolve_params(&query, &config)?;
    let image_url = query
        .image_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidParameter("image_url is required".to_string()))?;

    tracing::info!(
        image_url,
        k = params.k,
        color_space = %convention,
        normalize = params.normalize,
        "Predict request"
    );

    let palette = palettes.resolve(convention).await?;
    let bytes = images.fetch(image_url).await?;
    let report = extraction.extract_bytes(bytes, palette, params).await?;

    Ok(Json(report.into()))
}

/// Extract dominant colors from an uploaded image
///
/// The request body is the raw image file (PNG, JPEG, GIF, WebP or BMP).
#[utoipa::path(
    post,
    path = "/predict",
    params(PredictQuery),
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Dominant colors", body = PredictResponse),
        (status = 400, description = "Invalid parameter, unknown color space or undecodable image"),
        (status = 422, description = "Image has no opaque pixels"),
        (status = 502, description = "xkcd palette could not be loaded"),
        (status = 503, description = "Clustering did not converge"),
    ),
    tag = "Colors"
)]
pub async fn handle_predict_upload(
    State(config): State<Arc<AppConfig>>,
    State(palettes): State<Arc<PaletteRegistry>>,
    State(extraction): State<Arc<ExtractionService>>,
    query: Result<Query<PredictQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidParameter(e.body_text()))?;
    let (convention, params) = resolve_params(&query, &config)?;
    if body.is_empty() {
        return Err(ApiError::InvalidParameter(
            "request body must contain an image".to_string(),
        ));
    }

    tracing::info!(
        bytes = body.len(),
        k = params.k,
        color_space = %convention,
        normalize = params.normalize,
        "Predict upload request"
    );

    let palette = palettes.resolve(convention).await?;
    let report = extraction
        .extract_bytes(body.to_vec(), palette, params)
        .await?;

    Ok(Json(report.into()))
}

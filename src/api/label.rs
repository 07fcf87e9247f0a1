use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use color_cluster::{NamingConvention, Palette};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::PaletteRegistry;

/// Colors to name
#[derive(Debug, Deserialize, ToSchema)]
pub struct LabelRequest {
    /// Naming convention: "css2" or "xkcd" (default from configuration)
    #[serde(default)]
    pub color_space: Option<String>,
    /// RGB triples, 0-255 per channel; fractional values are allowed
    #[schema(example = json!([[250, 10, 5], [0, 0, 128]]))]
    pub colors: Vec<Vec<f64>>,
}

/// Nearest palette name for every requested color, in request order
#[derive(Debug, Serialize, ToSchema)]
pub struct LabelResponse {
    pub color_space: String,
    pub labels: Vec<String>,
}

/// Name every color after its nearest palette entry.
pub fn label_colors(palette: &Palette, colors: &[Vec<f64>]) -> Result<Vec<String>, ApiError> {
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let rgb: [f64; 3] = color.as_slice().try_into().map_err(|_| {
                ApiError::InvalidParameter(format!(
                    "color {i} must have exactly 3 channels, got {}",
                    color.len()
                ))
            })?;
            if rgb.iter().any(|c| !(0.0..=255.0).contains(c)) {
                return Err(ApiError::InvalidParameter(format!(
                    "color {i} has a channel outside 0-255"
                )));
            }
            Ok(palette.nearest_name(rgb).to_string())
        })
        .collect()
}

/// Name colors
///
/// Maps each RGB triple to the name of the nearest color in the selected
/// palette (Euclidean distance in RGB space).
#[utoipa::path(
    post,
    path = "/label",
    request_body = LabelRequest,
    responses(
        (status = 200, description = "Color names", body = LabelResponse),
        (status = 400, description = "Malformed color or unknown color space"),
        (status = 502, description = "xkcd palette could not be loaded"),
    ),
    tag = "Colors"
)]
pub async fn handle_label(
    State(config): State<Arc<AppConfig>>,
    State(palettes): State<Arc<PaletteRegistry>>,
    payload: Result<Json<LabelRequest>, JsonRejection>,
) -> Result<Json<LabelResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidParameter(e.body_text()))?;

    let convention = match request.color_space.as_deref() {
        Some(selector) => selector.parse::<NamingConvention>()?,
        None => config.palette.default_convention,
    };

    tracing::info!(
        colors = request.colors.len(),
        color_space = %convention,
        "Label request"
    );

    let palette = palettes.resolve(convention).await?;
    let labels = label_colors(&palette, &request.colors)?;

    Ok(Json(LabelResponse {
        color_space: convention.to_string(),
        labels,
    }))
}

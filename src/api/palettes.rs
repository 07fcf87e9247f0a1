use axum::{
    extract::{Path, State},
    response::Json,
};
use color_cluster::{NamingConvention, Palette};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::PaletteRegistry;

/// One named palette color
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteColor {
    pub name: String,
    #[schema(example = "#acc2d9")]
    pub hex: String,
}

/// All colors of a palette, in palette order
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub color_space: String,
    pub count: usize,
    pub colors: Vec<PaletteColor>,
}

impl From<&Palette> for PaletteResponse {
    fn from(palette: &Palette) -> Self {
        Self {
            color_space: palette.label().to_string(),
            count: palette.len(),
            colors: palette
                .entries()
                .iter()
                .map(|entry| PaletteColor {
                    name: entry.name.clone(),
                    hex: entry.rgb.to_hex(),
                })
                .collect(),
        }
    }
}

/// Result of reloading a remote palette
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteRefreshResponse {
    pub color_space: String,
    pub count: usize,
}

/// List palette colors
#[utoipa::path(
    get,
    path = "/palettes/{convention}",
    params(
        ("convention" = String, Path, description = "Naming convention: 'css2' or 'xkcd'"),
    ),
    responses(
        (status = 200, description = "Palette colors", body = PaletteResponse),
        (status = 400, description = "Unknown naming convention"),
        (status = 502, description = "xkcd palette could not be loaded"),
    ),
    tag = "Palettes"
)]
pub async fn handle_palette(
    State(palettes): State<Arc<PaletteRegistry>>,
    Path(convention): Path<String>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let convention: NamingConvention = convention.parse()?;
    let palette = palettes.resolve(convention).await?;
    Ok(Json(PaletteResponse::from(palette.as_ref())))
}

/// Reload the xkcd palette
///
/// Fetches the xkcd color list again and replaces the cached palette. If the
/// fetch fails, the previously loaded palette stays in use.
#[utoipa::path(
    post,
    path = "/palettes/xkcd/refresh",
    responses(
        (status = 200, description = "Palette reloaded", body = PaletteRefreshResponse),
        (status = 502, description = "xkcd palette could not be loaded"),
    ),
    tag = "Palettes"
)]
pub async fn handle_refresh_xkcd(
    State(palettes): State<Arc<PaletteRegistry>>,
) -> Result<Json<PaletteRefreshResponse>, ApiError> {
    let palette = palettes.refresh().await?;
    tracing::info!(entries = palette.len(), "xkcd palette refreshed");

    Ok(Json(PaletteRefreshResponse {
        color_space: palette.label().to_string(),
        count: palette.len(),
    }))
}

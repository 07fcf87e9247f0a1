//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{
    ExtractionService, HttpPaletteFetcher, ImageSource, PaletteFetcher, PaletteRegistry,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub palettes: Arc<PaletteRegistry>,
    pub images: Arc<ImageSource>,
    pub extraction: Arc<ExtractionService>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<PaletteRegistry> {
    fn from_ref(state: &AppState) -> Self {
        state.palettes.clone()
    }
}

impl FromRef<AppState> for Arc<ImageSource> {
    fn from_ref(state: &AppState) -> Self {
        state.images.clone()
    }
}

impl FromRef<AppState> for Arc<ExtractionService> {
    fn from_ref(state: &AppState) -> Self {
        state.extraction.clone()
    }
}

/// Create application state, fetching the xkcd palette over HTTP.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let fetcher = HttpPaletteFetcher::new(&config.palette)
        .map_err(|e| anyhow::anyhow!("Failed to create palette fetcher: {e}"))?;
    create_app_state_with_fetcher(config, Arc::new(fetcher))
}

/// Create application state with a custom palette source.
pub fn create_app_state_with_fetcher(
    config: AppConfig,
    fetcher: Arc<dyn PaletteFetcher>,
) -> anyhow::Result<AppState> {
    let images = ImageSource::new(&config.images)
        .map_err(|e| anyhow::anyhow!("Failed to create image client: {e}"))?;
    let extraction = ExtractionService::new(config.extraction.clone());

    Ok(AppState {
        palettes: Arc::new(PaletteRegistry::new(fetcher)),
        images: Arc::new(images),
        extraction: Arc::new(extraction),
        config: Arc::new(config),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.images.max_bytes;

    Router::new()
        .route("/", get(api::handle_index))
        // Color endpoints
        .route(
            "/predict",
            get(api::handle_predict).post(api::handle_predict_upload),
        )
        .route("/label", post(api::handle_label))
        // Palettes
        .route("/palettes/:convention", get(api::handle_palette))
        .route("/palettes/xkcd/refresh", post(api::handle_refresh_xkcd))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use color_extractor::models::AppConfig;
use color_extractor::server::{build_router, create_app_state, AppState};
use color_extractor::services::PaletteRegistry;

/// Nothing listens on the discard port, so xkcd fetches fail fast
pub const UNREACHABLE_XKCD_URL: &str = "http://127.0.0.1:9/rgb.txt";

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub palettes: Arc<PaletteRegistry>,
}

impl TestApp {
    /// Create a test application whose xkcd palette cannot be fetched
    pub fn new() -> Self {
        Self::with_xkcd_url(UNREACHABLE_XKCD_URL)
    }

    /// Create a test application fetching the xkcd list from `url`
    pub fn with_xkcd_url(url: &str) -> Self {
        let mut config = Self::test_config();
        config.palette.xkcd_url = url.to_string();
        Self::with_config(config)
    }

    /// Create a test application from a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = Self::create_state(config);
        let palettes = state.palettes.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, palettes }
    }

    /// Default configuration with short timeouts
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.palette.xkcd_url = UNREACHABLE_XKCD_URL.to_string();
        config.palette.fetch_timeout_secs = 5;
        config.images.fetch_timeout_secs = 5;
        config
    }

    /// Create application state for custom router configuration
    pub fn create_state(config: AppConfig) -> AppState {
        create_app_state(config).expect("Failed to create app state")
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with a raw binary body
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/octet-stream")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

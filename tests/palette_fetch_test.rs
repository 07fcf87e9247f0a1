//! Tests for lazy loading of the xkcd palette.

mod common;

use axum::http::StatusCode;
use color_cluster::NamingConvention;
use common::{fixtures::*, *};
use std::sync::Arc;
use std::time::Duration;

use color_extractor::models::PaletteConfig;
use color_extractor::services::{HttpPaletteFetcher, PaletteRegistry};

fn registry_for(url: String) -> PaletteRegistry {
    let config = PaletteConfig {
        xkcd_url: url,
        fetch_timeout_secs: 5,
        ..Default::default()
    };
    let fetcher = HttpPaletteFetcher::new(&config).expect("Failed to build fetcher");
    PaletteRegistry::new(Arc::new(fetcher))
}

#[tokio::test]
async fn test_concurrent_first_requests_fetch_once() {
    let mock = MockHttpServer::start().await;
    mock.mock_xkcd_delayed(XKCD_SAMPLE, Duration::from_millis(200), 1)
        .await;
    let app = TestApp::with_xkcd_url(&mock.xkcd_url());

    let body = r#"{"colors": [[229, 0, 0]]}"#;
    let (a, b, c) = tokio::join!(
        app.post_json("/label", body),
        app.post_json("/label", body),
        app.get("/palettes/xkcd"),
    );

    assert_ok(&a);
    assert_ok(&b);
    assert_ok(&c);
    // The mock verifies the single fetch when it is dropped
}

#[tokio::test]
async fn test_failed_fetch_is_retried_on_next_request() {
    let mock = MockHttpServer::start().await;
    mock.mock_xkcd_failure(503, 1).await;
    mock.mock_xkcd(XKCD_SAMPLE, 1).await;
    let app = TestApp::with_xkcd_url(&mock.xkcd_url());

    let response = app.get("/palettes/xkcd").await;
    assert_api_error(&response, StatusCode::BAD_GATEWAY, "PaletteUnavailable");
    assert!(!app.palettes.is_xkcd_loaded().await);

    let response = app.get("/palettes/xkcd").await;
    assert_ok(&response);
    assert!(app.palettes.is_xkcd_loaded().await);
}

#[tokio::test]
async fn test_invalid_list_is_unavailable() {
    let mock = MockHttpServer::start().await;
    mock.mock_xkcd("<html>not a color list</html>\n", 1).await;
    let registry = registry_for(mock.xkcd_url());

    let err = registry.resolve(NamingConvention::Xkcd).await.unwrap_err();

    assert_eq!(err.condition(), "PaletteUnavailable");
    assert!(err.to_string().contains("invalid xkcd palette"));
}

#[tokio::test]
async fn test_http_fetcher_reports_status() {
    let mock = MockHttpServer::start().await;
    mock.mock_error(XKCD_PATH, 404, "gone").await;
    let registry = registry_for(mock.xkcd_url());

    let err = registry.resolve(NamingConvention::Xkcd).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "palette unavailable: palette source returned status 404"
    );
}

#[tokio::test]
async fn test_css2_never_touches_the_network() {
    let mock = MockHttpServer::start().await;
    mock.mock_xkcd(XKCD_SAMPLE, 0).await;
    let registry = registry_for(mock.xkcd_url());

    let palette = registry.resolve(NamingConvention::Css2).await.unwrap();

    assert_eq!(palette.label(), "css2");
    assert!(!registry.is_xkcd_loaded().await);
}

//! Mock HTTP server for palette lists and image URLs.

use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::fixtures::XKCD_PATH;

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockHttpServer {
    pub server: MockServer,
}

impl MockHttpServer {
    /// Start a new mock HTTP server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the base URL of the mock server
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get URL for a specific path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    /// URL of the mocked xkcd list
    pub fn xkcd_url(&self) -> String {
        self.url_for(XKCD_PATH)
    }

    /// Serve the xkcd list, expecting exactly `calls` requests
    pub async fn mock_xkcd(&self, body: &str, calls: u64) {
        Mock::given(method("GET"))
            .and(path(XKCD_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .insert_header("content-type", "text/plain"),
            )
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Serve the xkcd list after `delay`, expecting exactly `calls` requests
    pub async fn mock_xkcd_delayed(&self, body: &str, delay: Duration, calls: u64) {
        Mock::given(method("GET"))
            .and(path(XKCD_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .set_delay(delay),
            )
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Fail the next `times` xkcd requests with `status`
    pub async fn mock_xkcd_failure(&self, status: u16, times: u64) {
        Mock::given(method("GET"))
            .and(path(XKCD_PATH))
            .respond_with(ResponseTemplate::new(status))
            .up_to_n_times(times)
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Serve image bytes, expecting exactly `calls` requests
    pub async fn mock_image(&self, endpoint: &str, bytes: Vec<u8>, calls: u64) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(bytes)
                    .insert_header("content-type", "image/png"),
            )
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint that returns an error
    pub async fn mock_error(&self, endpoint: &str, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
    }
}

//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert an error response with the given status and condition name
pub fn assert_api_error(response: &TestResponse, expected: StatusCode, condition: &str) {
    assert_status(response, expected);
    assert_json_status(response, expected.as_u16());

    let json: serde_json::Value = response.json();
    assert_eq!(json["condition"], condition, "Full response: {json}");
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Assert a predict response has well-formed centroids and return them
pub fn assert_valid_predict_response(response: &TestResponse, k: usize) -> Vec<serde_json::Value> {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    let centroids = json["centroids"]
        .as_array()
        .expect("Expected centroids array")
        .clone();
    assert_eq!(centroids.len(), k, "Expected {k} centroids");
    assert_eq!(json["meta"]["k"], k);

    let total: f64 = centroids
        .iter()
        .map(|c| c["percentage"].as_f64().unwrap())
        .sum();
    assert_close(total, 1.0, 1e-9);

    for (rank, centroid) in centroids.iter().enumerate() {
        assert_eq!(centroid["rank"], rank);
        assert_eq!(centroid["rgb"].as_array().unwrap().len(), 3);
        assert_eq!(centroid["hsv"].as_array().unwrap().len(), 3);
        assert!(centroid["hex"].as_str().unwrap().starts_with('#'));
    }

    centroids
}

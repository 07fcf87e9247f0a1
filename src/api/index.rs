use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Pointer to the API documentation
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    #[serde(rename = "Color Extractor")]
    pub message: String,
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = IndexResponse),
    ),
    tag = "Service"
)]
pub async fn handle_index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "see 'docs/' endpoint for usage".to_string(),
    })
}

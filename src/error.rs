use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_cluster::{ClusterError, ExtractError, PaletteError, PreprocessError};
use serde_json::json;
use thiserror::Error;

use crate::services::ImageSourceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0}")]
    Extract(#[from] ExtractError),

    #[error("Image error: {0}")]
    Image(#[from] ImageSourceError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PaletteError> for ApiError {
    fn from(e: PaletteError) -> Self {
        ApiError::Extract(e.into())
    }
}

impl From<PreprocessError> for ApiError {
    fn from(e: PreprocessError) -> Self {
        ApiError::Extract(e.into())
    }
}

impl From<ClusterError> for ApiError {
    fn from(e: ClusterError) -> Self {
        ApiError::Extract(e.into())
    }
}

impl ApiError {
    /// Stable name of the failure condition, reported next to the message
    pub fn condition(&self) -> &'static str {
        match self {
            ApiError::InvalidParameter(_) => "InvalidParameter",
            ApiError::Extract(e) => e.condition(),
            ApiError::Image(_) => "InvalidImage",
            ApiError::Internal(_) => "Internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) | ApiError::Image(_) => StatusCode::BAD_REQUEST,
            ApiError::Extract(e) => match e {
                ExtractError::Palette(PaletteError::UnknownConvention(_)) => {
                    StatusCode::BAD_REQUEST
                }
                ExtractError::Cluster(ClusterError::InvalidClusterCount(_)) => {
                    StatusCode::BAD_REQUEST
                }
                ExtractError::Preprocess(PreprocessError::InvalidChannelCount(_))
                | ExtractError::Preprocess(PreprocessError::DimensionMismatch { .. })
                | ExtractError::Cluster(ClusterError::EmptySample) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ExtractError::Cluster(ClusterError::DidNotConverge { .. }) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                ExtractError::PaletteUnavailable(_) => StatusCode::BAD_GATEWAY,
                ExtractError::Cluster(ClusterError::LabelOutOfRange { .. })
                | ExtractError::Palette(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::warn!(error = %self, condition = self.condition(), "Request failed");
        } else {
            tracing::debug!(error = %self, condition = self.condition(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
            "condition": self.condition(),
        }));

        (status, body).into_response()
    }
}

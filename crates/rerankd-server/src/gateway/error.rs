use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use rerankd::scoring::ScoringError;

use crate::gateway::RERANKD_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("scoring failed: {0}")]
    ScoringFailed(#[from] ScoringError),
}

impl GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ScoringFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn status_label(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::ScoringFailed(_) => "scoring_error",
        }
    }
}

/// JSON body attached to every gateway failure.
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut headers = HeaderMap::new();
        headers.insert(
            RERANKD_STATUS_HEADER,
            HeaderValue::from_static(self.status_label()),
        );

        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        };

        (status, headers, Json(body)).into_response()
    }
}

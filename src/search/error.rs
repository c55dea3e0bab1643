use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use super::validate::ValidationError;
use crate::llm::LlmError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No search query provided")]
    NoQuery,
    #[error("Failed to process response: {0}")]
    Upstream(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoQuery => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::NoQuery => json!({ "error": "No search query provided" }),
            ApiError::Upstream(details) => json!({
                "error": "Failed to process response",
                "details": details,
            }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        warn!(error = %err, "LLM request failed");
        ApiError::Upstream(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        warn!(error = %err, "LLM completion rejected");
        ApiError::Upstream(err.to_string())
    }
}

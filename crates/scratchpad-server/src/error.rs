use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scratchpad_sync::StoreError;
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            AppError::NotFound("Document not found".to_string())
        } else {
            AppError::Upstream(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Upstream(e) => {
                tracing::error!("Upstream error: {}", e);
                (StatusCode::BAD_GATEWAY, "Document store unavailable")
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                (StatusCode::BAD_GATEWAY, "Malformed document")
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

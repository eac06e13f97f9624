//! JSON blob endpoints: the document service the draft managers sync with.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use scratchpad_sync::DraftStore;

use crate::error::AppError;
use crate::{AppState, BLOB_PATH};

/// Store a new document; its address comes back in `Location`
async fn create_blob(
    State(state): State<AppState>,
    Json(document): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let locator = state.blobs.create(&document).await?;
    tracing::debug!(blob_id = locator.blob_id(), "Created blob");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, locator.url().to_string())],
        Json(document),
    ))
}

async fn get_blob(
    State(state): State<AppState>,
    Path(blob_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let document = state.blobs.fetch(&blob_id).await?;
    Ok(Json(document))
}

/// Overwrite a document in full
async fn replace_blob(
    State(state): State<AppState>,
    Path(blob_id): Path<String>,
    Json(document): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let stored = state.blobs.replace(&blob_id, &document).await?;
    tracing::debug!(blob_id = %blob_id, "Replaced blob");
    Ok(Json(stored))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(BLOB_PATH, post(create_blob))
        .route(
            &format!("{}/{{blob_id}}", BLOB_PATH),
            get(get_blob).put(replace_blob),
        )
}

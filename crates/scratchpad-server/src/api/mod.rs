mod blobs;
mod health;
mod viewer;

use axum::Router;

use crate::AppState;

/// Create the API router
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(blobs::router())
        .merge(viewer::router())
}

pub mod api;
pub mod config;
pub mod error;

use axum::Router;
use scratchpad_sync::{DraftStore, JsonBlobClient, MemoryStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Path the document store is mounted under
pub const BLOB_PATH: &str = "/api/jsonBlob";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Documents served under `/api/jsonBlob`
    pub blobs: Arc<MemoryStore>,
    /// Where the viewers read documents from
    pub source: Arc<dyn DraftStore>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let blobs = Arc::new(MemoryStore::new(format!(
            "{}{}",
            config.public_origin, BLOB_PATH
        )));

        let source: Arc<dyn DraftStore> = match &config.upstream_store_url {
            Some(url) => {
                tracing::info!("Viewers read documents from {}", url);
                Arc::new(JsonBlobClient::new(url.clone()))
            }
            None => blobs.clone(),
        };

        Self { blobs, source }
    }
}

/// Build the full router with its middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers(Any),
        )
        .with_state(state)
}

/// Run the server with the given configuration
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! Read-only viewers for shared documents.
//!
//! The notebook viewer returns the whole document newest first; the code
//! editor viewer renders exactly one pen as a page.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use scratchpad_core::{Document, DraftBody, DraftCollection, NoteBody, PenBody};
use scratchpad_tools::compose_page;
use serde::Deserialize;

use crate::error::AppError;
use crate::AppState;

const EMPTY_PEN_MARKUP: &str =
    "<main class=\"empty\"><h1>Nothing to show</h1><p>This pen has no code yet.</p></main>";

#[derive(Debug, Deserialize)]
struct ViewQuery {
    draft: Option<String>,
}

async fn load<B: DraftBody>(state: &AppState, blob_id: &str) -> Result<Document<B>, AppError> {
    let value = state.source.fetch(blob_id).await?;
    Ok(Document::from_value(value)?)
}

async fn view_notebook(
    State(state): State<AppState>,
    Path(blob_id): Path<String>,
) -> Result<Json<Document<NoteBody>>, AppError> {
    let drafts = DraftCollection::from_document(load::<NoteBody>(&state, &blob_id).await?);
    let sorted = drafts.by_recency().into_iter().cloned().collect();
    Ok(Json(Document::new(sorted)))
}

async fn view_pen(
    State(state): State<AppState>,
    Path(blob_id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let draft_id = query
        .draft
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing draft parameter".to_string()))?;

    let document = load::<PenBody>(&state, &blob_id).await?;
    let draft = document
        .find(&draft_id)
        .ok_or_else(|| AppError::NotFound(format!("Draft {} not found", draft_id)))?;

    if draft.body().is_blank() {
        return Ok(Html(compose_page(EMPTY_PEN_MARKUP, "", "")));
    }
    Ok(Html(draft.body().page()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notebook/view/{blob_id}", get(view_notebook))
        .route("/code-editor/view/{blob_id}", get(view_pen))
}

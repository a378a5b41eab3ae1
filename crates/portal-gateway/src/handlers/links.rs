//! Registry endpoints.
//!
//! POST /api/create   code, url  -> `{code, url}`
//! POST /api/update   code, url  -> `{code, url}`
//! POST /api/delete   code       -> `{success: true}`
//! GET  /api/list                -> `[{code, url}, ...]`

use crate::error::{AppError, Result};
use crate::model::{DeleteResponse, LinkForm};
use crate::state::AppState;
use axum::extract::{OriginalUri, State};
use axum::Json;
use portal_core::LinkEntry;

pub async fn create_link_handler(
    State(state): State<AppState>,
    form: LinkForm,
) -> Result<Json<LinkEntry>> {
    let entry = state.registry().create(&form.code, &form.url).await?;
    Ok(Json(entry))
}

pub async fn update_link_handler(
    State(state): State<AppState>,
    form: LinkForm,
) -> Result<Json<LinkEntry>> {
    let entry = state.registry().update(&form.code, &form.url).await?;
    Ok(Json(entry))
}

pub async fn delete_link_handler(
    State(state): State<AppState>,
    form: LinkForm,
) -> Result<Json<DeleteResponse>> {
    state.registry().delete(&form.code).await?;
    Ok(Json(DeleteResponse { success: true }))
}

pub async fn list_links_handler(State(state): State<AppState>) -> Result<Json<Vec<LinkEntry>>> {
    let entries = state.registry().list().await?;
    Ok(Json(entries))
}

/// Nested routes see a stripped path, so the original URI is reported.
pub async fn api_not_found_handler(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::UnknownApiPath(uri.path().to_string())
}

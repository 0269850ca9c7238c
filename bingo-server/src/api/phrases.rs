//! Phrase pool CRUD
//!
//! - GET /api/phrases: all phrases ordered by id
//! - POST /api/phrases: add `{text}`, 201 with the new record
//! - PUT /api/phrases/:id: replace text, id unchanged
//! - DELETE /api/phrases/:id

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use bingo_common::models::PhraseText;
use bingo_common::Phrase;
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

const TEXT_REQUIRED: &str = "Phrase text is required.";

/// Response body for deletions
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Pull the text out of an add/edit body
///
/// Unparseable bodies and a missing `text` field are reported the same way as
/// blank text.
fn request_text(body: Result<Json<PhraseText>, JsonRejection>) -> ApiResult<String> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest(TEXT_REQUIRED.to_string()))?;
    body.text
        .ok_or_else(|| ApiError::BadRequest(TEXT_REQUIRED.to_string()))
}

/// Phrase id from the URL
///
/// An id that does not parse cannot match any phrase, so it is a 404 like any
/// other unknown id.
fn phrase_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    let Path(id) = path.map_err(|_| {
        ApiError::Common(bingo_common::Error::NotFound("Phrase not found.".to_string()))
    })?;
    Ok(id)
}

/// GET /api/phrases
pub async fn list_phrases(State(state): State<AppState>) -> ApiResult<Json<Vec<Phrase>>> {
    let phrases = state.store.list().await?;
    Ok(Json(phrases))
}

/// POST /api/phrases
pub async fn add_phrase(
    State(state): State<AppState>,
    body: Result<Json<PhraseText>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Phrase>)> {
    let text = request_text(body)?;
    let phrase = state.store.add(&text).await?;
    info!(id = phrase.id, "Added phrase");
    Ok((StatusCode::CREATED, Json(phrase)))
}

/// PUT /api/phrases/:id
pub async fn update_phrase(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<PhraseText>, JsonRejection>,
) -> ApiResult<Json<Phrase>> {
    let id = phrase_id(path)?;
    let text = request_text(body)?;
    let phrase = state.store.update(id, &text).await?;
    info!(id, "Updated phrase");
    Ok(Json(phrase))
}

/// DELETE /api/phrases/:id
pub async fn delete_phrase(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = phrase_id(path)?;
    state.store.delete(id).await?;
    info!(id, "Deleted phrase");
    Ok(Json(DeleteResponse {
        message: "Phrase deleted successfully.".to_string(),
    }))
}

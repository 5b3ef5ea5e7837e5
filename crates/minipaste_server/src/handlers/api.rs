//! JSON API handlers.

use super::store_submission;
use crate::error::HttpError;
use crate::{AppError, AppState, Paste};
use axum::{
    extract::{Path, State},
    Json,
};
use minipaste_core::expiration::unix_now;
use minipaste_core::models::language::{supported_languages, LanguageInfo};
use serde::Deserialize;

/// Request payload for creating a paste.
#[derive(Debug, Deserialize)]
pub struct CreatePasteRequest {
    pub content: String,
    pub language: Option<String>,
    /// Requested lifetime in seconds.
    pub expire: Option<i64>,
}

/// Create a new paste.
///
/// # Returns
/// The stored paste as JSON, with `content` HTML-escaped.
///
/// # Errors
/// Returns 400 for empty content, 413 for oversize content, 500 when
/// persistence fails.
pub async fn create_paste(
    State(state): State<AppState>,
    Json(req): Json<CreatePasteRequest>,
) -> Result<Json<Paste>, HttpError> {
    if req.content.is_empty() {
        return Err(AppError::BadRequest("Paste content is empty".to_string()).into());
    }
    let expiration = state.expiration.resolve_secs(req.expire, unix_now());
    let paste = store_submission(&state, &req.content, req.language, expiration)?;
    Ok(Json(paste))
}

/// Fetch a paste by id.
///
/// # Errors
/// Returns 404 when the paste is missing or its record is unreadable.
pub async fn get_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Paste>, HttpError> {
    Ok(Json(state.store.load(&id)?))
}

/// List supported languages.
pub async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(supported_languages())
}

//! HTTP request handlers.

/// JSON API endpoints.
pub mod api;
/// HTML page endpoints.
pub mod page;

use crate::{AppError, AppState, Language, Paste};
use minipaste_core::models::paste::check_paste_size;
use minipaste_core::text::normalize_optional_nonempty;

/// Validate and persist a submission under a fresh identifier.
///
/// Unknown or missing language tags are stored as `text`.
///
/// # Errors
/// Returns [`AppError::PayloadTooLarge`] before touching the store when
/// `raw` exceeds the configured limit, and store errors otherwise.
pub(crate) fn store_submission(
    state: &AppState,
    raw: &str,
    language: Option<String>,
    expiration: i64,
) -> Result<Paste, AppError> {
    check_paste_size(raw, state.config.max_paste_size)?;
    let requested = normalize_optional_nonempty(language);
    let language = Language::from_tag_or_default(requested.as_deref());
    if requested.is_some_and(|tag| tag != language.tag()) {
        tracing::debug!("Unsupported language tag requested; storing as {}", language);
    }

    let mut rng = state
        .rng
        .lock()
        .map_err(|_| AppError::Internal("id generator lock poisoned".to_string()))?;
    let paste = state.store.create(&mut *rng, language, expiration, raw)?;
    tracing::info!(
        "Stored paste {} ({}, {} bytes, expires {})",
        paste.id,
        paste.language,
        paste.content.len(),
        paste.expiration
    );
    Ok(paste)
}

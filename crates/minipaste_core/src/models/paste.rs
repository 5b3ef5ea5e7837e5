//! Paste entity.

use super::language::Language;
use crate::error::AppError;
use crate::text::escape_html;
use serde::Serialize;

/// A stored paste.
///
/// `content` holds HTML-escaped text exactly as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paste {
    pub id: String,
    pub language: Language,
    /// Intended deletion time as a Unix timestamp in seconds. Never enforced.
    pub expiration: i64,
    pub content: String,
}

impl Paste {
    /// Build a paste from raw submitted text, escaping it for storage.
    pub fn from_submission(id: String, language: Language, expiration: i64, raw: &str) -> Self {
        Self {
            id,
            language,
            expiration,
            content: escape_html(raw),
        }
    }
}

/// Reject submissions larger than `limit` bytes.
///
/// # Errors
/// Returns [`AppError::PayloadTooLarge`] when `raw.len() > limit`.
pub fn check_paste_size(raw: &str, limit: usize) -> Result<(), AppError> {
    if raw.len() > limit {
        return Err(AppError::PayloadTooLarge { limit });
    }
    Ok(())
}

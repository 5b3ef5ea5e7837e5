//! Record file names: `{id}-{language}-{expiration}`.

use crate::error::AppError;
use crate::models::paste::Paste;
use regex::Regex;

/// Metadata encoded positionally in a record's file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordName {
    pub id: String,
    pub language: String,
    pub expiration: i64,
}

impl RecordName {
    /// Record name under which `paste` is stored.
    pub fn for_paste(paste: &Paste) -> Self {
        Self {
            id: paste.id.clone(),
            language: paste.language.tag().to_string(),
            expiration: paste.expiration,
        }
    }

    /// File name for this record.
    pub fn encode(&self) -> String {
        format!("{}-{}-{}", self.id, self.language, self.expiration)
    }
}

/// Prefix shared by every record file belonging to `id`.
pub fn id_prefix(id: &str) -> String {
    format!("{}-", id)
}

/// Strict decoder for record file names with a fixed id length.
#[derive(Debug, Clone)]
pub struct RecordCodec {
    pattern: Regex,
}

impl RecordCodec {
    /// Build a decoder for identifiers of exactly `id_length` characters.
    ///
    /// # Errors
    /// Returns [`AppError::Internal`] if the pattern cannot be compiled.
    pub fn new(id_length: usize) -> Result<Self, AppError> {
        let pattern = Regex::new(&format!(
            "^([A-Za-z0-9]{{{}}})-([a-z0-9]+)-([0-9]+)$",
            id_length
        ))
        .map_err(|err| AppError::Internal(format!("invalid record pattern: {}", err)))?;
        Ok(Self { pattern })
    }

    /// Decode a record file name.
    ///
    /// # Errors
    /// Returns [`AppError::MalformedRecord`] when the name does not match the
    /// pattern or the expiration does not fit in an `i64`.
    pub fn decode(&self, file_name: &str) -> Result<RecordName, AppError> {
        let captures = self.pattern.captures(file_name).ok_or_else(|| {
            AppError::MalformedRecord(format!("unrecognized record name '{}'", file_name))
        })?;

        let expiration = captures[3].parse::<i64>().map_err(|err| {
            AppError::MalformedRecord(format!(
                "invalid expiration in record name '{}': {}",
                file_name, err
            ))
        })?;

        Ok(RecordName {
            id: captures[1].to_string(),
            language: captures[2].to_string(),
            expiration,
        })
    }
}

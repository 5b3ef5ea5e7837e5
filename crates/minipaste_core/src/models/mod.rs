//! Data models for pastes and the supported language table.

/// Closed set of language tags.
pub mod language;
/// Paste entity and submission helpers.
pub mod paste;

#[cfg(test)]
mod tests;

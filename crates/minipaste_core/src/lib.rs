//! Core domain library for minipaste (config, identifiers, file-backed storage).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across minipaste crates.
pub mod constants;
/// Application error types (storage/domain).
pub mod error;
/// Expiration window computation.
pub mod expiration;
/// Data models for pastes and the language table.
pub mod models;
/// Paste identifier generation.
pub mod naming;
/// Filesystem paste store and record-name codec.
pub mod store;
/// HTML escaping for stored paste content.
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use constants::{DEFAULT_ID_LENGTH, DEFAULT_MAX_PASTE_SIZE, DEFAULT_PORT};
pub use error::AppError;
pub use expiration::ExpirationWindow;
pub use models::{language::Language, paste::Paste};
pub use store::PasteStore;

//! Shared constants used across minipaste crates.

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default maximum paste size accepted by the HTTP layer (1 MiB).
pub const DEFAULT_MAX_PASTE_SIZE: usize = 1024 * 1024;

/// Default length of generated paste identifiers.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Largest identifier length accepted from configuration.
pub const MAX_ID_LENGTH: usize = 32;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default root for `scripts/`, `styles/` and `images/`.
pub const DEFAULT_ASSETS_DIR: &str = ".";

/// Alphabet identifiers are drawn from.
pub const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890abcdefghijklmnopqrstuvwxyz";

/// Attempts made to find an unused identifier before giving up.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Shortest requestable paste lifetime in seconds (1 hour).
pub const MIN_EXPIRATION_SECS: i64 = 3_600;

/// Longest requestable paste lifetime in seconds (7 days).
pub const MAX_EXPIRATION_SECS: i64 = 604_800;

/// Lifetime applied when the request does not carry a usable value.
pub const DEFAULT_EXPIRATION_SECS: i64 = 3_600;

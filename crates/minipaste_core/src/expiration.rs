//! Expiration window computation.
//!
//! The resulting timestamp is persisted with each paste but nothing in this
//! crate deletes expired pastes.

use crate::constants::{DEFAULT_EXPIRATION_SECS, MAX_EXPIRATION_SECS, MIN_EXPIRATION_SECS};
use chrono::Utc;

/// Accepted range and fallback for client-requested paste lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationWindow {
    pub min_secs: i64,
    pub max_secs: i64,
    pub default_secs: i64,
}

impl Default for ExpirationWindow {
    fn default() -> Self {
        Self {
            min_secs: MIN_EXPIRATION_SECS,
            max_secs: MAX_EXPIRATION_SECS,
            default_secs: DEFAULT_EXPIRATION_SECS,
        }
    }
}

impl ExpirationWindow {
    /// Choose the lifetime for a raw form value.
    ///
    /// A value that parses as an integer inside `[min_secs, max_secs]` is used
    /// as-is; anything else (missing, unparseable, out of range) yields
    /// `default_secs`.
    pub fn lifetime_secs(&self, requested: Option<&str>) -> i64 {
        self.lifetime_from_secs(requested.and_then(|raw| raw.trim().parse::<i64>().ok()))
    }

    /// Choose the lifetime for an already-numeric request.
    pub fn lifetime_from_secs(&self, requested: Option<i64>) -> i64 {
        requested
            .filter(|secs| (self.min_secs..=self.max_secs).contains(secs))
            .unwrap_or(self.default_secs)
    }

    /// Absolute expiration timestamp for a form value submitted at `now`.
    pub fn resolve(&self, requested: Option<&str>, now: i64) -> i64 {
        now.saturating_add(self.lifetime_secs(requested))
    }

    /// Absolute expiration timestamp for a numeric request made at `now`.
    pub fn resolve_secs(&self, requested: Option<i64>, now: i64) -> i64 {
        now.saturating_add(self.lifetime_from_secs(requested))
    }
}

/// Current Unix time in seconds.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

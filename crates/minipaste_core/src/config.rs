//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_ASSETS_DIR, DEFAULT_DATA_DIR, DEFAULT_ID_LENGTH, DEFAULT_MAX_PASTE_SIZE,
    DEFAULT_PORT, MAX_ID_LENGTH,
};
use std::env;
use std::path::PathBuf;

/// Runtime configuration for minipaste.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    pub port: u16,
    pub max_paste_size: usize,
    pub id_length: usize,
    pub assets_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            port: DEFAULT_PORT,
            max_paste_size: DEFAULT_MAX_PASTE_SIZE,
            id_length: DEFAULT_ID_LENGTH,
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
        }
    }
}

/// Expand a leading `~/` to the home directory reported by `lookup`.
fn expand_tilde<F>(path: String, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir(lookup) {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn parse_id_length(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|len| (1..=MAX_ID_LENGTH).contains(len))
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            data_dir: lookup("DATA_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(|dir| expand_tilde(dir, &lookup))
                .unwrap_or(defaults.data_dir),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            max_paste_size: lookup("MAX_PASTE_SIZE")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_paste_size),
            id_length: lookup("ID_LENGTH")
                .and_then(|raw| parse_id_length(&raw))
                .unwrap_or(defaults.id_length),
            assets_dir: lookup("ASSETS_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(|dir| expand_tilde(dir, &lookup))
                .unwrap_or(defaults.assets_dir),
        }
    }
}

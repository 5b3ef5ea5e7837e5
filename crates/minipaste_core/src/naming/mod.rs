//! Utilities for generating short public paste identifiers.

use crate::constants::{ID_ALPHABET, MAX_ID_ATTEMPTS};
use crate::error::AppError;
use rand::Rng;

/// Generate a random identifier of `len` characters.
///
/// Each character is drawn independently and uniformly from
/// [`ID_ALPHABET`]. No uniqueness check is performed.
///
/// # Returns
/// A `len`-character string matching `^[A-Za-z0-9]{len}$`.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Generate an identifier for which `exists_check` reports no prior use.
///
/// # Returns
/// The first candidate for which `exists_check` returned `Ok(false)`.
///
/// # Errors
/// Propagates errors from `exists_check`, and returns
/// [`AppError::IdSpaceExhausted`] after [`MAX_ID_ATTEMPTS`] collisions.
pub fn generate_unique_id<R, F>(
    rng: &mut R,
    len: usize,
    mut exists_check: F,
) -> Result<String, AppError>
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> Result<bool, AppError>,
{
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let id = generate_id(rng, len);
        if !exists_check(&id)? {
            return Ok(id);
        }
        tracing::warn!("Paste id collision on '{}' (attempt {})", id, attempt);
    }
    Err(AppError::IdSpaceExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}

/// Return `true` when `id` is exactly `len` ASCII alphanumerics.
pub fn is_valid_id(id: &str, len: usize) -> bool {
    id.len() == len && id.bytes().all(|b| b.is_ascii_alphanumeric())
}

//! Shared utilities for the storage emulation.
//!
//! Provides the random token generators used for version ids, request ids,
//! and host ids. Each matches the length and alphabet of the tokens the
//! remote service hands out.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;

/// Generate a random version ID suitable for versioned objects and delete
/// markers.
///
/// Produces a URL-safe base64 string of 32 characters. Uniqueness within a
/// process is probabilistic; 24 random bytes make collisions practically
/// impossible.
///
/// # Examples
///
/// ```
/// use rustfog_storage_core::utils::generate_version_id;
///
/// let id = generate_version_id();
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
#[must_use]
pub fn generate_version_id() -> String {
    let mut rng = rand::rng();
    let mut buf = [0u8; 24];
    rng.fill(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

/// Generate an opaque request ID for error documents.
///
/// Produces a hex string of 16 characters.
///
/// # Examples
///
/// ```
/// use rustfog_storage_core::utils::generate_request_id;
///
/// let id = generate_request_id();
/// assert_eq!(id.len(), 16);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn generate_request_id() -> String {
    let mut rng = rand::rng();
    let mut buf = [0u8; 8];
    rng.fill(&mut buf);
    hex::encode(buf)
}

/// Generate an opaque host ID for error documents.
///
/// Produces a base64 string truncated to 65 characters.
///
/// # Examples
///
/// ```
/// use rustfog_storage_core::utils::generate_host_id;
///
/// let id = generate_host_id();
/// assert_eq!(id.len(), 65);
/// ```
#[must_use]
pub fn generate_host_id() -> String {
    let mut rng = rand::rng();
    let mut buf = [0u8; 51];
    rng.fill(&mut buf);
    let mut id = BASE64_STANDARD.encode(buf);
    id.truncate(65);
    id
}

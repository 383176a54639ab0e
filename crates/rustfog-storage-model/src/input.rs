//! Input shapes for storage operations.

use http::HeaderMap;

/// DeleteObject input.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP label (URI path).
    pub key: String,
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
}

/// Caller-supplied options for a DeleteObject request.
///
/// The version id, when present, is lifted into the `versionId` query
/// parameter; every other option travels verbatim as a request header.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectOptions {
    /// HTTP query: `versionId`.
    pub version_id: Option<String>,
    /// Additional request headers passed through unchanged.
    pub headers: HeaderMap,
}

impl DeleteObjectOptions {
    /// Options targeting a specific version.
    #[must_use]
    pub fn for_version(version_id: impl Into<String>) -> Self {
        Self {
            version_id: Some(version_id.into()),
            headers: HeaderMap::new(),
        }
    }
}

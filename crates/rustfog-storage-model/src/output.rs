//! Output shapes for storage operations.

/// DeleteObject output.
///
/// Either field is omitted when the service does not report the
/// corresponding response header.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectOutput {
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

//! Typed output to HTTP response serialization.
//!
//! Provides the [`IntoStorageResponse`] trait for converting operation
//! outputs into HTTP responses with the right status and headers, and
//! [`error_to_response`] for rendering [`StorageError`] values the way the
//! service reports them: a JSON error document for argument failures, an
//! empty body for not-found.

use bytes::Bytes;
use http::header::HeaderValue;
use rustfog_storage_model::document::ErrorDocument;
use rustfog_storage_model::error::{StorageError, StorageErrorCode};
use rustfog_storage_model::output::DeleteObjectOutput;

/// Trait for converting an operation output into an HTTP response.
pub trait IntoStorageResponse {
    /// Convert this output into an HTTP response.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the response cannot be constructed
    /// (e.g. a header value fails validation).
    fn into_storage_response(self) -> Result<http::Response<Bytes>, StorageError>;
}

// ---------------------------------------------------------------------------
// Helper functions for building responses
// ---------------------------------------------------------------------------

/// Set an optional header on a response builder if the value is `Some`.
fn set_optional_header(
    builder: http::response::Builder,
    name: &str,
    value: Option<&str>,
) -> http::response::Builder {
    if let Some(v) = value {
        if let Ok(hv) = HeaderValue::from_str(v) {
            return builder.header(name, hv);
        }
    }
    builder
}

/// Set an optional boolean header.
fn set_optional_bool_header(
    builder: http::response::Builder,
    name: &str,
    value: Option<bool>,
) -> http::response::Builder {
    if let Some(v) = value {
        return builder.header(name, if v { "true" } else { "false" });
    }
    builder
}

/// Build a response from a builder, converting build errors to
/// [`StorageError`].
fn build_response(
    builder: http::response::Builder,
    body: Bytes,
) -> Result<http::Response<Bytes>, StorageError> {
    builder
        .body(body)
        .map_err(|e| StorageError::internal_error(format!("failed to build HTTP response: {e}")))
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

impl IntoStorageResponse for DeleteObjectOutput {
    fn into_storage_response(self) -> Result<http::Response<Bytes>, StorageError> {
        let mut builder = http::Response::builder().status(http::StatusCode::NO_CONTENT);
        builder = set_optional_bool_header(builder, "x-amz-delete-marker", self.delete_marker);
        builder = set_optional_header(builder, "x-amz-version-id", self.version_id.as_deref());
        build_response(builder, Bytes::new())
    }
}

// ---------------------------------------------------------------------------
// StorageError to HTTP response
// ---------------------------------------------------------------------------

/// Convert a [`StorageError`] into an HTTP error response.
///
/// Not-found errors answer with an empty body; everything else carries the
/// JSON error document.
#[must_use]
pub fn error_to_response(err: &StorageError) -> http::Response<Bytes> {
    let body = if err.code == StorageErrorCode::NoSuchBucket {
        Bytes::new()
    } else {
        serde_json::to_vec(&ErrorDocument::from(err))
            .map(Bytes::from)
            .unwrap_or_default()
    };

    let mut builder = http::Response::builder().status(err.status_code);
    if !body.is_empty() {
        builder = builder.header("Content-Type", "application/json");
    }

    // Building with a valid status cannot fail; fall back to a bare 500.
    builder.body(body).unwrap_or_else(|_| {
        http::Response::builder()
            .status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .body(Bytes::new())
            .expect("static response should be valid")
    })
}

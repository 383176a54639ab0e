//! Network delete client.
//!
//! [`StorageClient`] is the real request path: it turns a
//! `(bucket, key, options)` triple into one DELETE call against the
//! configured endpoint and decodes the response into the same typed output
//! the in-memory service produces. Repeated deletes of the same target
//! converge to the same end state, so the request is safe to retry at the
//! transport layer; no retry policy lives here.

use std::time::Duration;

use http::HeaderMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rustfog_core::{RustFogConfig, RustFogError, RustFogResult};
use rustfog_storage_model::input::DeleteObjectOptions;
use rustfog_storage_model::output::DeleteObjectOutput;
use tracing::{debug, warn};

/// Characters percent-encoded in URI path segments.
///
/// Everything except unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`,
/// `~`) is encoded. Forward slashes are preserved as path separators.
const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Characters percent-encoded in query parameter values.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Request timeout applied when the caller does not supply one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors surfaced by the network request path.
#[derive(Debug, thiserror::Error)]
pub enum StorageClientError {
    /// The service answered with a status other than 204.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// The received HTTP status.
        status: http::StatusCode,
        /// The response body, if any.
        body: String,
    },

    /// Connection-level failure (DNS, connect, timeout, TLS).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A response header was present but not decodable.
    #[error("invalid {name} response header")]
    InvalidHeader {
        /// The header that failed to decode.
        name: &'static str,
    },
}

/// HTTP client for the real delete path.
///
/// Requests use virtual-hosted addressing: the bucket name is prepended to
/// the configured host, and the object key becomes the percent-encoded URL
/// path.
#[derive(Debug, Clone)]
pub struct StorageClient {
    /// Underlying HTTP client, cheap to clone.
    http: reqwest::Client,
    /// Endpoint configuration.
    config: RustFogConfig,
}

impl StorageClient {
    /// Create a client with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unsupported scheme, or an
    /// internal error if the HTTP client cannot be constructed.
    pub fn new(config: RustFogConfig) -> RustFogResult<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    ///
    /// The timeout bounds the whole request, including name resolution and
    /// connection establishment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unsupported scheme, or an
    /// internal error if the HTTP client cannot be constructed.
    pub fn with_timeout(config: RustFogConfig, timeout: Duration) -> RustFogResult<Self> {
        if config.scheme != "http" && config.scheme != "https" {
            return Err(RustFogError::Config(format!(
                "unsupported scheme: {}",
                config.scheme
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RustFogError::Internal(e.into()))?;

        Ok(Self { http, config })
    }

    /// The endpoint configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &RustFogConfig {
        &self.config
    }

    /// Compute the virtual-hosted endpoint for a bucket.
    fn endpoint(&self, bucket: &str) -> String {
        let RustFogConfig {
            host, port, scheme, ..
        } = &self.config;
        match port {
            Some(port) => format!("{scheme}://{bucket}.{host}:{port}"),
            None => format!("{scheme}://{bucket}.{host}"),
        }
    }

    /// Build the DELETE request without sending it.
    ///
    /// The object key is percent-encoded into the URL path; a version id in
    /// the options becomes the `versionId` query parameter; all other
    /// options travel verbatim as request headers.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the URL does not parse.
    pub fn build_request(
        &self,
        bucket: &str,
        key: &str,
        options: &DeleteObjectOptions,
    ) -> Result<reqwest::Request, StorageClientError> {
        let encoded_key = utf8_percent_encode(key, PATH_ENCODE_SET);
        let mut url = format!("{}/{encoded_key}", self.endpoint(bucket));
        if let Some(version_id) = &options.version_id {
            let encoded = utf8_percent_encode(version_id, QUERY_ENCODE_SET);
            url.push_str("?versionId=");
            url.push_str(&encoded.to_string());
        }

        let request = self
            .http
            .delete(&url)
            .headers(options.headers.clone())
            .build()?;
        Ok(request)
    }

    /// Delete an object or a specific object version.
    ///
    /// Expects a 204 response and decodes the `x-amz-delete-marker` and
    /// `x-amz-version-id` headers into the typed output.
    ///
    /// # Errors
    ///
    /// Returns [`StorageClientError::UnexpectedStatus`] for any non-204
    /// answer (the service reports bucket-not-found as a bodiless 404 and
    /// version-id rejections as a 400 with a JSON document), or
    /// [`StorageClientError::Transport`] for connection-level failures.
    pub async fn delete_object(
        &self,
        bucket: &str,
        key: &str,
        options: &DeleteObjectOptions,
    ) -> Result<DeleteObjectOutput, StorageClientError> {
        let request = self.build_request(bucket, key, options)?;
        debug!(url = %request.url(), "sending delete request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        if status != http::StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, bucket, key, "delete request rejected");
            return Err(StorageClientError::UnexpectedStatus { status, body });
        }

        parse_delete_headers(response.headers())
    }
}

/// Decode the delete response headers into a typed output.
///
/// # Errors
///
/// Returns [`StorageClientError::InvalidHeader`] if a recognized header is
/// present but not decodable as a string.
pub fn parse_delete_headers(headers: &HeaderMap) -> Result<DeleteObjectOutput, StorageClientError> {
    let delete_marker = headers
        .get("x-amz-delete-marker")
        .map(|v| {
            v.to_str()
                .map(|s| s == "true")
                .map_err(|_| StorageClientError::InvalidHeader {
                    name: "x-amz-delete-marker",
                })
        })
        .transpose()?;

    let version_id = headers
        .get("x-amz-version-id")
        .map(|v| {
            v.to_str()
                .map(ToOwned::to_owned)
                .map_err(|_| StorageClientError::InvalidHeader {
                    name: "x-amz-version-id",
                })
        })
        .transpose()?;

    Ok(DeleteObjectOutput {
        delete_marker,
        version_id,
    })
}

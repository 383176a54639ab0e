//! HTTP wire layer for RustFog.
//!
//! Two halves, one per direction:
//!
//! - [`response`] renders the mock's typed outputs and errors into
//!   `http::Response` values, the way the remote service would answer.
//! - [`client`] issues real DELETE requests over the network and decodes the
//!   response back into the same typed output.

pub mod client;
pub mod response;

pub use client::{StorageClient, StorageClientError, parse_delete_headers};
pub use response::{IntoStorageResponse, error_to_response};

//! Wire-level model types for the RustFog storage surface.
//!
//! The shapes here mirror the S3 HTTP binding for object deletion: inputs
//! carry URI labels and query parameters, outputs carry response headers,
//! and errors carry the code-to-status mapping the service uses on the wire
//! along with the JSON error document it renders.

pub mod document;
pub mod error;
pub mod input;
pub mod output;

pub use document::{ErrorBody, ErrorDocument};
pub use error::{StorageError, StorageErrorCode};
pub use input::{DeleteObjectInput, DeleteObjectOptions};
pub use output::DeleteObjectOutput;

//! JSON error document rendered on storage error responses.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Top-level error document: `{ "Error": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDocument {
    /// The wrapped error body.
    #[serde(rename = "Error")]
    pub error: ErrorBody,
}

/// The body of a storage error document.
///
/// Field names follow the service's wire casing. Argument fields are only
/// present for argument-validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    /// The error code, e.g. `"InvalidArgument"`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Value of the rejected request argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_value: Option<String>,
    /// Name of the rejected request argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_name: Option<String>,
    /// Opaque request identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Opaque host identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
}

impl From<&StorageError> for ErrorDocument {
    fn from(err: &StorageError) -> Self {
        Self {
            error: ErrorBody {
                code: err.code.as_str().to_owned(),
                message: err.message.clone(),
                argument_value: err.argument_value.clone(),
                argument_name: err.argument_name.clone(),
                request_id: err.request_id.clone(),
                host_id: err.host_id.clone(),
            },
        }
    }
}

//! Service-level error types.
//!
//! Defines [`StorageServiceError`], the domain error produced by state
//! operations. Converting to [`StorageError`] via
//! [`StorageServiceError::into_storage_error`] attaches the wire-level error
//! code and HTTP status.

use rustfog_storage_model::error::{StorageError, StorageErrorCode};

/// Storage service error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageServiceError {
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The requested bucket name is already taken.
    #[error("The requested bucket name is not available: {bucket}")]
    BucketAlreadyExists {
        /// The bucket name that already exists.
        bucket: String,
    },

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl StorageServiceError {
    /// Convert this error into the wire-level [`StorageError`].
    #[must_use]
    pub fn into_storage_error(self) -> StorageError {
        match self {
            Self::NoSuchBucket { bucket } => StorageError::no_such_bucket(bucket),
            Self::BucketAlreadyExists { bucket } => {
                StorageError::new(StorageErrorCode::BucketAlreadyExists).with_resource(bucket)
            }
            Self::Internal(err) => {
                let mut converted = StorageError::internal_error(err.to_string());
                converted.source = Some(err.into());
                converted
            }
        }
    }
}

/// Convenience result type for storage service operations.
pub type StorageServiceResult<T> = Result<T, StorageServiceError>;

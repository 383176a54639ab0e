//! Error codes and the structured storage error type.

use std::fmt;

/// Well-known storage service error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum StorageErrorCode {
    /// InvalidArgument error.
    InvalidArgument,
    /// NoSuchBucket error.
    NoSuchBucket,
    /// BucketAlreadyExists error.
    BucketAlreadyExists,
    /// InternalError error.
    #[default]
    InternalError,
    /// A custom error code not in the standard set.
    Custom(&'static str),
}

impl StorageErrorCode {
    /// Returns the error code as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "InvalidArgument",
            Self::NoSuchBucket => "NoSuchBucket",
            Self::BucketAlreadyExists => "BucketAlreadyExists",
            Self::InternalError => "InternalError",
            Self::Custom(s) => s,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidArgument => http::StatusCode::BAD_REQUEST,
            Self::NoSuchBucket => http::StatusCode::NOT_FOUND,
            Self::BucketAlreadyExists => http::StatusCode::CONFLICT,
            Self::InternalError | Self::Custom(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error.
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid Argument",
            Self::NoSuchBucket => "The specified bucket does not exist",
            Self::BucketAlreadyExists => "The requested bucket name is not available",
            Self::InternalError => "Internal server error",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A storage service error response.
///
/// Carries everything needed to render the wire-level error: the code and
/// message, the offending argument (for `InvalidArgument`), and the opaque
/// request/host identifiers the service stamps on every error document.
#[derive(Debug)]
pub struct StorageError {
    /// The error code.
    pub code: StorageErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The resource that caused the error.
    pub resource: Option<String>,
    /// Name of the request argument that was rejected.
    pub argument_name: Option<String>,
    /// Value of the request argument that was rejected.
    pub argument_value: Option<String>,
    /// The request ID.
    pub request_id: Option<String>,
    /// The host ID.
    pub host_id: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl StorageError {
    /// Create a new StorageError from an error code.
    #[must_use]
    pub fn new(code: StorageErrorCode) -> Self {
        let status_code = code.default_status_code();
        let message = code.default_message().to_owned();
        Self {
            code,
            message,
            resource: None,
            argument_name: None,
            argument_value: None,
            request_id: None,
            host_id: None,
            status_code,
            source: None,
        }
    }

    /// Create a new StorageError with a custom message.
    #[must_use]
    pub fn with_message(code: StorageErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new(code)
        }
    }

    /// Set the resource that caused this error.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the rejected argument name and value.
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.argument_name = Some(name.into());
        self.argument_value = Some(value.into());
        self
    }

    /// Set the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the host ID.
    #[must_use]
    pub fn with_host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = Some(host_id.into());
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a NoSuchBucket error.
    #[must_use]
    pub fn no_such_bucket(bucket_name: impl Into<String>) -> Self {
        Self::new(StorageErrorCode::NoSuchBucket).with_resource(bucket_name)
    }

    /// Create the InvalidArgument error for a version id that cannot be
    /// resolved against the bucket's current versioning state.
    #[must_use]
    pub fn invalid_version_id(version_id: impl Into<String>) -> Self {
        Self::with_message(StorageErrorCode::InvalidArgument, "Invalid version id specified")
            .with_argument("versionId", version_id)
    }

    /// Create an InternalError error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(StorageErrorCode::InternalError, message)
    }
}

/// Create a StorageError from an error code.
///
/// # Examples
///
/// ```
/// use rustfog_storage_model::storage_error;
/// use rustfog_storage_model::error::StorageErrorCode;
///
/// let err = storage_error!(NoSuchBucket);
/// assert_eq!(err.code, StorageErrorCode::NoSuchBucket);
///
/// let err = storage_error!(InvalidArgument, "Invalid version id specified");
/// assert_eq!(err.message, "Invalid version id specified");
/// ```
#[macro_export]
macro_rules! storage_error {
    ($code:ident) => {
        $crate::error::StorageError::new($crate::error::StorageErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::StorageError::with_message($crate::error::StorageErrorCode::$code, $msg)
    };
}

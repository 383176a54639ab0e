//! Base error types for RustFog infrastructure.

/// Infrastructure error type for RustFog.
///
/// Covers failures setting up clients and services, as opposed to errors
/// returned by storage operations themselves.
#[derive(Debug, thiserror::Error)]
pub enum RustFogError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for RustFog infrastructure operations.
pub type RustFogResult<T> = Result<T, RustFogError>;

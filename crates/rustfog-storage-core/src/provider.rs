//! Storage service provider.

use std::sync::Arc;

use rustfog_core::RustFogConfig;

use crate::state::StorageServiceState;

/// In-memory storage service.
///
/// Holds the shared service state and configuration. Cloning is cheap and
/// every clone operates on the same underlying state, so a mock can be
/// handed to multiple workers or test threads.
///
/// # Examples
///
/// ```
/// use rustfog_storage_core::StorageMock;
///
/// let mock = StorageMock::default();
/// mock.state().create_bucket("demo-bucket", "us-east-1").unwrap();
/// assert!(mock.state().bucket_exists("demo-bucket"));
/// ```
#[derive(Debug, Clone)]
pub struct StorageMock {
    /// Shared service state.
    state: Arc<StorageServiceState>,
    /// Service configuration.
    config: Arc<RustFogConfig>,
}

impl Default for StorageMock {
    fn default() -> Self {
        Self::new(RustFogConfig::default())
    }
}

impl StorageMock {
    /// Create a new mock with fresh, empty state.
    #[must_use]
    pub fn new(config: RustFogConfig) -> Self {
        Self {
            state: Arc::new(StorageServiceState::new()),
            config: Arc::new(config),
        }
    }

    /// Create a mock over an existing shared state.
    ///
    /// Useful when tests want several mocks observing the same buckets.
    #[must_use]
    pub fn with_state(state: Arc<StorageServiceState>, config: RustFogConfig) -> Self {
        Self {
            state,
            config: Arc::new(config),
        }
    }

    /// The shared service state.
    #[must_use]
    pub fn state(&self) -> &StorageServiceState {
        &self.state
    }

    /// The service configuration.
    #[must_use]
    pub fn config(&self) -> &RustFogConfig {
        &self.config
    }

    /// Drop all buckets and their contents.
    pub fn reset(&self) {
        self.state.reset();
    }
}

//! Service-wide state.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::Ref;
use tracing::info;

use crate::error::{StorageServiceError, StorageServiceResult};

use super::bucket::StorageBucket;
use super::object::Owner;

/// Top-level storage state holding all buckets.
///
/// Buckets live in a [`DashMap`] so requests against different buckets
/// proceed without a global lock. All state is in memory and lost when the
/// process exits.
#[derive(Debug, Default)]
pub struct StorageServiceState {
    /// All buckets, keyed by bucket name.
    buckets: DashMap<String, StorageBucket>,
}

impl StorageServiceState {
    /// Create an empty service state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`StorageServiceError::BucketAlreadyExists`] if a bucket with
    /// the same name exists.
    pub fn create_bucket(
        &self,
        name: impl Into<String>,
        region: impl Into<String>,
    ) -> StorageServiceResult<()> {
        let name = name.into();
        match self.buckets.entry(name.clone()) {
            Entry::Occupied(_) => Err(StorageServiceError::BucketAlreadyExists { bucket: name }),
            Entry::Vacant(entry) => {
                entry.insert(StorageBucket::new(&name, region, Owner::default()));
                info!(bucket = %name, "bucket created");
                Ok(())
            }
        }
    }

    /// Look up a bucket by name.
    ///
    /// # Errors
    ///
    /// Returns [`StorageServiceError::NoSuchBucket`] if the bucket does not
    /// exist.
    pub fn get_bucket(&self, name: &str) -> StorageServiceResult<Ref<'_, String, StorageBucket>> {
        self.buckets
            .get(name)
            .ok_or_else(|| StorageServiceError::NoSuchBucket {
                bucket: name.to_owned(),
            })
    }

    /// Whether a bucket with the given name exists.
    #[must_use]
    pub fn bucket_exists(&self, name: &str) -> bool {
        self.buckets.contains_key(name)
    }

    /// Number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Drop all buckets and their contents.
    pub fn reset(&self) {
        self.buckets.clear();
        info!("service state reset");
    }
}

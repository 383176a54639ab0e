//! Bucket state.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::object::Owner;
use super::table::ObjectTable;

/// A single bucket with its metadata and object table.
///
/// Object and versioning state live behind their own locks so concurrent
/// requests against different buckets never contend.
pub struct StorageBucket {
    /// Bucket name.
    name: String,
    /// Region the bucket was created in.
    region: String,
    /// Creation timestamp.
    creation_date: DateTime<Utc>,
    /// Bucket owner.
    owner: Owner,
    /// Object table, protected for concurrent request handling.
    objects: RwLock<ObjectTable>,
    /// Whether versioning has been enabled.
    ///
    /// Lock order: always acquire before `objects` when both are needed.
    versioning: RwLock<bool>,
}

impl std::fmt::Debug for StorageBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBucket")
            .field("name", &self.name)
            .field("region", &self.region)
            .field("creation_date", &self.creation_date)
            .field("versioning", &*self.versioning.read())
            .finish_non_exhaustive()
    }
}

impl StorageBucket {
    /// Create a new bucket in the given region.
    #[must_use]
    pub fn new(name: impl Into<String>, region: impl Into<String>, owner: Owner) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            creation_date: Utc::now(),
            owner,
            objects: RwLock::new(ObjectTable::default()),
            versioning: RwLock::new(false),
        }
    }

    /// Bucket name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bucket region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Creation timestamp.
    #[must_use]
    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    /// Bucket owner.
    #[must_use]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Access the object table lock.
    #[must_use]
    pub fn objects(&self) -> &RwLock<ObjectTable> {
        &self.objects
    }

    /// Whether versioning is currently enabled.
    #[must_use]
    pub fn versioning_enabled(&self) -> bool {
        *self.versioning.read()
    }

    /// Enable versioning, migrating the object table if needed.
    ///
    /// Once enabled, versioning stays enabled; calling again is a no-op.
    pub fn enable_versioning(&self) {
        let mut versioning = self.versioning.write();
        if !*versioning {
            self.objects.write().transition_to_versioned();
            *versioning = true;
        }
    }
}

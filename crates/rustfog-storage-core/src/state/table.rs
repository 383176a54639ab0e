//! Per-bucket object tables with versioning support.
//!
//! Provides [`ObjectTable`], an enum dispatching between [`KeyTable`]
//! (un-versioned) and [`VersionedKeyTable`] (versioned). Version sequences
//! are kept in insertion order, so the chronologically newest entry is always
//! the last one; that entry decides whether a key currently appears deleted.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use crate::utils::generate_version_id;

use super::object::{DeleteMarker, ObjectVersion, Owner, StorageObject};

// ---------------------------------------------------------------------------
// ObjectTable (enum dispatch)
// ---------------------------------------------------------------------------

/// Top-level object table that dispatches to either an un-versioned or
/// versioned backing table.
#[derive(Debug)]
pub enum ObjectTable {
    /// Un-versioned storage. Each key maps to exactly one object.
    Unversioned(KeyTable),
    /// Versioned storage. Each key maps to an ordered version sequence.
    Versioned(VersionedKeyTable),
}

impl Default for ObjectTable {
    fn default() -> Self {
        Self::Unversioned(KeyTable::default())
    }
}

impl ObjectTable {
    /// Store an object. Returns the previous object for un-versioned tables.
    pub fn put(&mut self, object: StorageObject) -> Option<StorageObject> {
        match self {
            Self::Unversioned(kt) => kt.put(object),
            Self::Versioned(vt) => {
                vt.put(object);
                None
            }
        }
    }

    /// Get the current object for a key.
    ///
    /// Returns `None` if the key is absent or its newest version is a delete
    /// marker.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StorageObject> {
        match self {
            Self::Unversioned(kt) => kt.get(key),
            Self::Versioned(vt) => vt.get(key),
        }
    }

    /// Get a specific version of an object by key and version ID.
    #[must_use]
    pub fn get_version(&self, key: &str, version_id: &str) -> Option<&StorageObject> {
        match self {
            Self::Unversioned(kt) => {
                // In un-versioned tables, the only valid version_id is "null".
                if version_id == "null" { kt.get(key) } else { None }
            }
            Self::Versioned(vt) => vt.get_version(key, version_id),
        }
    }

    /// Append a delete marker to a key's version sequence.
    ///
    /// Returns the freshly generated version id of the marker, or `None` for
    /// un-versioned tables, which have no marker concept.
    pub fn insert_delete_marker(&mut self, key: &str, owner: &Owner) -> Option<String> {
        match self {
            Self::Unversioned(_) => None,
            Self::Versioned(vt) => Some(vt.insert_delete_marker(key, owner)),
        }
    }

    /// Remove a specific version (object or delete marker) entirely.
    pub fn remove_version(&mut self, key: &str, version_id: &str) -> Option<ObjectVersion> {
        match self {
            Self::Unversioned(kt) => {
                if version_id == "null" {
                    kt.remove(key).map(|o| ObjectVersion::Object(Box::new(o)))
                } else {
                    None
                }
            }
            Self::Versioned(vt) => vt.remove_version(key, version_id),
        }
    }

    /// The version ids recorded for a key, oldest first.
    #[must_use]
    pub fn version_ids(&self, key: &str) -> Vec<String> {
        match self {
            Self::Unversioned(kt) => kt
                .get(key)
                .map(|o| vec![o.version_id.clone()])
                .unwrap_or_default(),
            Self::Versioned(vt) => vt.version_ids(key),
        }
    }

    /// Count of keys whose current version is a real object.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Unversioned(kt) => kt.len(),
            Self::Versioned(vt) => vt.len(),
        }
    }

    /// Whether the table contains zero current objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transition from un-versioned to versioned storage.
    ///
    /// If already versioned this is a no-op. Existing objects are migrated
    /// into single-element version sequences.
    pub fn transition_to_versioned(&mut self) {
        if let Self::Unversioned(kt) = self {
            debug!("transitioning object table from unversioned to versioned");
            let mut vt = VersionedKeyTable::default();
            for (key, obj) in std::mem::take(&mut kt.objects) {
                vt.objects
                    .insert(key, vec![ObjectVersion::Object(Box::new(obj))]);
            }
            *self = Self::Versioned(vt);
        }
    }

    /// Whether the table is in versioned mode.
    #[must_use]
    pub fn is_versioned(&self) -> bool {
        matches!(self, Self::Versioned(_))
    }
}

// ---------------------------------------------------------------------------
// KeyTable (un-versioned)
// ---------------------------------------------------------------------------

/// Un-versioned key table. Each key maps to exactly one object, conceptually
/// the `"null"` version.
#[derive(Debug, Default)]
pub struct KeyTable {
    /// Sorted map of object key to object.
    objects: BTreeMap<String, StorageObject>,
}

impl KeyTable {
    /// Insert or replace an object. Returns the previous object if any.
    pub fn put(&mut self, object: StorageObject) -> Option<StorageObject> {
        self.objects.insert(object.key.clone(), object)
    }

    /// Get an object by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StorageObject> {
        self.objects.get(key)
    }

    /// Remove an object by key. Returns the removed object if any.
    pub fn remove(&mut self, key: &str) -> Option<StorageObject> {
        self.objects.remove(key)
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

// ---------------------------------------------------------------------------
// VersionedKeyTable
// ---------------------------------------------------------------------------

/// Versioned key table. Each key maps to an ordered sequence of versions in
/// insertion order, so the last entry is the chronologically newest and
/// decides the key's current state.
#[derive(Debug, Default)]
pub struct VersionedKeyTable {
    /// Sorted map of object key to its version sequence (oldest first).
    objects: BTreeMap<String, Vec<ObjectVersion>>,
}

impl VersionedKeyTable {
    /// Insert an object, stamping a fresh version ID and appending to the
    /// version sequence.
    pub fn put(&mut self, mut object: StorageObject) {
        if object.version_id == "null" {
            object.version_id = generate_version_id();
        }
        debug!(key = %object.key, version = %object.version_id, "storing versioned object");
        let versions = self.objects.entry(object.key.clone()).or_default();
        versions.push(ObjectVersion::Object(Box::new(object)));
    }

    /// Get the current object for a key.
    ///
    /// Returns `None` if the key doesn't exist or if the newest version is a
    /// delete marker (the object appears deleted).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StorageObject> {
        self.objects.get(key).and_then(|versions| {
            let newest = versions.last()?;
            newest.as_object()
        })
    }

    /// Get a specific version of an object.
    #[must_use]
    pub fn get_version(&self, key: &str, version_id: &str) -> Option<&StorageObject> {
        self.objects.get(key).and_then(|versions| {
            versions
                .iter()
                .find(|v| v.version_id() == version_id)
                .and_then(|v| v.as_object())
        })
    }

    /// Check if a specific version ID for a key is a delete marker.
    #[must_use]
    pub fn is_delete_marker(&self, key: &str, version_id: &str) -> bool {
        self.objects
            .get(key)
            .and_then(|versions| {
                versions
                    .iter()
                    .find(|v| v.version_id() == version_id)
                    .map(ObjectVersion::is_delete_marker)
            })
            .unwrap_or(false)
    }

    /// Append a delete marker to a key's version sequence, creating the
    /// sequence if the key has never been seen.
    ///
    /// Prior versions are left untouched; the marker only hides them.
    pub fn insert_delete_marker(&mut self, key: &str, owner: &Owner) -> String {
        let version_id = generate_version_id();
        let dm = DeleteMarker {
            key: key.to_owned(),
            version_id: version_id.clone(),
            last_modified: Utc::now(),
            owner: owner.clone(),
        };

        let versions = self.objects.entry(key.to_owned()).or_default();
        versions.push(ObjectVersion::DeleteMarker(dm));
        debug!(key, version_id = %version_id, "appended delete marker");

        version_id
    }

    /// Remove a specific version (object or delete marker) entirely.
    pub fn remove_version(&mut self, key: &str, version_id: &str) -> Option<ObjectVersion> {
        let versions = self.objects.get_mut(key)?;
        let idx = versions.iter().position(|v| v.version_id() == version_id)?;
        let removed = versions.remove(idx);
        // Clean up empty version sequences.
        if versions.is_empty() {
            self.objects.remove(key);
        }
        Some(removed)
    }

    /// The version ids recorded for a key, oldest first.
    #[must_use]
    pub fn version_ids(&self, key: &str) -> Vec<String> {
        self.objects
            .get(key)
            .map(|versions| {
                versions
                    .iter()
                    .map(|v| v.version_id().to_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Count of keys whose newest version is a real object.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects
            .values()
            .filter(|versions| versions.last().is_some_and(|v| !v.is_delete_marker()))
            .count()
    }

    /// Whether zero keys have a current object.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Object version entry types.
//!
//! A key in a versioned bucket maps to an ordered sequence of
//! [`ObjectVersion`] entries, each of which is either a stored object or a
//! delete marker. The tagged enum keeps the delete state machine exhaustive:
//! every branch must say what it does with markers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Owner
// ---------------------------------------------------------------------------

/// The owner of a bucket, object, or delete marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// The canonical user ID of the owner.
    pub id: String,
    /// The display name of the owner.
    pub display_name: String,
}

impl Default for Owner {
    fn default() -> Self {
        Self {
            id: "75aa57f09aa0c8caeab4f8c24e99d10f8e7faeebf76c078efc7c6caea54ba06a".to_owned(),
            display_name: "webfile".to_owned(),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.display_name, self.id)
    }
}

// ---------------------------------------------------------------------------
// StorageObject
// ---------------------------------------------------------------------------

/// A stored object version (non-delete-marker).
///
/// Object bodies live outside this emulation; only the metadata the delete
/// surface observes is kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageObject {
    /// The object key.
    pub key: String,
    /// The version ID (`"null"` for un-versioned objects).
    pub version_id: String,
    /// The entity tag (quoted hex MD5 digest).
    pub etag: String,
    /// The object size in bytes.
    pub size: u64,
    /// The time this version was last modified.
    pub last_modified: DateTime<Utc>,
    /// The storage class (default `STANDARD`).
    pub storage_class: String,
    /// The owner of this object.
    pub owner: Owner,
}

impl StorageObject {
    /// Create an object carrying the `"null"` placeholder version id.
    ///
    /// Versioned tables stamp a fresh id on insert; un-versioned tables keep
    /// the placeholder as the object's conceptual version.
    #[must_use]
    pub fn new(key: impl Into<String>, etag: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            version_id: "null".to_owned(),
            etag: etag.into(),
            size,
            last_modified: Utc::now(),
            storage_class: "STANDARD".to_owned(),
            owner: Owner::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// DeleteMarker
// ---------------------------------------------------------------------------

/// A delete marker in a versioned bucket.
///
/// Created when an object is deleted without a target version. It hides the
/// object without erasing history and never carries a content body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMarker {
    /// The object key.
    pub key: String,
    /// The version ID of this delete marker.
    pub version_id: String,
    /// The time this delete marker was created.
    pub last_modified: DateTime<Utc>,
    /// The owner of this delete marker.
    pub owner: Owner,
}

// ---------------------------------------------------------------------------
// ObjectVersion
// ---------------------------------------------------------------------------

/// A version entry in a versioned bucket: either an object or a delete
/// marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ObjectVersion {
    /// A real object version (boxed to reduce enum size).
    Object(Box<StorageObject>),
    /// A delete-marker version.
    DeleteMarker(DeleteMarker),
}

impl ObjectVersion {
    /// Returns the object key.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Object(obj) => &obj.key,
            Self::DeleteMarker(dm) => &dm.key,
        }
    }

    /// Returns the version ID.
    #[must_use]
    pub fn version_id(&self) -> &str {
        match self {
            Self::Object(obj) => &obj.version_id,
            Self::DeleteMarker(dm) => &dm.version_id,
        }
    }

    /// Returns the last-modified timestamp.
    #[must_use]
    pub fn last_modified(&self) -> DateTime<Utc> {
        match self {
            Self::Object(obj) => obj.last_modified,
            Self::DeleteMarker(dm) => dm.last_modified,
        }
    }

    /// Returns `true` if this version is a delete marker.
    #[must_use]
    pub fn is_delete_marker(&self) -> bool {
        matches!(self, Self::DeleteMarker(_))
    }

    /// Returns a reference to the inner [`StorageObject`], if this is an
    /// object version.
    #[must_use]
    pub fn as_object(&self) -> Option<&StorageObject> {
        match self {
            Self::Object(obj) => Some(obj),
            Self::DeleteMarker(_) => None,
        }
    }

    /// Returns a reference to the inner [`DeleteMarker`], if this is a delete
    /// marker.
    #[must_use]
    pub fn as_delete_marker(&self) -> Option<&DeleteMarker> {
        match self {
            Self::Object(_) => None,
            Self::DeleteMarker(dm) => Some(dm),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Storage service state management.
//!
//! This module provides the in-memory state for the storage emulation:
//!
//! - [`StorageServiceState`] -- top-level service owning all buckets
//! - [`StorageBucket`] -- per-bucket state (objects, versioning)
//! - [`ObjectTable`] / [`KeyTable`] / [`VersionedKeyTable`] -- key-level storage
//! - [`StorageObject`] / [`DeleteMarker`] -- version entry types
//!
//! # Thread Safety
//!
//! All types are `Send + Sync`. Concurrent access is handled via:
//!
//! - `DashMap` for the bucket table
//! - `parking_lot::RwLock` for the per-bucket versioning flag and object
//!   table, serializing writers per bucket

pub(crate) mod bucket;
pub(crate) mod object;
pub(crate) mod service;
pub(crate) mod table;

pub use bucket::StorageBucket;
pub use object::{DeleteMarker, ObjectVersion, Owner, StorageObject};
pub use service::StorageServiceState;
pub use table::{KeyTable, ObjectTable, VersionedKeyTable};

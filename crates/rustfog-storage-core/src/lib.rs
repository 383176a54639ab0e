//! In-memory storage service emulation for RustFog.
//!
//! This crate reproduces the observable behavior of a remote object-storage
//! service without a network, so callers can exercise delete flows against
//! purely local state. The heart of it is the versioned-delete state machine:
//! delete markers, targeted version removal, the sentinel `"null"` version,
//! and the exact error payloads the remote service would produce.
//!
//! # Architecture
//!
//! ```text
//! StorageMock (operation handlers)
//!        |
//!        v
//! StorageServiceState (bucket table)
//!        |
//!        v
//! StorageBucket -> ObjectTable (per-key version sequences)
//! ```

pub mod error;
mod ops;
pub mod provider;
pub mod state;
pub mod utils;

pub use provider::StorageMock;

//! Integration tests for the RustFog storage surface.
//!
//! Everything runs in-process: delete scenarios drive the in-memory service
//! end to end, through the operation handler and down to the rendered HTTP
//! response. The client tests exercise request construction and response
//! decoding without requiring a live endpoint.

use std::sync::Once;

use rustfog_core::RustFogConfig;
use rustfog_storage_core::StorageMock;
use rustfog_storage_core::state::StorageObject;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a fresh in-memory storage service.
#[must_use]
pub fn storage_mock() -> StorageMock {
    init_tracing();
    StorageMock::new(RustFogConfig::default())
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create a bucket and return its name.
pub fn create_test_bucket(mock: &StorageMock, prefix: &str) -> String {
    let name = test_bucket_name(prefix);
    mock.state()
        .create_bucket(&name, "us-east-1")
        .unwrap_or_else(|e| panic!("failed to create bucket {name}: {e}"));
    name
}

/// Enable versioning on an existing bucket.
pub fn enable_versioning(mock: &StorageMock, bucket: &str) {
    mock.state()
        .get_bucket(bucket)
        .expect("bucket should exist")
        .enable_versioning();
}

/// Seed one content version for a key and return its stamped version id.
pub fn seed_version(mock: &StorageMock, bucket: &str, key: &str) -> String {
    let bucket_ref = mock.state().get_bucket(bucket).expect("bucket should exist");
    let mut objects = bucket_ref.objects().write();
    objects.put(StorageObject::new(
        key,
        "\"9bb58f26192e4ba00f01e2e7b136bbd8\"",
        42,
    ));
    objects
        .version_ids(key)
        .last()
        .cloned()
        .expect("seeded version should be recorded")
}

/// The version ids currently recorded for a key, oldest first.
#[must_use]
pub fn version_ids(mock: &StorageMock, bucket: &str, key: &str) -> Vec<String> {
    let bucket_ref = mock.state().get_bucket(bucket).expect("bucket should exist");
    let guard = bucket_ref.objects().read();
    guard.version_ids(key)
}

mod test_client;
mod test_delete;

//! Object operation handlers.

use rustfog_storage_model::error::StorageError;
use rustfog_storage_model::input::DeleteObjectInput;
use rustfog_storage_model::output::DeleteObjectOutput;
use tracing::debug;

use crate::error::StorageServiceError;
use crate::provider::StorageMock;
use crate::state::ObjectTable;
use crate::utils::{generate_host_id, generate_request_id};

impl StorageMock {
    /// Delete an object, a specific object version, or append a delete
    /// marker, depending on the bucket's versioning state and the requested
    /// version id.
    ///
    /// Un-versioned buckets accept no version id other than the `"null"`
    /// sentinel; the delete is idempotent and reports `"null"` as the
    /// affected version. Versioned buckets append a delete marker when no
    /// version id is given, hard-delete the named version when one is given
    /// and matches, tolerate a non-matching `"null"` as a no-op, and reject
    /// any other non-matching id.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the bucket does not exist, or an
    /// invalid-argument error for a version id that cannot be resolved.
    pub fn handle_delete_object(
        &self,
        input: DeleteObjectInput,
    ) -> Result<DeleteObjectOutput, StorageError> {
        let DeleteObjectInput {
            bucket: bucket_name,
            key,
            version_id,
        } = input;
        debug!(bucket = %bucket_name, key = %key, version = ?version_id, "deleting object");

        let bucket = self
            .state()
            .get_bucket(&bucket_name)
            .map_err(StorageServiceError::into_storage_error)?;

        // The whole read-decide-mutate step runs under one write guard, so
        // concurrent deletes against the same bucket serialize cleanly.
        let mut objects = bucket.objects().write();

        let output = match &mut *objects {
            ObjectTable::Versioned(table) => match version_id.as_deref() {
                None => {
                    // Soft delete: hide the key behind a fresh marker.
                    let marker_id = table.insert_delete_marker(&key, bucket.owner());
                    DeleteObjectOutput {
                        delete_marker: Some(true),
                        version_id: Some(marker_id),
                    }
                }
                Some(requested) => {
                    if let Some(removed) = table.remove_version(&key, requested) {
                        // Hard delete of exactly the named version.
                        DeleteObjectOutput {
                            delete_marker: removed.is_delete_marker().then_some(true),
                            version_id: Some(requested.to_owned()),
                        }
                    } else if requested == "null" {
                        // Tolerated sentinel: succeed without touching state.
                        DeleteObjectOutput {
                            delete_marker: None,
                            version_id: Some("null".to_owned()),
                        }
                    } else {
                        return Err(invalid_version_id_error(requested));
                    }
                }
            },
            ObjectTable::Unversioned(table) => match version_id.as_deref() {
                None | Some("null") => {
                    // Idempotent: absent keys delete successfully too.
                    table.remove(&key);
                    DeleteObjectOutput {
                        delete_marker: None,
                        version_id: Some("null".to_owned()),
                    }
                }
                Some(other) => return Err(invalid_version_id_error(other)),
            },
        };

        debug!(bucket = %bucket_name, key = %key, "delete completed");
        Ok(output)
    }
}

/// Build the invalid-version-id rejection, stamped with fresh request and
/// host ids.
fn invalid_version_id_error(version_id: &str) -> StorageError {
    StorageError::invalid_version_id(version_id)
        .with_request_id(generate_request_id())
        .with_host_id(generate_host_id())
}

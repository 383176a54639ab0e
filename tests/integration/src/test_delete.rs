//! Delete scenarios against the in-memory service.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use rustfog_storage_http::{IntoStorageResponse, error_to_response};
    use rustfog_storage_model::error::StorageErrorCode;
    use rustfog_storage_model::input::DeleteObjectInput;

    use crate::{
        create_test_bucket, enable_versioning, seed_version, storage_mock, test_bucket_name,
        version_ids,
    };

    fn delete_input(bucket: &str, key: &str, version_id: Option<&str>) -> DeleteObjectInput {
        DeleteObjectInput {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            version_id: version_id.map(ToOwned::to_owned),
        }
    }

    fn header_str<'a, B>(resp: &'a http::Response<B>, name: &str) -> Option<&'a str> {
        resp.headers().get(name).and_then(|v| v.to_str().ok())
    }

    // ---- unversioned buckets ----

    #[test]
    fn test_should_delete_and_render_unversioned_response() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "del");
        seed_version(&mock, &bucket, "doc.txt");

        let output = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", None))
            .expect("delete should succeed");
        let resp = output
            .into_storage_response()
            .expect("response should build");

        assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(header_str(&resp, "x-amz-version-id"), Some("null"));
        assert!(resp.headers().get("x-amz-delete-marker").is_none());
        assert!(resp.body().is_empty());
        assert!(version_ids(&mock, &bucket, "doc.txt").is_empty());
    }

    #[test]
    fn test_should_be_idempotent_without_versioning() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "idem");
        seed_version(&mock, &bucket, "keep.txt");
        seed_version(&mock, &bucket, "gone.txt");

        // Present, already-deleted, and never-uploaded keys all succeed.
        for key in ["gone.txt", "gone.txt", "never-uploaded.txt"] {
            let output = mock
                .handle_delete_object(delete_input(&bucket, key, None))
                .unwrap_or_else(|e| panic!("delete of {key} should succeed: {e}"));
            assert_eq!(output.version_id.as_deref(), Some("null"));
        }

        // Unrelated keys are untouched.
        assert_eq!(version_ids(&mock, &bucket, "keep.txt").len(), 1);
    }

    #[test]
    fn test_should_treat_null_sentinel_as_default_version() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "sentinel");
        seed_version(&mock, &bucket, "doc.txt");

        let output = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", Some("null")))
            .expect("null sentinel delete should succeed");

        assert_eq!(output.version_id.as_deref(), Some("null"));
        assert!(version_ids(&mock, &bucket, "doc.txt").is_empty());
    }

    #[test]
    fn test_should_render_invalid_argument_document() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "badvid");
        seed_version(&mock, &bucket, "doc.txt");

        let err = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", Some("not-a-version")))
            .expect_err("explicit version id must be rejected without versioning");
        assert_eq!(err.code, StorageErrorCode::InvalidArgument);

        let resp = error_to_response(&err);
        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(header_str(&resp, "Content-Type"), Some("application/json"));

        let json: serde_json::Value =
            serde_json::from_slice(resp.body()).expect("error body should be JSON");
        assert_eq!(json["Error"]["Code"], "InvalidArgument");
        assert_eq!(json["Error"]["Message"], "Invalid version id specified");
        assert_eq!(json["Error"]["ArgumentName"], "versionId");
        assert_eq!(json["Error"]["ArgumentValue"], "not-a-version");

        let request_id = json["Error"]["RequestId"]
            .as_str()
            .expect("request id should be present");
        assert_eq!(request_id.len(), 16);
        assert!(
            request_id
                .chars()
                .all(|c| matches!(c, '0'..='9' | 'a'..='f')),
            "request id should be lowercase hex: {request_id}"
        );
        let host_id = json["Error"]["HostId"]
            .as_str()
            .expect("host id should be present");
        assert_eq!(host_id.len(), 65);

        // Field order follows the service's document layout.
        let body = std::str::from_utf8(resp.body()).expect("utf8 body");
        let positions: Vec<usize> = [
            "\"Code\"",
            "\"Message\"",
            "\"ArgumentValue\"",
            "\"ArgumentName\"",
            "\"RequestId\"",
            "\"HostId\"",
        ]
        .iter()
        .map(|field| body.find(field).unwrap_or_else(|| panic!("missing {field}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // The rejection mutates nothing.
        assert_eq!(version_ids(&mock, &bucket, "doc.txt").len(), 1);
    }

    // ---- versioned buckets ----

    #[test]
    fn test_should_append_marker_and_report_headers() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "marker");
        enable_versioning(&mock, &bucket);
        let v1 = seed_version(&mock, &bucket, "doc.txt");
        let v2 = seed_version(&mock, &bucket, "doc.txt");

        let output = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", None))
            .expect("soft delete should succeed");
        let marker = output.version_id.clone().expect("marker id");
        let resp = output
            .into_storage_response()
            .expect("response should build");

        assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(header_str(&resp, "x-amz-delete-marker"), Some("true"));
        assert_eq!(header_str(&resp, "x-amz-version-id"), Some(marker.as_str()));

        assert_eq!(marker.len(), 32);
        assert!(
            marker
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "marker id should be url-safe: {marker}"
        );

        // Prior sequence is a strict prefix; the marker hides the object.
        assert_eq!(version_ids(&mock, &bucket, "doc.txt"), vec![v1, v2, marker]);
        let bucket_ref = mock.state().get_bucket(&bucket).expect("bucket");
        assert!(bucket_ref.objects().read().get("doc.txt").is_none());
    }

    #[test]
    fn test_should_remove_exactly_one_version() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "target");
        enable_versioning(&mock, &bucket);
        let v1 = seed_version(&mock, &bucket, "doc.txt");
        let v2 = seed_version(&mock, &bucket, "doc.txt");
        let v3 = seed_version(&mock, &bucket, "doc.txt");

        let output = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", Some(&v2)))
            .expect("targeted delete should succeed");

        assert_eq!(output.version_id.as_deref(), Some(v2.as_str()));
        assert_eq!(output.delete_marker, None);
        assert_eq!(version_ids(&mock, &bucket, "doc.txt"), vec![v1, v3.clone()]);

        // The remaining newest version is still current.
        let bucket_ref = mock.state().get_bucket(&bucket).expect("bucket");
        let guard = bucket_ref.objects().read();
        assert_eq!(guard.get("doc.txt").map(|o| o.version_id.clone()), Some(v3));
    }

    #[test]
    fn test_should_tolerate_null_version_id_without_match() {
        // Intentional service-compatibility asymmetry: a non-matching
        // "null" target succeeds as a no-op instead of erroring.
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "nullvid");
        enable_versioning(&mock, &bucket);
        let v1 = seed_version(&mock, &bucket, "doc.txt");

        let output = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", Some("null")))
            .expect("null target should be tolerated");
        let resp = output
            .into_storage_response()
            .expect("response should build");

        assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(header_str(&resp, "x-amz-version-id"), Some("null"));
        assert!(resp.headers().get("x-amz-delete-marker").is_none());
        assert_eq!(version_ids(&mock, &bucket, "doc.txt"), vec![v1]);

        // Not even an empty sequence is created for an absent key.
        mock.handle_delete_object(delete_input(&bucket, "phantom.txt", Some("null")))
            .expect("null target on absent key should be tolerated");
        assert!(version_ids(&mock, &bucket, "phantom.txt").is_empty());
    }

    #[test]
    fn test_should_reject_unknown_version_id_when_versioned() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "reject");
        enable_versioning(&mock, &bucket);
        let v1 = seed_version(&mock, &bucket, "doc.txt");

        let err = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", Some("1234567890abcdef")))
            .expect_err("unknown version id must be rejected");

        assert_eq!(err.code, StorageErrorCode::InvalidArgument);
        assert_eq!(err.argument_value.as_deref(), Some("1234567890abcdef"));
        assert_eq!(version_ids(&mock, &bucket, "doc.txt"), vec![v1]);
    }

    // ---- missing bucket ----

    #[test]
    fn test_should_fail_for_missing_bucket() {
        let mock = storage_mock();
        let bucket = test_bucket_name("ghost");

        for version_id in [None, Some("null"), Some("v123")] {
            let err = mock
                .handle_delete_object(delete_input(&bucket, "doc.txt", version_id))
                .expect_err("missing bucket must fail");
            assert_eq!(err.code, StorageErrorCode::NoSuchBucket);

            let resp = error_to_response(&err);
            assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
            assert!(resp.body().is_empty());
        }
    }

    // ---- scenarios ----

    #[test]
    fn test_should_walk_marker_then_hard_delete_scenario() -> anyhow::Result<()> {
        let mock = storage_mock();
        let bucket = test_bucket_name("walk");
        mock.state().create_bucket(&bucket, "us-east-1")?;
        enable_versioning(&mock, &bucket);
        let v1 = seed_version(&mock, &bucket, "k");
        let v2 = seed_version(&mock, &bucket, "k");

        // Soft delete: [v1, v2] becomes [v1, v2, marker].
        let output = mock.handle_delete_object(delete_input(&bucket, "k", None))?;
        let marker = output.version_id.clone().expect("marker id");
        let resp = output.into_storage_response()?;
        assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(header_str(&resp, "x-amz-delete-marker"), Some("true"));
        assert_eq!(header_str(&resp, "x-amz-version-id"), Some(marker.as_str()));
        assert_eq!(
            version_ids(&mock, &bucket, "k"),
            vec![v1.clone(), v2.clone(), marker.clone()]
        );

        // Hard delete of v1: [v1, v2, marker] becomes [v2, marker].
        let output = mock.handle_delete_object(delete_input(&bucket, "k", Some(&v1)))?;
        let resp = output.into_storage_response()?;
        assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(header_str(&resp, "x-amz-version-id"), Some(v1.as_str()));
        assert!(resp.headers().get("x-amz-delete-marker").is_none());
        assert_eq!(version_ids(&mock, &bucket, "k"), vec![v2, marker]);

        Ok(())
    }

    #[test]
    fn test_should_restore_object_after_marker_removal() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "restore");
        enable_versioning(&mock, &bucket);
        let v1 = seed_version(&mock, &bucket, "doc.txt");

        let marker = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", None))
            .expect("soft delete should succeed")
            .version_id
            .expect("marker id");

        let output = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", Some(&marker)))
            .expect("marker removal should succeed");
        assert_eq!(output.delete_marker, Some(true));
        assert_eq!(output.version_id.as_deref(), Some(marker.as_str()));

        // With the marker gone, the original version is current again.
        assert_eq!(version_ids(&mock, &bucket, "doc.txt"), vec![v1.clone()]);
        let bucket_ref = mock.state().get_bucket(&bucket).expect("bucket");
        let guard = bucket_ref.objects().read();
        assert_eq!(guard.get("doc.txt").map(|o| o.version_id.clone()), Some(v1));
    }

    #[test]
    fn test_should_serialize_concurrent_deletes_on_one_bucket() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "race");
        enable_versioning(&mock, &bucket);
        let v0 = seed_version(&mock, &bucket, "contested.txt");

        let mut handles = Vec::new();
        for _ in 0..8 {
            let mock = mock.clone();
            let bucket = bucket.clone();
            handles.push(thread::spawn(move || {
                mock.handle_delete_object(delete_input(&bucket, "contested.txt", None))
                    .expect("concurrent delete should succeed")
                    .version_id
                    .expect("marker id")
            }));
        }
        let marker_ids: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .collect();

        // Every call appended exactly one marker, none were lost.
        let ids = version_ids(&mock, &bucket, "contested.txt");
        assert_eq!(ids.len(), 9);
        assert_eq!(ids.first(), Some(&v0));
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 9);
        for marker in &marker_ids {
            assert!(ids.contains(marker), "lost marker {marker}");
        }
    }
}

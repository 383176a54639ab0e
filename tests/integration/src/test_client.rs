//! Client request construction and response decoding across the wire seam.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rustfog_core::RustFogConfig;
    use rustfog_storage_http::{IntoStorageResponse, StorageClient, parse_delete_headers};
    use rustfog_storage_model::input::{DeleteObjectInput, DeleteObjectOptions};

    use crate::{create_test_bucket, enable_versioning, seed_version, storage_mock};

    fn local_client(host: &str) -> StorageClient {
        let config = RustFogConfig {
            host: host.to_owned(),
            scheme: "http".to_owned(),
            ..RustFogConfig::default()
        };
        StorageClient::new(config).expect("client should build")
    }

    fn delete_input(bucket: &str, key: &str, version_id: Option<&str>) -> DeleteObjectInput {
        DeleteObjectInput {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            version_id: version_id.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn test_should_round_trip_marker_response_to_client_output() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "wire");
        enable_versioning(&mock, &bucket);
        seed_version(&mock, &bucket, "doc.txt");

        let output = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", None))
            .expect("delete should succeed");
        let resp = output
            .clone()
            .into_storage_response()
            .expect("response should build");
        let decoded = parse_delete_headers(resp.headers()).expect("headers should decode");

        // What the service rendered is exactly what a client reads back.
        assert_eq!(decoded.delete_marker, output.delete_marker);
        assert_eq!(decoded.version_id, output.version_id);
        assert_eq!(decoded.delete_marker, Some(true));
    }

    #[test]
    fn test_should_round_trip_plain_response_to_client_output() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "wire2");
        seed_version(&mock, &bucket, "doc.txt");

        let output = mock
            .handle_delete_object(delete_input(&bucket, "doc.txt", None))
            .expect("delete should succeed");
        let resp = output
            .clone()
            .into_storage_response()
            .expect("response should build");
        let decoded = parse_delete_headers(resp.headers()).expect("headers should decode");

        assert_eq!(decoded.delete_marker, None);
        assert_eq!(decoded.version_id.as_deref(), Some("null"));
        assert_eq!(decoded.version_id, output.version_id);
    }

    #[test]
    fn test_should_target_generated_version_in_request_url() {
        let mock = storage_mock();
        let bucket = create_test_bucket(&mock, "url");
        enable_versioning(&mock, &bucket);
        let v1 = seed_version(&mock, &bucket, "doc.txt");

        let client = local_client("storage.test");
        let request = client
            .build_request(&bucket, "doc.txt", &DeleteObjectOptions::for_version(&v1))
            .expect("request should build");

        // Generated ids are url-safe, so they pass through the query unescaped.
        assert_eq!(request.method(), http::Method::DELETE);
        assert_eq!(
            request.url().as_str(),
            format!("http://{bucket}.storage.test/doc.txt?versionId={v1}")
        );
    }

    #[tokio::test]
    async fn test_should_report_unreachable_endpoint() {
        let config = RustFogConfig {
            host: "endpoint.invalid".to_owned(),
            scheme: "http".to_owned(),
            ..RustFogConfig::default()
        };
        let client = StorageClient::with_timeout(config, Duration::from_secs(2))
            .expect("client should build");

        let result = client
            .delete_object("some-bucket", "doc.txt", &DeleteObjectOptions::default())
            .await;
        assert!(result.is_err(), "a reserved .invalid host must not resolve");
    }
}

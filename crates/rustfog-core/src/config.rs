//! Configuration for RustFog storage connections.
//!
//! All configuration is driven by environment variables, with defaults
//! pointing at the public S3 endpoint.

use tracing::debug;

/// Connection configuration shared by the storage client and the in-memory
/// service emulation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RustFogConfig {
    /// Storage endpoint host (e.g. `"s3.amazonaws.com"`).
    pub host: String,
    /// Explicit endpoint port, if different from the scheme default.
    pub port: Option<u16>,
    /// URL scheme, `"https"` or `"http"`.
    pub scheme: String,
    /// Default region for buckets created without an explicit one.
    pub default_region: String,
    /// Log level filter string (e.g. `"info"`, `"debug"`).
    pub log_level: String,
}

impl Default for RustFogConfig {
    fn default() -> Self {
        Self {
            host: "s3.amazonaws.com".to_owned(),
            port: None,
            scheme: "https".to_owned(),
            default_region: "us-east-1".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl RustFogConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `STORAGE_HOST`, `STORAGE_PORT`, `STORAGE_SCHEME`,
    /// `DEFAULT_REGION`, and `LOG_LEVEL`, falling back to defaults for any
    /// that are unset. An unparseable `STORAGE_PORT` is ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("STORAGE_HOST") {
            config.host = v;
        }
        if let Ok(v) = std::env::var("STORAGE_PORT") {
            if let Ok(n) = v.parse::<u16>() {
                config.port = Some(n);
            }
        }
        if let Ok(v) = std::env::var("STORAGE_SCHEME") {
            config.scheme = v;
        }
        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.default_region = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        debug!(host = %config.host, scheme = %config.scheme, "configuration loaded");
        config
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::media::application::ports::outgoing::{FileStorage, FileStorageError, StoredObject};
use crate::shared::config::{required, ConfigError};

#[derive(Clone)]
pub struct SupabaseStorageConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub url: String,
    pub service_role_key: String,
}

impl SupabaseStorageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: required("SUPABASE_URL")?.trim_end_matches('/').to_string(),
            service_role_key: required("SUPABASE_SERVICE_ROLE_KEY")?,
        })
    }
}

impl std::fmt::Debug for SupabaseStorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStorageConfig")
            .field("url", &self.url)
            .field("service_role_key", &"<secret>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct StorageErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Supabase Storage over its REST API.
#[derive(Clone)]
pub struct SupabaseStorage {
    http: Client,
    config: SupabaseStorageConfig,
}

impl SupabaseStorage {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(config: SupabaseStorageConfig) -> Result<Self, FileStorageError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FileStorageError::Unavailable(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn object_url(&self, bucket: &str, name: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.config.url, bucket, name)
    }
}

fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<StorageErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| format!("HTTP {status}: {body}"))
}

#[async_trait]
impl FileStorage for SupabaseStorage {
    async fn put(&self, object: StoredObject) -> Result<(), FileStorageError> {
        let url = self.object_url(&object.bucket, &object.name);

        tracing::debug!(url = %url, size = object.bytes.len(), "Uploading object to Supabase");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.service_role_key)
            .header("apikey", &self.config.service_role_key)
            .header("content-type", &object.content_type)
            .header("cache-control", format!("max-age={}", object.cache_control_secs))
            .header("x-upsert", "false")
            .body(object.bytes)
            .send()
            .await
            .map_err(|e| FileStorageError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(FileStorageError::Rejected(rejection_message(status, &body)))
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url, bucket, name
        )
    }
}

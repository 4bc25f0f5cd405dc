use std::time::Duration;

use labdesk_core::{AppVersion, UPDATE_REQUEST_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

use crate::error::UpdateError;

/// Release manifest published alongside each build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    pub version: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub pub_date: Option<String>,
}

/// Client for the release manifest endpoint.
#[derive(Debug, Clone)]
pub struct UpdateClient {
    client: reqwest::Client,
    manifest_url: String,
}

impl UpdateClient {
    /// Creates a client for the manifest at `manifest_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(manifest_url: &str) -> Result<Self, UpdateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPDATE_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(UpdateError::ClientBuild)?;
        Ok(Self { client, manifest_url: manifest_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    /// Fetch the manifest.
    ///
    /// # Errors
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body is not a manifest.
    pub async fn fetch_manifest(&self) -> Result<UpdateInfo, UpdateError> {
        let response = self.client.get(&self.manifest_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::ManifestStatus {
                url: self.manifest_url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| UpdateError::MalformedManifest {
            url: self.manifest_url.clone(),
            source,
        })
    }

    /// Returns the manifest if it announces a version newer than `current_version`.
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be fetched or either version
    /// string does not parse.
    pub async fn check(&self, current_version: &str) -> Result<Option<UpdateInfo>, UpdateError> {
        let current: AppVersion = current_version.parse()?;
        let info = self.fetch_manifest().await?;
        let latest: AppVersion = info.version.parse()?;
        tracing::debug!(%current, %latest, "update manifest fetched");
        Ok(latest.is_newer_than(&current).then_some(info))
    }
}

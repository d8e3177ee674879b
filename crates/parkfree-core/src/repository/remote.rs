//! Remote Source
//!
//! Talks to a PostgREST-style `locations` table (Supabase REST API).
//! The backend assigns ids; its returned row is the authoritative record.

use async_trait::async_trait;

use crate::domain::{BackendError, FetchError, Location, NewLocation};
use super::traits::{LocationSource, RemoteBackend};

/// Connection settings for the remote backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    /// Service endpoint, e.g. `https://abc.supabase.co`
    pub url: String,
    /// Public access key, sent as `apikey` and bearer token
    pub key: String,
}

/// `LocationSource` over any `RemoteBackend`
pub struct RemoteSource<B: RemoteBackend> {
    backend: B,
}

impl<B: RemoteBackend> RemoteSource<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

#[async_trait(?Send)]
impl<B: RemoteBackend> LocationSource for RemoteSource<B> {
    fn kind(&self) -> &'static str {
        "remote"
    }

    async fn load(&self) -> Result<Vec<Location>, FetchError> {
        let records = self.backend.select_ordered_by_name().await?;
        tracing::debug!(count = records.len(), "fetched remote locations");
        Ok(records)
    }

    async fn append(&self, candidate: NewLocation) -> Result<Location, BackendError> {
        let rows = self.backend.insert(&candidate).await?;
        if rows.len() > 1 {
            tracing::warn!(rows = rows.len(), "insert returned several rows, using the first");
        }
        rows.into_iter().next().ok_or(BackendError::EmptyResponse)
    }
}

// ========================
// REST backend
// ========================

const TABLE_PATH: &str = "rest/v1/locations";

/// `RemoteBackend` over HTTP with reqwest
pub struct RestBackend {
    client: reqwest::Client,
    settings: RemoteSettings,
}

impl RestBackend {
    pub fn new(settings: RemoteSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.settings.url.trim_end_matches('/'), TABLE_PATH)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", self.settings.key.as_str())
            .header("Authorization", format!("Bearer {}", self.settings.key))
    }
}

#[async_trait(?Send)]
impl RemoteBackend for RestBackend {
    async fn select_ordered_by_name(&self) -> Result<Vec<Location>, FetchError> {
        let url = format!("{}?select=*&order=name.asc", self.table_url());
        let response = self
            .authorized(self.client.get(url))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), body });
        }
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn insert(&self, candidate: &NewLocation) -> Result<Vec<Location>, BackendError> {
        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(candidate)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| BackendError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16(), body });
        }
        serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

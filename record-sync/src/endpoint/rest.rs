//! REST Endpoint
//!
//! `RecordEndpoint` over HTTP + JSON:
//! - `GET    /data?page=..&pageSize=..&search=..&searchColumn=..&sortField=..&sortOrder=..`
//! - `POST   /data`
//! - `PUT    /data/{id}`
//! - `DELETE /data/{id}`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use crate::config::SyncConfig;
use crate::domain::{RecordDraft, RecordId, SyncError, SyncResult, ViewState};
use super::query::{list_query_pairs, ListPage};
use super::traits::RecordEndpoint;

/// HTTP client for the record collection. Cheap to clone.
#[derive(Clone, Debug)]
pub struct RestEndpoint {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl RestEndpoint {
    /// Endpoint rooted at `base_url` (e.g. `http://localhost:3001`)
    pub fn new(base_url: &str) -> SyncResult<Self> {
        let parsed = url::Url::parse(base_url)
            .map_err(|e| SyncError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(SyncError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
            timeout: None,
        })
    }

    pub fn from_config(config: &SyncConfig) -> SyncResult<Self> {
        let endpoint = Self::new(&config.base_url)?;
        Ok(endpoint.with_timeout(config.timeout()))
    }

    /// Per-request timeout; ignored in the browser where fetch has none
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/data", self.base_url)
    }

    fn record_url(&self, id: RecordId) -> String {
        format!("{}/data/{}", self.base_url, id)
    }

    async fn send(&self, request: RequestBuilder) -> SyncResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[REST] {} {}", status.as_u16(), body);
            Err(SyncError::status(status.as_u16(), body))
        }
    }
}

#[async_trait(?Send)]
impl RecordEndpoint for RestEndpoint {
    async fn list(&self, view: &ViewState) -> SyncResult<ListPage> {
        let request = self
            .http_client
            .get(self.collection_url())
            .query(&list_query_pairs(view));
        let response = self.send(request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SyncError::Decode(e.to_string()))
    }

    async fn create(&self, draft: &RecordDraft) -> SyncResult<()> {
        let request = self.http_client.post(self.collection_url()).json(draft);
        self.send(request).await?;
        Ok(())
    }

    async fn update(&self, id: RecordId, draft: &RecordDraft) -> SyncResult<()> {
        let request = self.http_client.put(self.record_url(id)).json(draft);
        self.send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> SyncResult<()> {
        let request = self.http_client.delete(self.record_url(id));
        self.send(request).await?;
        Ok(())
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SyncError::Decode(e.to_string())
        } else {
            SyncError::Transport(e.to_string())
        }
    }
}

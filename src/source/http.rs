//! HTTP snapshot source

use async_trait::async_trait;
use reqwest::Client;

use super::{RawResponse, SnapshotSource};
use crate::load::FetchFailure;

/// Reads the snapshot with a plain GET: no parameters, headers or auth
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Use an existing client
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait(?Send)]
impl SnapshotSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn read(&self) -> Result<RawResponse, FetchFailure> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchFailure::network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::network(e.to_string()))?;

        tracing::debug!(url = %self.url, status, bytes = body.len(), "Fetched snapshot");
        Ok(RawResponse { status, body })
    }
}

//! Browser Snapshot Source
//!
//! Reads the snapshot with `fetch`. The request can be tied to an
//! `AbortSignal` so that unmounting the dashboard aborts it.

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::AbortSignal;

use careercraft_bi::{FetchFailure, RawResponse, SnapshotSource, SNAPSHOT_PATH};

/// `fetch`-backed snapshot source
pub struct BrowserSource {
    url: String,
    signal: Option<AbortSignal>,
}

impl BrowserSource {
    /// Source for the fixed snapshot path, relative to the serving root
    pub fn snapshot() -> Self {
        Self { url: SNAPSHOT_PATH.to_string(), signal: None }
    }

    /// Abort the request when `signal` fires
    pub fn abort_on(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }
}

#[async_trait(?Send)]
impl SnapshotSource for BrowserSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn read(&self) -> Result<RawResponse, FetchFailure> {
        let response = Request::get(&self.url)
            .abort_signal(self.signal.as_ref())
            .send()
            .await
            .map_err(|e| FetchFailure::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

//! File-backed snapshot source

use async_trait::async_trait;
use std::path::PathBuf;

use super::{RawResponse, SnapshotSource};
use crate::load::FetchFailure;

/// Reads the snapshot from a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.to_string_lossy().to_string();
        Self { path, location }
    }
}

#[async_trait(?Send)]
impl SnapshotSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn read(&self) -> Result<RawResponse, FetchFailure> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FetchFailure::network(format!("Failed to read {}: {}", self.location, e))
        })?;

        tracing::debug!(path = %self.location, bytes = body.len(), "Read snapshot file");
        Ok(RawResponse::ok(body))
    }
}

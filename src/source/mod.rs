//! Snapshot Sources
//!
//! Where the snapshot document comes from. The browser reads it over `fetch`,
//! the command-line tool from a file or an HTTP URL. Every source returns the
//! raw response; decoding and validation happen in [`crate::load`].

#[cfg(feature = "native")]
mod file;
#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use file::FileSource;
#[cfg(feature = "native")]
pub use http::HttpSource;

use async_trait::async_trait;

use crate::load::FetchFailure;

/// Fixed resource path of the snapshot, relative to the serving root
pub const SNAPSHOT_PATH: &str = "/data/dashboard_data.json";

/// Status and body of one read
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// A 200 response carrying `body`
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A place the snapshot document can be read from
///
/// Futures are not required to be `Send`; browser requests live on the single
/// UI thread.
#[async_trait(?Send)]
pub trait SnapshotSource {
    /// Human-readable location, used in logs
    fn location(&self) -> &str;

    /// Perform exactly one read
    async fn read(&self) -> Result<RawResponse, FetchFailure>;
}

/// Pick a source for a file path or an http(s) URL
#[cfg(feature = "native")]
pub fn source_for(location: &str) -> Box<dyn SnapshotSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

//! Dashboard Loading
//!
//! The one operation of the dashboard view: read the snapshot once, decode
//! it, validate it, and settle the view state.
//!
//! ```text
//!            read ok + valid
//! Loading ─────────────────────▶ Ready
//!    │
//!    │ non-2xx / transport / parse / invalid
//!    ▼
//!  Error
//! ```
//!
//! There are no retries and no timeout. A read that resolves after its view
//! was discarded is dropped without producing a state.

mod error;
mod lifetime;
mod state;

pub use error::FetchFailure;
pub use lifetime::ViewLifetime;
pub use state::{LoadState, Loaded};

use crate::snapshot::{self, DashboardSnapshot, DEFAULT_RATE_TOLERANCE};
use crate::source::{RawResponse, SnapshotSource};

/// Turns one raw response into a settled dashboard state
#[derive(Debug, Clone)]
pub struct DashboardLoader {
    rate_tolerance: f64,
}

impl Default for DashboardLoader {
    fn default() -> Self {
        Self { rate_tolerance: DEFAULT_RATE_TOLERANCE }
    }
}

impl DashboardLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allowed difference, in percentage points, before a rate is reported
    pub fn rate_tolerance(mut self, tolerance: f64) -> Self {
        self.rate_tolerance = tolerance;
        self
    }

    /// Check status, parse and validate a response
    pub fn decode(&self, response: RawResponse) -> Result<Loaded, FetchFailure> {
        if !response.is_success() {
            return Err(FetchFailure::Status(response.status));
        }

        let snapshot = DashboardSnapshot::from_json(&response.body)?;
        snapshot::validate(&snapshot)?;

        let warnings = snapshot::cross_check(&snapshot.stats, self.rate_tolerance);
        Ok(Loaded { snapshot, warnings })
    }

    /// Read the snapshot once and settle a fresh `Loading` state
    ///
    /// Returns `None` when `lifetime` is cancelled, either before the read
    /// starts or while it is in flight.
    pub async fn load(
        &self,
        source: &dyn SnapshotSource,
        lifetime: &ViewLifetime,
    ) -> Option<LoadState> {
        if lifetime.is_cancelled() {
            return None;
        }

        let outcome = match source.read().await {
            Ok(response) => self.decode(response),
            Err(failure) => Err(failure),
        };

        if lifetime.is_cancelled() {
            tracing::debug!(location = source.location(), "View discarded, dropping snapshot result");
            return None;
        }

        match &outcome {
            Ok(loaded) => {
                for warning in &loaded.warnings {
                    tracing::warn!(location = source.location(), "Snapshot rate mismatch: {}", warning);
                }
                tracing::info!(location = source.location(), "Dashboard data loaded");
            }
            Err(failure) => {
                tracing::error!(
                    location = source.location(),
                    error = %failure,
                    "Error fetching dashboard data"
                );
            }
        }

        Some(LoadState::Loading.settle(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::{sample_snapshot, SAMPLE_JSON};
    use crate::snapshot::{RateMismatch, SnapshotError};
    use async_trait::async_trait;
    use std::cell::Cell;

    /// Serves a canned response and counts reads
    struct StubSource {
        response: Result<RawResponse, FetchFailure>,
        reads: Cell<usize>,
        cancel_during_read: Option<ViewLifetime>,
    }

    impl StubSource {
        fn new(response: Result<RawResponse, FetchFailure>) -> Self {
            Self { response, reads: Cell::new(0), cancel_during_read: None }
        }
    }

    #[async_trait(?Send)]
    impl SnapshotSource for StubSource {
        fn location(&self) -> &str {
            "stub"
        }

        async fn read(&self) -> Result<RawResponse, FetchFailure> {
            self.reads.set(self.reads.get() + 1);
            if let Some(lifetime) = &self.cancel_during_read {
                lifetime.cancel();
            }
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_load_ready() {
        let source = StubSource::new(Ok(RawResponse::ok(SAMPLE_JSON)));
        let state = DashboardLoader::new()
            .load(&source, &ViewLifetime::new())
            .await
            .unwrap();

        assert_eq!(state.snapshot(), Some(&sample_snapshot()));
        assert_eq!(source.reads.get(), 1);
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let source = StubSource::new(Ok(RawResponse { status: 500, body: SAMPLE_JSON.into() }));
        let state = DashboardLoader::new()
            .load(&source, &ViewLifetime::new())
            .await
            .unwrap();

        assert_eq!(state.failure(), Some(&FetchFailure::Status(500)));
        assert_eq!(source.reads.get(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let source = StubSource::new(Err(FetchFailure::network("connection reset")));
        let state = DashboardLoader::new()
            .load(&source, &ViewLifetime::new())
            .await
            .unwrap();

        assert_eq!(state.failure().map(|f| f.to_string()), Some("connection reset".into()));
        assert_eq!(source.reads.get(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_fails_closed() {
        let source = StubSource::new(Ok(RawResponse::ok("<html>not json</html>")));
        let state = DashboardLoader::new()
            .load(&source, &ViewLifetime::new())
            .await
            .unwrap();

        assert!(matches!(state.failure(), Some(FetchFailure::Decode(_))));
    }

    #[tokio::test]
    async fn test_invalid_values_fail_closed() {
        let body = SAMPLE_JSON.replace("\"conversion_rate\": 25", "\"conversion_rate\": 125");
        let source = StubSource::new(Ok(RawResponse::ok(body)));
        let state = DashboardLoader::new()
            .load(&source, &ViewLifetime::new())
            .await
            .unwrap();

        assert!(matches!(
            state.failure(),
            Some(FetchFailure::Invalid(SnapshotError::PercentageOutOfRange { .. }))
        ));
    }

    #[tokio::test]
    async fn test_cancelled_before_start_does_not_fetch() {
        let source = StubSource::new(Ok(RawResponse::ok(SAMPLE_JSON)));
        let lifetime = ViewLifetime::new();
        lifetime.cancel();

        assert!(DashboardLoader::new().load(&source, &lifetime).await.is_none());
        assert_eq!(source.reads.get(), 0);
    }

    #[tokio::test]
    async fn test_result_after_cancel_is_discarded() {
        let lifetime = ViewLifetime::new();
        let mut source = StubSource::new(Ok(RawResponse::ok(SAMPLE_JSON)));
        source.cancel_during_read = Some(lifetime.clone());

        assert!(DashboardLoader::new().load(&source, &lifetime).await.is_none());
        assert_eq!(source.reads.get(), 1);
    }

    #[test]
    fn test_decode_reports_rate_warnings() {
        let body = SAMPLE_JSON.replace("\"unanswered_rate\": 12.5", "\"unanswered_rate\": 20");
        let loaded = DashboardLoader::new().decode(RawResponse::ok(body)).unwrap();

        assert_eq!(loaded.snapshot.stats.unanswered_rate, 20.0);
        assert_eq!(
            loaded.warnings,
            vec![RateMismatch::Rate {
                field: "stats.unanswered_rate",
                reported: 20.0,
                recomputed: 12.5,
            }]
        );
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let body = SAMPLE_JSON.replace("\"unanswered_rate\": 12.5", "\"unanswered_rate\": 13");
        let strict = DashboardLoader::new().rate_tolerance(0.1);
        let lenient = DashboardLoader::new().rate_tolerance(1.0);

        assert_eq!(strict.decode(RawResponse::ok(body.clone())).unwrap().warnings.len(), 1);
        assert!(lenient.decode(RawResponse::ok(body)).unwrap().warnings.is_empty());
    }
}

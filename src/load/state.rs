//! Dashboard load state machine

use serde::Serialize;

use super::error::FetchFailure;
use crate::snapshot::{DashboardSnapshot, RateMismatch};

/// A snapshot accepted at the boundary, with its cross-check warnings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loaded {
    pub snapshot: DashboardSnapshot,
    pub warnings: Vec<RateMismatch>,
}

/// State of one mounted dashboard view
///
/// Starts in `Loading` and settles exactly once. A settled state never
/// changes again; the view must be remounted to load anew.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Error(FetchFailure),
    Ready(Box<Loaded>),
}

impl LoadState {
    /// Apply the outcome of the load. Only `Loading` accepts it.
    pub fn settle(self, outcome: Result<Loaded, FetchFailure>) -> LoadState {
        match self {
            LoadState::Loading => match outcome {
                Ok(loaded) => LoadState::Ready(Box::new(loaded)),
                Err(failure) => LoadState::Error(failure),
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The snapshot, once ready
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            LoadState::Ready(loaded) => Some(&loaded.snapshot),
            _ => None,
        }
    }

    /// The failure, once errored
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            LoadState::Error(failure) => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::sample_snapshot;

    fn loaded() -> Loaded {
        Loaded { snapshot: sample_snapshot(), warnings: Vec::new() }
    }

    #[test]
    fn test_initial_state_is_loading() {
        assert!(LoadState::default().is_loading());
    }

    #[test]
    fn test_loading_to_ready() {
        let state = LoadState::Loading.settle(Ok(loaded()));
        assert_eq!(state.snapshot(), Some(&sample_snapshot()));
        assert!(state.failure().is_none());
    }

    #[test]
    fn test_loading_to_error() {
        let state = LoadState::Loading.settle(Err(FetchFailure::Status(404)));
        assert_eq!(state.failure(), Some(&FetchFailure::Status(404)));
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_settled_states_are_final() {
        let errored = LoadState::Loading.settle(Err(FetchFailure::Unknown));
        let still_errored = errored.clone().settle(Ok(loaded()));
        assert_eq!(still_errored, errored);

        let ready = LoadState::Loading.settle(Ok(loaded()));
        let still_ready = ready.clone().settle(Err(FetchFailure::Status(500)));
        assert_eq!(still_ready, ready);
    }
}

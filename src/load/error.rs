//! Fetch failure
//!
//! The single user-facing error of the dashboard. Its `Display` text is shown
//! verbatim in the error view.

use thiserror::Error;

use crate::snapshot::SnapshotError;

/// Any condition preventing a successful, parseable, valid 2xx response
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
    /// Server answered with a non-success status code
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// Transport failed before a response arrived
    #[error("{0}")]
    Network(String),

    /// Body is not a snapshot document
    #[error("{0}")]
    Decode(String),

    /// Document parsed but broke a snapshot invariant
    #[error("Invalid dashboard data: {0}")]
    Invalid(#[from] SnapshotError),

    /// Failure without a usable message
    #[error("Unknown error occurred")]
    Unknown,
}

impl FetchFailure {
    /// Wrap a transport message, falling back to [`FetchFailure::Unknown`] when blank
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            FetchFailure::Unknown
        } else {
            FetchFailure::Network(message)
        }
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        FetchFailure::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FetchFailure::Status(500).to_string(), "HTTP error! Status: 500");
        assert_eq!(FetchFailure::Unknown.to_string(), "Unknown error occurred");
        assert_eq!(
            FetchFailure::network("connection refused").to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_blank_message_is_unknown() {
        assert_eq!(FetchFailure::network("  "), FetchFailure::Unknown);
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let failure: FetchFailure = err.into();
        assert!(matches!(failure, FetchFailure::Decode(_)));
    }
}

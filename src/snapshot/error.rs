//! Snapshot validation errors

use thiserror::Error;

/// Reasons a parsed snapshot is rejected at the boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// Float field is NaN or infinite
    #[error("{field} is not a finite number")]
    NotFinite { field: String },

    /// Field holds a negative value
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: f64 },

    /// Percentage field is above 100
    #[error("{field} must be a percentage between 0 and 100 (got {value})")]
    PercentageOutOfRange { field: String, value: f64 },

    /// Series entry without a category name
    #[error("{series}[{index}] has an empty name")]
    EmptyName { series: &'static str, index: usize },
}

/// Result type alias for snapshot validation
pub type SnapshotResult<T> = Result<T, SnapshotError>;

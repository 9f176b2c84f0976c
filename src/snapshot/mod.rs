//! Dashboard Snapshot
//!
//! The data model behind the dashboard, its boundary validation, and the
//! cross-check of the precomputed percentages.
//!
//! A snapshot is parsed from a single JSON document. Parsing fails on missing
//! fields or negative counts; [`validate`] then rejects values that parse but
//! break the snapshot's invariants. Both failures are reported to the view as
//! a [`crate::load::FetchFailure`].

mod consistency;
mod error;
mod types;
mod validate;

pub use consistency::{cross_check, RateMismatch, DEFAULT_RATE_TOLERANCE};
pub use error::{SnapshotError, SnapshotResult};
pub use types::{
    find_by_name, value_or, AttachmentSlice, ConversionPoint, DashboardSnapshot,
    EffectivenessEntry, Named, PainPoint, Stats, STORY_CONTENT_TYPE,
};
pub use validate::validate;

#[cfg(test)]
pub(crate) use types::fixtures;

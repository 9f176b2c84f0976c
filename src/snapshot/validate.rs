//! Boundary validation
//!
//! Parsing guarantees the shape; this pass rejects values that parse but
//! cannot be rendered meaningfully.

use super::error::{SnapshotError, SnapshotResult};
use super::types::{DashboardSnapshot, Named};

const MAX_PERCENTAGE: f64 = 100.0;

/// Check every invariant of a parsed snapshot, stopping at the first violation
pub fn validate(snapshot: &DashboardSnapshot) -> SnapshotResult<()> {
    let stats = &snapshot.stats;

    non_negative("stats.avg_response_time", stats.avg_response_time)?;
    percentage("stats.conversion_rate", stats.conversion_rate)?;
    percentage("stats.unanswered_rate", stats.unanswered_rate)?;

    names("conversion_data", &snapshot.conversion_data)?;
    names("attachment_data", &snapshot.attachment_data)?;
    names("effectiveness_data", &snapshot.effectiveness_data)?;
    names("pain_points_data", &snapshot.pain_points_data)?;

    for (index, entry) in snapshot.effectiveness_data.iter().enumerate() {
        percentage(&format!("effectiveness_data[{}].rate", index), entry.rate)?;
    }

    Ok(())
}

fn non_negative(field: &str, value: f64) -> SnapshotResult<()> {
    if !value.is_finite() {
        return Err(SnapshotError::NotFinite { field: field.to_string() });
    }
    if value < 0.0 {
        return Err(SnapshotError::Negative { field: field.to_string(), value });
    }
    Ok(())
}

fn percentage(field: &str, value: f64) -> SnapshotResult<()> {
    non_negative(field, value)?;
    if value > MAX_PERCENTAGE {
        return Err(SnapshotError::PercentageOutOfRange { field: field.to_string(), value });
    }
    Ok(())
}

fn names<T: Named>(series: &'static str, items: &[T]) -> SnapshotResult<()> {
    match items.iter().position(|item| item.name().trim().is_empty()) {
        Some(index) => Err(SnapshotError::EmptyName { series, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::types::fixtures::sample_snapshot;
    use crate::snapshot::types::{AttachmentSlice, EffectivenessEntry};

    #[test]
    fn test_sample_is_valid() {
        assert_eq!(validate(&sample_snapshot()), Ok(()));
    }

    #[test]
    fn test_empty_series_are_valid() {
        let mut snapshot = sample_snapshot();
        snapshot.conversion_data.clear();
        snapshot.attachment_data.clear();
        snapshot.effectiveness_data.clear();
        snapshot.pain_points_data.clear();
        assert!(validate(&snapshot).is_ok());
    }

    #[test]
    fn test_rejects_negative_response_time() {
        let mut snapshot = sample_snapshot();
        snapshot.stats.avg_response_time = -2.0;
        assert!(matches!(
            validate(&snapshot),
            Err(SnapshotError::Negative { ref field, .. }) if field == "stats.avg_response_time"
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let mut snapshot = sample_snapshot();
        snapshot.stats.unanswered_rate = f64::NAN;
        assert!(matches!(validate(&snapshot), Err(SnapshotError::NotFinite { .. })));
    }

    #[test]
    fn test_rejects_percentage_above_hundred() {
        let mut snapshot = sample_snapshot();
        snapshot.stats.conversion_rate = 250.0;
        assert!(matches!(
            validate(&snapshot),
            Err(SnapshotError::PercentageOutOfRange { .. })
        ));

        let mut snapshot = sample_snapshot();
        snapshot.effectiveness_data.push(EffectivenessEntry { name: "reels".into(), rate: 101.0 });
        assert_eq!(
            validate(&snapshot),
            Err(SnapshotError::PercentageOutOfRange {
                field: "effectiveness_data[1].rate".into(),
                value: 101.0,
            })
        );
    }

    #[test]
    fn test_boundary_percentages_are_valid() {
        let mut snapshot = sample_snapshot();
        snapshot.stats.conversion_rate = 100.0;
        snapshot.stats.unanswered_rate = 0.0;
        assert!(validate(&snapshot).is_ok());
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut snapshot = sample_snapshot();
        snapshot.attachment_data.push(AttachmentSlice { name: "  ".into(), value: 3 });
        assert_eq!(
            validate(&snapshot),
            Err(SnapshotError::EmptyName { series: "attachment_data", index: 2 })
        );
    }
}

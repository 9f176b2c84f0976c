//! Rate cross-check
//!
//! The percentages in `stats` are displayed as received. This pass recomputes
//! them from the raw counts and reports disagreements as warnings.

use serde::Serialize;
use std::fmt;

use super::types::Stats;

/// Default allowed difference, in percentage points
pub const DEFAULT_RATE_TOLERANCE: f64 = 0.5;

/// A precomputed value that disagrees with the raw counts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateMismatch {
    /// Reported percentage differs from the recomputed one
    Rate {
        field: &'static str,
        reported: f64,
        recomputed: f64,
    },
    /// A count is larger than the number of conversations
    CountExceedsTotal {
        field: &'static str,
        count: u64,
        total: u64,
    },
}

impl fmt::Display for RateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateMismatch::Rate { field, reported, recomputed } => write!(
                f,
                "{} is {} but the counts give {:.2}",
                field, reported, recomputed
            ),
            RateMismatch::CountExceedsTotal { field, count, total } => write!(
                f,
                "{} ({}) exceeds stats.total_conversations ({})",
                field, count, total
            ),
        }
    }
}

/// Recompute the percentage fields and compare them with what was reported
pub fn cross_check(stats: &Stats, tolerance: f64) -> Vec<RateMismatch> {
    let mut mismatches = Vec::new();
    let total = stats.total_conversations;

    for (field, count) in [
        ("stats.total_conversions", stats.total_conversions),
        ("stats.unanswered_count", stats.unanswered_count),
    ] {
        if count > total {
            mismatches.push(RateMismatch::CountExceedsTotal { field, count, total });
        }
    }

    if total == 0 {
        return mismatches;
    }

    for (field, reported, count) in [
        ("stats.conversion_rate", stats.conversion_rate, stats.total_conversions),
        ("stats.unanswered_rate", stats.unanswered_rate, stats.unanswered_count),
    ] {
        let recomputed = count as f64 / total as f64 * 100.0;
        if (reported - recomputed).abs() > tolerance {
            mismatches.push(RateMismatch::Rate { field, reported, recomputed });
        }
    }

    mismatches
}

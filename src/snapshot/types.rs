//! Snapshot data types
//!
//! The dashboard's backing data as produced by the upstream generator.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Name of the content type whose rate drives the stories recommendation
pub const STORY_CONTENT_TYPE: &str = "story";

/// One fetched, immutable copy of the dashboard's backing data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: Stats,
    pub conversion_data: Vec<ConversionPoint>,
    pub attachment_data: Vec<AttachmentSlice>,
    pub effectiveness_data: Vec<EffectivenessEntry>,
    pub pain_points_data: Vec<PainPoint>,
}

/// Headline statistics, all precomputed upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(deserialize_with = "whole_count")]
    pub total_conversations: u64,
    #[serde(deserialize_with = "whole_count")]
    pub total_conversions: u64,
    /// Hours
    pub avg_response_time: f64,
    #[serde(deserialize_with = "whole_count")]
    pub unanswered_count: u64,
    /// Percentage, 0-100
    pub conversion_rate: f64,
    /// Percentage, 0-100
    pub unanswered_rate: f64,
}

/// Interactions and conversions for one time bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionPoint {
    pub name: String,
    #[serde(deserialize_with = "whole_count")]
    pub interactions: u64,
    #[serde(deserialize_with = "whole_count")]
    pub conversions: u64,
}

/// Attachment count for one attachment category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentSlice {
    pub name: String,
    #[serde(deserialize_with = "whole_count")]
    pub value: u64,
}

/// Conversion percentage for one content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessEntry {
    pub name: String,
    pub rate: f64,
}

/// Observed frequency of one customer concern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainPoint {
    pub name: String,
    #[serde(deserialize_with = "whole_count")]
    pub count: u64,
}

/// Accept a count written as an integer or as an integral float (`30.0`)
fn whole_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(de::Error::custom(format!("expected a non-negative whole count, got {}", value)))
    }
}

/// Series entries addressable by their category name
pub trait Named {
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),+ $(,)?) => {
        $(impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        })+
    };
}

impl_named!(ConversionPoint, AttachmentSlice, EffectivenessEntry, PainPoint);

/// Find the first entry whose name equals `key`
pub fn find_by_name<'a, T: Named>(items: &'a [T], key: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == key)
}

/// Project the entry named `key`, or return `default` when it is absent
pub fn value_or<T: Named, V>(items: &[T], key: &str, default: V, project: impl FnOnce(&T) -> V) -> V {
    find_by_name(items, key).map(project).unwrap_or(default)
}

impl DashboardSnapshot {
    /// Parse a snapshot from its JSON document
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Conversion rate for a content type, `0` when the type is not listed
    pub fn effectiveness_rate(&self, content_type: &str) -> f64 {
        value_or(&self.effectiveness_data, content_type, 0.0, |entry| entry.rate)
    }

    /// Conversion rate of stories
    pub fn story_rate(&self) -> f64 {
        self.effectiveness_rate(STORY_CONTENT_TYPE)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_parse_sample_document() {
        let snapshot = DashboardSnapshot::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(snapshot, sample_snapshot());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = r#"{"stats": {"total_conversations": 1}, "conversion_data": []}"#;
        assert!(DashboardSnapshot::from_json(body).is_err());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let body = SAMPLE_JSON.replace("\"unanswered_count\": 15", "\"unanswered_count\": -1");
        assert!(DashboardSnapshot::from_json(&body).is_err());
    }

    #[test]
    fn test_integral_float_counts_are_accepted() {
        let body = SAMPLE_JSON
            .replace("\"total_conversions\": 30", "\"total_conversions\": 30.0")
            .replace("\"interactions\": 40", "\"interactions\": 40.0")
            .replace("\"value\": 30", "\"value\": 30.0")
            .replace("\"count\": 25", "\"count\": 25.0");
        assert_eq!(DashboardSnapshot::from_json(&body).unwrap(), sample_snapshot());
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let body = SAMPLE_JSON.replace("\"count\": 25", "\"count\": 25.5");
        let err = DashboardSnapshot::from_json(&body).unwrap_err();
        assert!(err.to_string().contains("whole count"));
    }

    #[test]
    fn test_story_rate_lookup() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.story_rate(), 42.0);
        assert_eq!(snapshot.effectiveness_rate("reels"), 0.0);
    }

    #[test]
    fn test_story_rate_defaults_to_zero() {
        let mut snapshot = sample_snapshot();
        snapshot.effectiveness_data = vec![EffectivenessEntry { name: "post".into(), rate: 9.0 }];
        assert_eq!(snapshot.story_rate(), 0.0);
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let items = vec![
            PainPoint { name: "visto".into(), count: 1 },
            PainPoint { name: "visto".into(), count: 2 },
        ];
        assert_eq!(find_by_name(&items, "visto").map(|p| p.count), Some(1));
        assert_eq!(value_or(&items, "preço", 7, |p| p.count), 7);
    }
}

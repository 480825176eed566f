use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One category's judgment from the collaborator. Schema-version-specific
/// keys (calculations, usp_highlights, ...) ride along in the flattened map
/// so they survive re-serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryScore {
    pub score: f64,
    pub reasoning: String,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Processing metadata attached to every finished analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub processing_time_seconds: f64,
    pub llm_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apify_dataset_id: Option<String>,
}

/// The validated unit handed to report-rendering and persistence
/// collaborators. Schema-version-specific top-level keys (action_plan,
/// scale_up_potential, ...) ride along in the flattened map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub house_id: String,
    pub analyzed_at: DateTime<Utc>,
    pub rules_version: String,
    pub overall_score: f64,
    pub category_scores: BTreeMap<String, CategoryScore>,
    pub overall_assessment: String,
    pub top_strengths: Vec<String>,
    pub top_concerns: Vec<String>,
    pub investment_recommendation: String,
    pub metadata: AnalysisMetadata,
    #[serde(default, flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> AnalysisResult {
        let mut category_scores = BTreeMap::new();
        category_scores.insert(
            "location".to_string(),
            CategoryScore {
                score: 8.5,
                reasoning: "central".to_string(),
                red_flags: vec!["noise".to_string()],
                recommendations: vec!["insulation".to_string()],
                extra: Map::new(),
            },
        );

        AnalysisResult {
            house_id: "43084820".to_string(),
            analyzed_at: Utc.with_ymd_and_hms(2025, 10, 2, 9, 30, 0).unwrap(),
            rules_version: "v2.0.0".to_string(),
            overall_score: 7.42,
            category_scores,
            overall_assessment: "promising".to_string(),
            top_strengths: vec!["location".to_string()],
            top_concerns: vec!["competition".to_string()],
            investment_recommendation: "CONSIDER".to_string(),
            metadata: AnalysisMetadata {
                processing_time_seconds: 1.25,
                llm_model: "mock".to_string(),
                apify_dataset_id: Some("ds-123".to_string()),
            },
            extra: Map::new(),
        }
    }

    #[test]
    fn serialization_round_trip_is_lossless() {
        let original = sample();
        let json = serde_json::to_string(&original).expect("serializes");
        let parsed: AnalysisResult = serde_json::from_str(&json).expect("parses back");
        assert_eq!(parsed, original);
    }

    #[test]
    fn timestamp_serializes_as_utc_iso8601() {
        let json = serde_json::to_value(sample()).expect("serializes");
        let stamp = json["analyzed_at"].as_str().expect("string timestamp");
        assert!(stamp.starts_with("2025-10-02T09:30:00"));
    }

    #[test]
    fn absent_dataset_id_is_omitted_from_the_wire_shape() {
        let mut result = sample();
        result.metadata.apify_dataset_id = None;
        let json = serde_json::to_value(&result).expect("serializes");
        assert!(json["metadata"].get("apify_dataset_id").is_none());
    }

    #[test]
    fn version_specific_category_keys_survive_a_round_trip() {
        let raw = serde_json::json!({
            "score": 6.5,
            "reasoning": "yield",
            "red_flags": [],
            "recommendations": [],
            "calculations": { "cash_on_cash_return": 12.3 }
        });
        let score: CategoryScore = serde_json::from_value(raw.clone()).expect("parses");
        assert_eq!(score.score, 6.5);
        let back = serde_json::to_value(&score).expect("serializes");
        assert_eq!(back.get("calculations"), raw.get("calculations"));
    }
}

//! Deterministic red-flag pre-screen over the raw listing text.

mod defaults;
mod pattern;

pub use pattern::{RedFlagPattern, Severity};

use crate::listing::HouseListing;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Accumulated weight at which the scan rejects outright, even without an
/// explicit dealbreaker match. Enough unrelated warnings force the same
/// outcome as a single dealbreaker; the thresholds are part of the contract.
const REJECT_WEIGHT: u32 = 100;
/// Accumulated weight at which the scan asks for further review.
const REVIEW_WEIGHT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreeningRecommendation {
    Reject,
    FurtherReview,
    Suitable,
}

impl std::fmt::Display for ScreeningRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Reject => "REJECT",
            Self::FurtherReview => "FURTHER_REVIEW",
            Self::Suitable => "SUITABLE",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreeningConfidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ScreeningConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        };
        f.write_str(label)
    }
}

/// One pattern that matched during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedFlag {
    pub pattern: String,
    pub reason: String,
    pub weight: u32,
}

/// Outcome of scanning one listing. Transient; consumed by the orchestrator
/// and embedded into prompts and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub recommendation: ScreeningRecommendation,
    pub confidence: ScreeningConfidence,
    pub dealbreakers: Vec<MatchedFlag>,
    pub warnings: Vec<MatchedFlag>,
    pub total_weight: u32,
}

impl ScanResult {
    pub fn is_reject(&self) -> bool {
        self.recommendation == ScreeningRecommendation::Reject
    }
}

/// Owns the dealbreaker and warning pattern lists and runs them over the
/// extracted listing text. Patterns are append-only; construct separate
/// detectors when isolation is needed.
#[derive(Debug, Clone)]
pub struct RedFlagDetector {
    dealbreakers: Vec<RedFlagPattern>,
    warnings: Vec<RedFlagPattern>,
}

impl Default for RedFlagDetector {
    fn default() -> Self {
        Self {
            dealbreakers: defaults::default_dealbreakers(),
            warnings: defaults::default_warnings(),
        }
    }
}

impl RedFlagDetector {
    /// Detector seeded with the built-in Dutch pattern corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Detector without any registered patterns.
    pub fn empty() -> Self {
        Self {
            dealbreakers: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_dealbreaker(&mut self, phrase: &str, reason: &str, weight: u32) {
        self.dealbreakers
            .push(RedFlagPattern::dealbreaker(phrase, reason, weight));
    }

    pub fn add_warning(&mut self, phrase: &str, reason: &str, weight: u32) {
        self.warnings
            .push(RedFlagPattern::warning(phrase, reason, weight));
    }

    pub fn dealbreaker_count(&self) -> usize {
        self.dealbreakers.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Scan a listing record. Pure function of the record; every matching
    /// pattern is retained (no deduplication) and each adds its own weight.
    pub fn scan(&self, listing: &HouseListing) -> ScanResult {
        let text = listing.screening_text();

        let dealbreakers = collect_matches(&self.dealbreakers, &text);
        let warnings = collect_matches(&self.warnings, &text);

        let total_weight: u32 = dealbreakers
            .iter()
            .chain(warnings.iter())
            .map(|flag| flag.weight)
            .sum();

        let (recommendation, confidence) = if !dealbreakers.is_empty() || total_weight >= REJECT_WEIGHT
        {
            (ScreeningRecommendation::Reject, ScreeningConfidence::High)
        } else if !warnings.is_empty() || total_weight >= REVIEW_WEIGHT {
            (
                ScreeningRecommendation::FurtherReview,
                ScreeningConfidence::Medium,
            )
        } else {
            (ScreeningRecommendation::Suitable, ScreeningConfidence::Low)
        };

        debug!(
            dealbreakers = dealbreakers.len(),
            warnings = warnings.len(),
            total_weight,
            ?recommendation,
            "red flag scan complete"
        );

        ScanResult {
            recommendation,
            confidence,
            dealbreakers,
            warnings,
            total_weight,
        }
    }
}

fn collect_matches(patterns: &[RedFlagPattern], text: &str) -> Vec<MatchedFlag> {
    patterns
        .iter()
        .filter(|pattern| pattern.matches(text))
        .map(|pattern| MatchedFlag {
            pattern: pattern.phrase().to_string(),
            reason: pattern.reason().to_string(),
            weight: pattern.weight(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::HouseListing;

    fn listing(description: &str) -> HouseListing {
        HouseListing::from_description(description)
    }

    #[test]
    fn empty_detector_and_empty_listing_are_suitable() {
        let detector = RedFlagDetector::empty();
        let result = detector.scan(&HouseListing::default());

        assert_eq!(result.recommendation, ScreeningRecommendation::Suitable);
        assert_eq!(result.confidence, ScreeningConfidence::Low);
        assert_eq!(result.total_weight, 0);
        assert!(result.dealbreakers.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn exact_dealbreaker_phrase_rejects_with_its_weight() {
        let mut detector = RedFlagDetector::empty();
        detector.add_dealbreaker("verhuur niet toegestaan", "no self-rental", 100);

        let result = detector.scan(&listing("verhuur niet toegestaan"));

        assert_eq!(result.recommendation, ScreeningRecommendation::Reject);
        assert_eq!(result.confidence, ScreeningConfidence::High);
        assert_eq!(result.dealbreakers.len(), 1);
        assert_eq!(result.total_weight, 100);
        assert_eq!(result.dealbreakers[0].pattern, "verhuur niet toegestaan");
    }

    #[test]
    fn single_warning_requests_further_review() {
        let mut detector = RedFlagDetector::empty();
        detector.add_warning("erfpacht", "leasehold", 50);

        let result = detector.scan(&listing("chalet op erfpacht grond"));

        assert_eq!(result.recommendation, ScreeningRecommendation::FurtherReview);
        assert_eq!(result.confidence, ScreeningConfidence::Medium);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.total_weight, 50);
    }

    #[test]
    fn accumulated_warning_weight_alone_forces_reject() {
        let mut detector = RedFlagDetector::empty();
        detector.add_warning("erfpacht", "leasehold", 55);
        detector.add_warning("parkkosten", "park costs", 60);

        let result = detector.scan(&listing("erfpacht met hoge parkkosten"));

        assert!(result.dealbreakers.is_empty());
        assert_eq!(result.total_weight, 115);
        assert_eq!(result.recommendation, ScreeningRecommendation::Reject);
        assert_eq!(result.confidence, ScreeningConfidence::High);
    }

    #[test]
    fn every_matching_pattern_contributes_its_weight() {
        let mut detector = RedFlagDetector::empty();
        detector.add_warning("parkkosten", "park costs", 35);
        detector.add_warning("servicekosten", "service costs", 35);
        detector.add_warning("bouwjaar 2005", "older build", 45);

        let result = detector.scan(&listing(
            "parkkosten en servicekosten van toepassing, bouwjaar 2005",
        ));

        assert_eq!(result.warnings.len(), 3);
        assert_eq!(result.total_weight, 115);
    }

    #[test]
    fn registration_order_does_not_change_the_outcome() {
        let mut forward = RedFlagDetector::empty();
        forward.add_warning("erfpacht", "leasehold", 50);
        forward.add_warning("parkkosten", "park costs", 35);

        let mut reversed = RedFlagDetector::empty();
        reversed.add_warning("parkkosten", "park costs", 35);
        reversed.add_warning("erfpacht", "leasehold", 50);

        let record = listing("erfpacht en parkkosten");
        let first = forward.scan(&record);
        let second = reversed.scan(&record);

        assert_eq!(first.total_weight, second.total_weight);
        assert_eq!(first.recommendation, second.recommendation);
    }

    #[test]
    fn default_corpus_flags_mandatory_park_operators() {
        let detector = RedFlagDetector::new();
        let result = detector.scan(&listing("dit chalet mag alleen via landal verhuurd worden"));

        assert_eq!(result.recommendation, ScreeningRecommendation::Reject);
        assert!(result
            .dealbreakers
            .iter()
            .any(|flag| flag.pattern == "landal"));
    }

    #[test]
    fn default_corpus_passes_a_clean_listing() {
        let detector = RedFlagDetector::new();
        let result = detector.scan(&listing("prachtig chalet met eigen grond en vrije verhuur"));

        assert_eq!(result.recommendation, ScreeningRecommendation::Suitable);
        assert_eq!(result.total_weight, 0);
    }

    #[test]
    fn scan_result_serializes_to_the_wire_shape() {
        let mut detector = RedFlagDetector::empty();
        detector.add_dealbreaker("landal", "park operator", 100);

        let result = detector.scan(&listing("verhuur via landal"));
        let value = serde_json::to_value(&result).expect("serializes");

        assert_eq!(value["recommendation"], "REJECT");
        assert_eq!(value["confidence"], "HIGH");
        assert_eq!(value["total_weight"], 100);
        assert_eq!(value["dealbreakers"][0]["weight"], 100);
    }
}

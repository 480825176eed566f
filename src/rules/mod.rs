//! Versioned scoring schemas and the registry that resolves them.

mod registry;
mod v1_0_0;
mod v1_1_0;
mod v2_0_0;

pub use registry::{RuleSetFactory, RulesRegistry};
pub use v1_0_0::RulesV1_0_0;
pub use v1_1_0::RulesV1_1_0;
pub use v2_0_0::RulesV2_0_0;

use crate::listing::HouseListing;
use crate::screening::ScanResult;
use serde_json::Value;
use std::collections::BTreeMap;

/// Criteria for one analysis category within a rules version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryCriteria {
    pub key: &'static str,
    pub name: &'static str,
    pub weight: f64,
    pub criteria: &'static [&'static str],
    pub prompt_template: &'static str,
}

/// A named, immutable schema of scoring categories, weights, and prompting
/// instructions. Instances are created through the [`RulesRegistry`] and
/// injected where needed; the category set is fixed for the lifetime of a
/// version.
pub trait RuleSet {
    /// Semantic version string, e.g. `v1.0.0`.
    fn version(&self) -> &'static str;

    fn system_prompt(&self) -> &'static str;

    /// Categories in prompt order.
    fn categories(&self) -> &'static [CategoryCriteria];

    /// Whether this schema embeds a red-flag pre-screen into its prompt.
    fn uses_prescreening(&self) -> bool {
        false
    }

    /// Build the complete analysis prompt for one listing. `prescreen` is
    /// only provided when [`RuleSet::uses_prescreening`] returns true;
    /// `enrichment` and `market` are opaque pass-through data embedded
    /// verbatim, never interpreted.
    fn analysis_prompt(
        &self,
        listing: &HouseListing,
        prescreen: Option<&ScanResult>,
        enrichment: Option<&Value>,
        market: Option<&Value>,
    ) -> String;

    fn category(&self, key: &str) -> Option<&'static CategoryCriteria> {
        self.categories().iter().find(|criteria| criteria.key == key)
    }

    /// Weighted mean of the category scores under this schema's weights.
    ///
    /// The schema is authoritative: categories missing from `category_scores`
    /// count as 0.0 and keys unknown to the schema are ignored. A zero total
    /// weight yields 0.0. Rounded to two decimals.
    fn overall_score(&self, category_scores: &BTreeMap<String, f64>) -> f64 {
        let total_weight: f64 = self.categories().iter().map(|c| c.weight).sum();
        if total_weight == 0.0 {
            return 0.0;
        }

        let weighted_sum: f64 = self
            .categories()
            .iter()
            .map(|criteria| category_scores.get(criteria.key).copied().unwrap_or(0.0) * criteria.weight)
            .sum();

        round2(weighted_sum / total_weight)
    }
}

impl std::fmt::Debug for dyn RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("version", &self.version())
            .finish()
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pretty-printed record body for prompt embedding.
pub(crate) fn listing_json(listing: &HouseListing) -> String {
    serde_json::to_string_pretty(listing).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn value_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

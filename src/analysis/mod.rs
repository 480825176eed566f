//! Orchestration of one listing analysis: prompt construction, the single
//! collaborator call, reply parsing, aggregation, and final validation.

mod parser;
mod provider;
mod result;

pub use parser::{parse_reply, strip_code_fences, ModelReply};
pub use provider::{LanguageModel, MockModel, ProviderError};
pub use result::{AnalysisMetadata, AnalysisResult, CategoryScore};

use crate::error::{AnalysisError, ConfigurationError, ValidationError};
use crate::listing::HouseListing;
use crate::rules::{round2, RuleSet, RulesRegistry};
use crate::screening::RedFlagDetector;
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{info, instrument};

/// Optional context forwarded into the prompt verbatim; the core never
/// interprets it.
#[derive(Debug, Default, Clone)]
pub struct MarketContext {
    pub enrichment: Option<Value>,
    pub market_metrics: Option<Value>,
}

/// Composes the red-flag detector, a resolved rules version, and the
/// generative collaborator into one analysis pipeline.
///
/// All state is fixed at construction; each call is independent and no
/// partial result ever escapes a failed stage.
pub struct AnalysisAgent {
    rules: Box<dyn RuleSet>,
    detector: RedFlagDetector,
    model: Box<dyn LanguageModel>,
}

impl std::fmt::Debug for AnalysisAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisAgent")
            .field("rules", &self.rules.version())
            .field("detector", &self.detector)
            .finish_non_exhaustive()
    }
}

impl AnalysisAgent {
    /// Resolve `version` (or `"latest"`) against the registry and pair it
    /// with the default red-flag corpus.
    pub fn new(
        registry: &RulesRegistry,
        version: &str,
        model: Box<dyn LanguageModel>,
    ) -> Result<Self, ConfigurationError> {
        let rules = registry.resolve(version)?;
        Ok(Self {
            rules,
            detector: RedFlagDetector::new(),
            model,
        })
    }

    /// Same as [`AnalysisAgent::new`] but with a caller-supplied detector,
    /// used by tests and callers with extended pattern sets.
    pub fn with_detector(
        registry: &RulesRegistry,
        version: &str,
        model: Box<dyn LanguageModel>,
        detector: RedFlagDetector,
    ) -> Result<Self, ConfigurationError> {
        let rules = registry.resolve(version)?;
        Ok(Self {
            rules,
            detector,
            model,
        })
    }

    pub fn rules_version(&self) -> &str {
        self.rules.version()
    }

    /// Run the full pipeline for one listing. Any stage failure aborts the
    /// analysis with a typed error; nothing is retried here.
    #[instrument(skip_all, fields(house_id = %house_id, rules = self.rules.version()))]
    pub fn analyze_house(
        &self,
        listing: &HouseListing,
        house_id: &str,
        dataset_id: Option<&str>,
        context: &MarketContext,
    ) -> Result<AnalysisResult, AnalysisError> {
        let started = Instant::now();

        let prescreen = if self.rules.uses_prescreening() {
            Some(self.detector.scan(listing))
        } else {
            None
        };

        let prompt = self.rules.analysis_prompt(
            listing,
            prescreen.as_ref(),
            context.enrichment.as_ref(),
            context.market_metrics.as_ref(),
        );

        info!(model = self.model.model_id(), "requesting model analysis");
        let raw_reply = self.model.analyze(&prompt)?;
        let reply = parser::parse_reply(&raw_reply)?;

        let scores: BTreeMap<String, f64> = reply
            .category_scores
            .iter()
            .map(|(key, category)| (key.clone(), category.score))
            .collect();
        let overall_score = self.rules.overall_score(&scores);

        let result = AnalysisResult {
            house_id: house_id.to_string(),
            analyzed_at: Utc::now(),
            rules_version: self.rules.version().to_string(),
            overall_score,
            category_scores: reply.category_scores,
            overall_assessment: reply.overall_assessment,
            top_strengths: reply.top_strengths,
            top_concerns: reply.top_concerns,
            investment_recommendation: reply.investment_recommendation,
            metadata: AnalysisMetadata {
                processing_time_seconds: round2(started.elapsed().as_secs_f64()),
                llm_model: self.model.model_id().to_string(),
                apify_dataset_id: dataset_id.map(str::to_string),
            },
            extra: reply.extra,
        };

        validate(&result)?;
        info!(overall_score, "analysis complete");
        Ok(result)
    }
}

/// Check the final result against the output contract: required fields
/// present and every score within 0-10.
pub fn validate(result: &AnalysisResult) -> Result<(), ValidationError> {
    if result.house_id.is_empty() {
        return Err(ValidationError::MissingField("house_id"));
    }
    if result.rules_version.is_empty() {
        return Err(ValidationError::MissingField("rules_version"));
    }

    if !(0.0..=10.0).contains(&result.overall_score) {
        return Err(ValidationError::OverallScoreOutOfRange(result.overall_score));
    }

    for (category, score) in &result.category_scores {
        if !(0.0..=10.0).contains(&score.score) {
            return Err(ValidationError::CategoryScoreOutOfRange {
                category: category.clone(),
                score: score.score,
            });
        }
    }

    Ok(())
}

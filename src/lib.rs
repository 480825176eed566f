//! Screening and scoring engine for short-stay rental investment listings.
//!
//! The pipeline combines a deterministic red-flag pre-screen over the raw
//! listing text with a versioned, weighted category analysis produced by a
//! generative model behind the [`analysis::LanguageModel`] seam.

pub mod analysis;
pub mod config;
pub mod error;
pub mod listing;
pub mod report;
pub mod rules;
pub mod screening;
pub mod telemetry;

pub use analysis::{
    AnalysisAgent, AnalysisResult, CategoryScore, LanguageModel, MarketContext, MockModel,
};
pub use error::AnalysisError;
pub use listing::HouseListing;
pub use rules::{RuleSet, RulesRegistry};
pub use screening::{RedFlagDetector, ScanResult, ScreeningRecommendation};

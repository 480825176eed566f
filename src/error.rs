use crate::analysis::ProviderError;

/// Registry and setup failures raised before an analysis can start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("rules version '{requested}' not found; available versions: {}", available.join(", "))]
    UnknownRulesVersion {
        requested: String,
        available: Vec<String>,
    },
    #[error("rules version '{0}' already registered")]
    DuplicateRulesVersion(String),
    #[error("no rules versions registered")]
    NoVersionsRegistered,
    #[error("unknown model provider '{0}'")]
    UnknownProvider(String),
}

/// The collaborator reply was not valid JSON after fence stripping.
///
/// The raw reply is retained for diagnostics; callers decide how much of it
/// to surface.
#[derive(Debug, thiserror::Error)]
#[error("failed to parse model reply as JSON: {source}")]
pub struct ParseError {
    pub raw_reply: String,
    #[source]
    pub source: serde_json::Error,
}

/// A finished analysis violated the output contract.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("overall score {0} outside the 0-10 range")]
    OverallScoreOutOfRange(f64),
    #[error("category '{category}' score {score} outside the 0-10 range")]
    CategoryScoreOutOfRange { category: String, score: f64 },
}

/// Terminal failure of a single analysis. Nothing here is retried internally;
/// retry and batch policy belong to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("model provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

use super::{RuleSet, RulesV1_0_0, RulesV1_1_0, RulesV2_0_0};
use crate::error::ConfigurationError;
use std::collections::BTreeMap;

/// Constructor for one rules version, stored so every resolution hands out a
/// fresh instance.
pub type RuleSetFactory = fn() -> Box<dyn RuleSet>;

/// Explicit registry of rule schemas, passed by reference to whatever needs
/// to resolve a version. Versions are registered at startup and never
/// overwritten or auto-created.
#[derive(Debug, Default)]
pub struct RulesRegistry {
    factories: BTreeMap<String, RuleSetFactory>,
}

impl RulesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with every built-in schema version.
    pub fn with_builtin_versions() -> Self {
        let mut registry = Self::new();
        registry
            .register(|| Box::new(RulesV1_0_0))
            .expect("built-in v1.0.0 registers once");
        registry
            .register(|| Box::new(RulesV1_1_0))
            .expect("built-in v1.1.0 registers once");
        registry
            .register(|| Box::new(RulesV2_0_0))
            .expect("built-in v2.0.0 registers once");
        registry
    }

    /// Register a new rules version. Duplicate identifiers are a
    /// configuration error, never a silent overwrite.
    pub fn register(&mut self, factory: RuleSetFactory) -> Result<(), ConfigurationError> {
        let version = factory().version().to_string();
        if self.factories.contains_key(&version) {
            return Err(ConfigurationError::DuplicateRulesVersion(version));
        }
        self.factories.insert(version, factory);
        Ok(())
    }

    /// Resolve a version string, where `"latest"` selects the greatest
    /// semantic version among the registered schemas.
    pub fn resolve(&self, version: &str) -> Result<Box<dyn RuleSet>, ConfigurationError> {
        let requested = if version == "latest" {
            self.latest_version()?
        } else {
            version.to_string()
        };

        match self.factories.get(&requested) {
            Some(factory) => Ok(factory()),
            None => Err(ConfigurationError::UnknownRulesVersion {
                requested,
                available: self.versions(),
            }),
        }
    }

    /// Registered versions, most recent first.
    pub fn versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = self.factories.keys().cloned().collect();
        versions.sort_by(|a, b| version_key(b).cmp(&version_key(a)));
        versions
    }

    pub fn latest_version(&self) -> Result<String, ConfigurationError> {
        self.factories
            .keys()
            .max_by_key(|version| version_key(version))
            .cloned()
            .ok_or(ConfigurationError::NoVersionsRegistered)
    }
}

/// Numeric tuple for semantic ordering: `v1.10.0` sorts above `v1.9.9`.
fn version_key(version: &str) -> Vec<u64> {
    version
        .trim_start_matches('v')
        .split('.')
        .map(|component| component.parse().unwrap_or(0))
        .collect()
}

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration for the analysis CLI, sourced from the
/// environment with `.env` support.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rules_version: String,
    pub provider: String,
    pub output_dir: PathBuf,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let rules_version =
            env::var("HOUSE_RULES_VERSION").unwrap_or_else(|_| "latest".to_string());
        if rules_version.trim().is_empty() {
            return Err(ConfigError::EmptyRulesVersion);
        }

        let provider = env::var("HOUSE_LLM_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let output_dir = PathBuf::from(
            env::var("HOUSE_OUTPUT_DIR").unwrap_or_else(|_| "house-analysis".to_string()),
        );
        let log_level = env::var("HOUSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            rules_version,
            provider,
            output_dir,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyRulesVersion,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRulesVersion => {
                write!(f, "HOUSE_RULES_VERSION must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("HOUSE_RULES_VERSION");
        env::remove_var("HOUSE_LLM_PROVIDER");
        env::remove_var("HOUSE_OUTPUT_DIR");
        env::remove_var("HOUSE_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.rules_version, "latest");
        assert_eq!(config.provider, "mock");
        assert_eq!(config.output_dir, PathBuf::from("house-analysis"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_honors_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("HOUSE_RULES_VERSION", "v1.1.0");
        env::set_var("HOUSE_OUTPUT_DIR", "/tmp/reports");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.rules_version, "v1.1.0");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
        reset_env();
    }

    #[test]
    fn blank_rules_version_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("HOUSE_RULES_VERSION", "   ");
        let err = AppConfig::load().expect_err("blank version must fail");
        assert!(matches!(err, ConfigError::EmptyRulesVersion));
        reset_env();
    }
}

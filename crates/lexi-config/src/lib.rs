use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::generator::GeneratorConfig;
use self::orchestrator::OrchestratorConfig;
use self::store::StoreConfig;
use self::targets::TargetsConfig;

pub mod generator;
pub mod orchestrator;
pub mod store;
pub mod targets;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub orchestrator: OrchestratorConfig,
    pub store: StoreConfig,
    pub targets: TargetsConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Read a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.apply_env();
        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to [`Config::new`]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::new())
        }
    }

    fn apply_env(&mut self) {
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            self.generator.api_key = key;
        }

        if let Ok(url) = env::var("LEXI_API_URL") {
            self.generator.api_url = url;
        }

        if let Ok(model) = env::var("LEXI_MODEL") {
            self.generator.model = model;
        }

        if let Some(timeout) = env_parse("LEXI_REQUEST_TIMEOUT_SECONDS") {
            self.generator.request_timeout_seconds = timeout;
        }

        if let Some(batch_size) = env_parse("LEXI_BATCH_SIZE") {
            self.orchestrator.batch_size = batch_size;
        }

        if let Some(budget) = env_parse("LEXI_DAILY_BUDGET") {
            self.orchestrator.daily_budget_usd = budget;
        }

        if let Ok(path) = env::var("LEXI_STORE_PATH") {
            self.store.path = path;
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexi_types::Tier;
    use std::io::Write;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.generator.model, "gpt-3.5-turbo");
        assert_eq!(config.orchestrator.batch_size, 5);
        assert_eq!(config.orchestrator.max_consecutive_failures, 3);
        assert_eq!(config.orchestrator.avoid_list_limit, 30);
        assert_eq!(config.targets.target_for(Tier::From700), 1200);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"orchestrator": {{"batch_size": 8}}, "targets": {{"900+": 50}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.orchestrator.batch_size, 8);
        assert_eq!(config.orchestrator.inter_batch_delay_ms, 2000);
        assert_eq!(config.targets.target_for(Tier::Above900), 50);
        assert_eq!(config.targets.target_for(Tier::Below300), 200);
    }

    #[test]
    fn invalid_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn max_tokens_is_capped() {
        let generator = GeneratorConfig::default();
        assert_eq!(generator.max_tokens_for(5), 750);
        assert_eq!(generator.max_tokens_for(50), 2000);
    }

    #[test]
    fn api_key_is_never_serialized() {
        let mut config = Config::default();
        config.generator.api_key = "sk-secret".into();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}

//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GroupingConfig, ObservabilityConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

const ENV_LOG_LEVEL: &str = "REFGROUP_LOG_LEVEL";
const ENV_MIN_GROUP_SIZE: &str = "REFGROUP_DEFAULT_MIN_GROUP_SIZE";
const ENV_INCLUDE_INHERITED: &str = "REFGROUP_INCLUDE_INHERITED_LINKS";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`REFGROUP_*`)
/// 2. Project config (`refgroup.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefgroupConfig {
    pub grouping: GroupingConfig,
    pub observability: ObservabilityConfig,
}

impl RefgroupConfig {
    /// Load configuration from `root`, reading overrides from the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Load configuration from `root` with an explicit environment lookup.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grouping.default_min_group_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.default_min_group_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.grouping.attributes.iter().any(|a| a.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.attributes".to_string(),
                message: "attribute names must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = env(ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        if let Some(raw) = env(ENV_MIN_GROUP_SIZE) {
            self.grouping.default_min_group_size =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::ValidationFailed {
                        field: ENV_MIN_GROUP_SIZE.to_string(),
                        message: format!("expected an unsigned integer, got `{raw}`"),
                    })?;
        }
        if let Some(raw) = env(ENV_INCLUDE_INHERITED) {
            self.grouping.include_inherited_links =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::ValidationFailed {
                        field: ENV_INCLUDE_INHERITED.to_string(),
                        message: format!("expected true or false, got `{raw}`"),
                    })?;
        }
        Ok(())
    }
}

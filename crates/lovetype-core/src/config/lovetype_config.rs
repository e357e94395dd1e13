//! Top-level Lovetype configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DataConfig, ObservabilityConfig, ServerConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LOVETYPE_*`)
/// 3. Config file (`--config` path, else `lovetype.toml` in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LovetypeConfig {
    pub data: DataConfig,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub json_logs: Option<bool>,
}

impl LovetypeConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist; the implicit `lovetype.toml`
    /// in `root` is optional.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(CONFIG_FILE_NAME);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LovetypeConfig) -> Result<(), ConfigError> {
        if config.server.port == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "server.port".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref host) = config.server.host {
            if host.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "server.host".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref dir) = config.data.data_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "data.data_dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LovetypeConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: LovetypeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut LovetypeConfig, other: &LovetypeConfig) {
        if other.data.data_dir.is_some() {
            base.data.data_dir = other.data.data_dir.clone();
        }
        if other.server.host.is_some() {
            base.server.host = other.server.host.clone();
        }
        if other.server.port.is_some() {
            base.server.port = other.server.port;
        }
        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
        if other.observability.json_logs.is_some() {
            base.observability.json_logs = other.observability.json_logs;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LOVETYPE_DATA_DIR`, `LOVETYPE_PORT`, etc.
    fn apply_env_overrides(config: &mut LovetypeConfig) {
        if let Ok(val) = std::env::var("LOVETYPE_DATA_DIR") {
            config.data.data_dir = Some(val);
        }
        if let Ok(val) = std::env::var("LOVETYPE_HOST") {
            config.server.host = Some(val);
        }
        if let Ok(val) = std::env::var("LOVETYPE_PORT") {
            if let Ok(v) = val.parse::<u16>() {
                config.server.port = Some(v);
            }
        }
        if let Ok(val) = std::env::var("LOVETYPE_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json_logs = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut LovetypeConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.data_dir {
            config.data.data_dir = Some(v.display().to_string());
        }
        if let Some(ref v) = cli.host {
            config.server.host = Some(v.clone());
        }
        if let Some(v) = cli.port {
            config.server.port = Some(v);
        }
        if let Some(v) = cli.json_logs {
            config.observability.json_logs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

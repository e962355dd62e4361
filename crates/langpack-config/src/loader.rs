//! Configuration loading utilities

use crate::AppConfig;
use langpack_common::{LangpackError, LogFormat};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "LANGPACK_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for LangpackError {
    fn from(err: ConfigError) -> Self {
        LangpackError::config_with_source("failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
        debug!("Reading configuration from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: AppConfig = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration, looking in order at `explicit`, the
    /// `LANGPACK_CONFIG_PATH` variable, `langpack.yaml` and `langpack.yml`.
    /// Falls back to defaults with environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
        if let Some(path) = Self::resolve_path(explicit) {
            info!("Loading configuration file {:?}", path);
            return Self::load_config(path);
        }

        debug!("No configuration file found, using defaults");
        let mut config = AppConfig::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ["langpack.yaml", "langpack.yml"]
            .into_iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
    }

    /// Apply `LANGPACK_*` environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut AppConfig) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides using an arbitrary variable lookup
    pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup("LANGPACK_LOCALE_ROOT") {
            config.localization.locale_root = PathBuf::from(root);
        }

        if let Some(path) = lookup("LANGPACK_PREFERENCE_FILE") {
            config.localization.preference_file = PathBuf::from(path);
        }

        if let Some(code) = lookup("LANGPACK_DEFAULT_LANGUAGE") {
            config.localization.default_language = code;
        }

        if let Some(level) = lookup("LANGPACK_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("LANGPACK_LOG_FORMAT") {
            config.logging.format =
                format
                    .parse::<LogFormat>()
                    .map_err(|e| ConfigError::EnvParseError {
                        var: "LANGPACK_LOG_FORMAT".to_string(),
                        source: Box::new(e),
                    })?;
        }

        if let Some(path) = lookup("LANGPACK_LOG_FILE") {
            config.logging.file_path = Some(PathBuf::from(path));
        }

        Ok(())
    }
}

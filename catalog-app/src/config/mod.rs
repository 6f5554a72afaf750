//! Configuration module for catalog-app.
//!
//! Handles loading configuration from a TOML file, with the base URL
//! overridable from the command line or the `CATALOG_API_URL` environment
//! variable.

pub mod file;
pub mod runtime;

use crate::config::file::FileConfig;
use crate::config::runtime::{ApiSettings, ListSettings};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result containing all parts.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub api: ApiSettings,
    pub list: ListSettings,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    base_url_override: Option<Url>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, base_url_override: Option<Url>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            base_url_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file (a missing file means all defaults)
    /// 2. Apply the base URL override
    /// 3. Validate the configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = ?self.config_path,
                    "Config file not found, using defaults"
                );
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        self.process(file_config)
    }

    fn process(&self, mut file_config: FileConfig) -> Result<LoadedConfig, ConfigError> {
        if let Some(base_url) = &self.base_url_override {
            file_config.api.base_url = base_url.clone();
        }

        self.validate(&file_config)?;

        Ok(LoadedConfig {
            api: ApiSettings {
                base_url: file_config.api.base_url,
                timeout: file_config.api.timeout_secs.map(Duration::from_secs),
            },
            list: ListSettings {
                sort_by: file_config.list.sort_by,
            },
        })
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        let base_url = &config.api.base_url;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError(format!(
                "base_url must be http or https, got {base_url}"
            )));
        }
        if base_url.host().is_none() {
            return Err(ConfigError::ValidationError(format!(
                "base_url has no host: {base_url}"
            )));
        }
        if config.api.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

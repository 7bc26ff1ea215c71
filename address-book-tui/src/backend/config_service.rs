//! Config service

use std::fs;
use std::path::PathBuf;

use address_book_provider::{timeout_from_secs, SourceOptions, DEFAULT_ENDPOINT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// Directory name under the platform config/data directories
pub const APP_DIR_NAME: &str = "address-book";

const CONFIG_FILE_NAME: &str = "config.json";

/// Application config
///
/// Every field is optional in the file; absent fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User source endpoint
    pub endpoint: String,
    /// Connect timeout in seconds; absent or 0 disables it
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds; absent or 0 disables it
    pub request_timeout_secs: Option<u64>,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// Connection settings for the user source.
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            endpoint: self.endpoint.clone(),
            connect_timeout: timeout_from_secs(self.connect_timeout_secs),
            request_timeout: timeout_from_secs(self.request_timeout_secs),
        }
    }
}

/// Config service trait
pub trait ConfigService: Send + Sync {
    /// Load the config
    fn load(&self) -> Result<AppConfig>;
}

/// Config read from a JSON file on the local disk
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// Service reading `{config_dir}/address-book/config.json`.
    ///
    /// Without a platform config directory every load yields the defaults.
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
        }
    }

    /// Service reading an explicit file.
    #[cfg(test)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(path) = &self.path else {
            log::warn!("No config directory on this platform, using defaults");
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            log::info!("No config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

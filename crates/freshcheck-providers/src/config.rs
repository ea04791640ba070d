//! Configuration for the inference client.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "FRESHCHECK_MODEL";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "FRESHCHECK_BASE_URL";

/// Inference client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Endpoint base URL; requests go to `{base_url}/messages`
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Output token budget
    pub max_tokens: u32,
    /// Value of the `anthropic-version` header
    pub api_version: String,
    /// Request timeout in seconds; `None` waits for as long as the transport does
    pub timeout_seconds: Option<u64>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com/v1".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1000,
            api_version: "2023-06-01".to_string(),
            timeout_seconds: None,
        }
    }
}

impl InferenceConfig {
    /// Load configuration from a YAML file.
    ///
    /// Returns the defaults when the file does not exist. Fields missing
    /// from the file keep their default values.
    pub fn from_file(path: &Path) -> ProviderResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content).map_err(|e| {
            ProviderError::Config(format!("{}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Load configuration with hierarchy support.
    ///
    /// Configuration hierarchy (highest to lowest priority):
    /// 1. Environment (`FRESHCHECK_MODEL`, `FRESHCHECK_BASE_URL`)
    /// 2. Explicit file passed by the caller
    /// 3. Project-level config (`./freshcheck.yaml`)
    /// 4. User-level config (`~/.freshcheck/config.yaml`)
    /// 5. Built-in defaults
    pub fn load_with_hierarchy(explicit: Option<&Path>) -> ProviderResult<Self> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                debug!("Loading user config from {}", user_config_path.display());
                config = Self::from_file(&user_config_path)?;
            }
        }

        let project_config_path = Self::project_config_path();
        if project_config_path.exists() {
            debug!("Loading project config from {}", project_config_path.display());
            config = Self::merge(config, Self::from_file(&project_config_path)?);
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ProviderError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            config = Self::merge(config, Self::from_file(path)?);
        }

        config.apply_env();
        Ok(config)
    }

    /// User-level config path, if a home directory is known.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".freshcheck").join("config.yaml"))
    }

    /// Project-level config path.
    pub fn project_config_path() -> PathBuf {
        PathBuf::from("freshcheck.yaml")
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Some(model) = non_empty_env(MODEL_ENV) {
            self.model = model;
        }
        if let Some(base_url) = non_empty_env(BASE_URL_ENV) {
            self.base_url = base_url;
        }
    }

    /// Merge two configurations, with `override_config` taking precedence
    /// wherever it differs from the defaults.
    fn merge(mut base: Self, override_config: Self) -> Self {
        let defaults = Self::default();

        if override_config.base_url != defaults.base_url {
            base.base_url = override_config.base_url;
        }
        if override_config.model != defaults.model {
            base.model = override_config.model;
        }
        if override_config.max_tokens != defaults.max_tokens {
            base.max_tokens = override_config.max_tokens;
        }
        if override_config.api_version != defaults.api_version {
            base.api_version = override_config.api_version;
        }
        if override_config.timeout_seconds.is_some() {
            base.timeout_seconds = override_config.timeout_seconds;
        }

        base
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Full URL of the messages endpoint.
    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url.trim_end_matches('/'))
    }

    /// Reject values the endpoint can never accept.
    pub fn validate(&self) -> ProviderResult<()> {
        if self.model.trim().is_empty() {
            return Err(ProviderError::Config("model must not be empty".to_string()));
        }
        if self.max_tokens == 0 {
            return Err(ProviderError::Config(
                "max_tokens must be greater than zero".to_string(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProviderError::Config(format!(
                "base_url must be an http(s) URL: {}",
                self.base_url
            )));
        }
        if self.timeout_seconds == Some(0) {
            return Err(ProviderError::Config(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Read the API key from the environment.
pub fn api_key_from_env() -> ProviderResult<String> {
    non_empty_env(API_KEY_ENV)
        .ok_or_else(|| ProviderError::Config(format!("{} is not set", API_KEY_ENV)))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

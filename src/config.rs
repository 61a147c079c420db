use std::path::Path;

use serde::Deserialize;

use crate::prompt::{ASSISTANT_NAME, DEFAULT_MODEL};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_API_BASE: &str = "OPENAI_BASE_URL";
pub const ENV_NAME: &str = "AI_ASSISTANT_NAME";
pub const ENV_MODEL: &str = "AI_ASSISTANT_MODEL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Settings as written in a TOML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    name: Option<String>,
    model: Option<String>,
    api_base: Option<String>,
    timeout_secs: Option<u64>,
}

/// Resolved settings for registering the assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub name: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
    /// Sourced from the environment, which may have been seeded from a dotenv file.
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: ASSISTANT_NAME.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl Config {
    /// Parse a TOML document on top of the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(s).map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;
        let mut config = Self::default();
        if let Some(name) = file.name {
            config.name = name;
        }
        if let Some(model) = file.model {
            config.model = model;
        }
        if let Some(api_base) = file.api_base {
            config.api_base = api_base;
        }
        if let Some(timeout) = file.timeout_secs {
            config.timeout_secs = timeout;
        }
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(name) = get(ENV_NAME) {
            self.name = name;
        }
        if let Some(model) = get(ENV_MODEL) {
            self.model = model;
        }
        if let Some(api_base) = get(ENV_API_BASE) {
            self.api_base = api_base;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        self
    }

    /// The credential, or an error naming the variable that should hold it.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingConfig(format!("{ENV_API_KEY} is not set")))
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("name must not be empty".into()));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("model must not be empty".into()));
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ConfigError::InvalidConfig(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig("timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

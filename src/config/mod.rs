//! Configuration management for repolens
//!
//! Settings are resolved once at startup in three layers: the optional YAML
//! file, then environment variables, then CLI flags. The result is read-only.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default GitHub REST API base URL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default OpenAI-compatible insight provider base URL (Groq)
pub const DEFAULT_INSIGHT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Default insight model
pub const DEFAULT_INSIGHT_MODEL: &str = "llama-3.1-8b-instant";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub REST API base URL
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Optional GitHub token for higher rate limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Insight provider API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight_api_key: Option<String>,

    /// Insight provider base URL
    #[serde(default = "default_insight_api_url")]
    pub insight_api_url: String,

    /// Insight model name
    #[serde(default = "default_insight_model")]
    pub insight_model: String,

    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

fn default_github_api_url() -> String {
    DEFAULT_GITHUB_API_URL.to_string()
}

fn default_insight_api_url() -> String {
    DEFAULT_INSIGHT_API_URL.to_string()
}

fn default_insight_model() -> String {
    DEFAULT_INSIGHT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            github_token: None,
            insight_api_key: None,
            insight_api_url: default_insight_api_url(),
            insight_model: default_insight_model(),
            debug: false,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".repolens").join("config.yaml"))
    }

    /// Resolve the config path from an optional override.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load the file layer and apply environment overrides.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let mut config = Self::load_from(Self::resolve_path(path)?)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file is not an error: every setting has a default.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Apply environment overrides using the given lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty("GITHUB_TOKEN") {
            self.github_token = Some(token);
        }
        if let Some(key) = non_empty("GROQ_API_KEY") {
            self.insight_api_key = Some(key);
        }
        if let Some(url) = non_empty("REPOLENS_GITHUB_API_URL") {
            self.github_api_url = url;
        }
        if let Some(url) = non_empty("REPOLENS_INSIGHT_API_URL") {
            self.insight_api_url = url;
        }
        if let Some(model) = non_empty("REPOLENS_INSIGHT_MODEL") {
            self.insight_model = model;
        }
        if let Some(debug) = non_empty("REPOLENS_DEBUG") {
            self.debug = matches!(debug.to_lowercase().as_str(), "1" | "true" | "yes");
        }
    }

    /// GitHub base URL without a trailing slash.
    pub fn github_base(&self) -> &str {
        self.github_api_url.trim_end_matches('/')
    }

    /// Insight base URL without a trailing slash.
    pub fn insight_base(&self) -> &str {
        self.insight_api_url.trim_end_matches('/')
    }
}

// crates/triage/src/config/file.rs
// File-based configuration from ~/.triage/config.toml

use crate::llm::Provider;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default)]
pub struct TriageConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// LLM configuration section
#[derive(Debug, Deserialize, Default)]
pub struct LlmConfig {
    /// "openai" or "deepseek"
    pub provider: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

/// Logging configuration section
#[derive(Debug, Deserialize, Default)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "info" or "triage=debug"
    pub level: Option<String>,
}

impl TriageConfig {
    /// Load config from ~/.triage/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".triage")
            .join("config.toml")
    }

    /// Get the configured LLM provider
    pub fn provider(&self) -> Option<Provider> {
        self.llm.provider.as_deref().and_then(|s| {
            let provider = Provider::from_str(s);
            if provider.is_none() {
                warn!(provider = %s, "Unknown provider in config file, ignoring");
            }
            provider
        })
    }
}

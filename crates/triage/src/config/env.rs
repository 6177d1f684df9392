// crates/triage/src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use crate::llm::Provider;
use tracing::{debug, info, warn};

/// Substituted when no API key is configured; the first call then fails upstream
pub const PLACEHOLDER_API_KEY: &str = "default_key";

/// API keys loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    /// OpenAI API key (OPENAI_API_KEY or OPENAI_API_KEY_ENV_VAR)
    pub openai: Option<String>,
    /// DeepSeek API key (DEEPSEEK_API_KEY)
    pub deepseek: Option<String>,
}

impl ApiKeys {
    /// Load API keys from environment variables (single source of truth)
    pub fn from_env() -> Self {
        let openai =
            Self::read_key("OPENAI_API_KEY").or_else(|| Self::read_key("OPENAI_API_KEY_ENV_VAR"));
        let deepseek = Self::read_key("DEEPSEEK_API_KEY");

        let keys = Self { openai, deepseek };
        keys.log_status();
        keys
    }

    /// Read a single API key from environment, filtering empty values
    fn read_key(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|k| !k.trim().is_empty())
    }

    /// Key for a provider, if configured
    pub fn for_provider(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.openai.as_deref(),
            Provider::DeepSeek => self.deepseek.as_deref(),
        }
    }

    /// Key for a provider, or the placeholder when none is set.
    ///
    /// A missing key is not an error here: the completion API rejects the
    /// placeholder on first use and that surfaces as an analysis failure.
    pub fn key_or_placeholder(&self, provider: Provider) -> String {
        match self.for_provider(provider) {
            Some(key) => key.to_string(),
            None => {
                warn!(provider = %provider, "No API key configured, using placeholder");
                PLACEHOLDER_API_KEY.to_string()
            }
        }
    }

    /// Log which API keys are available (without exposing values)
    fn log_status(&self) {
        let mut available = Vec::new();
        if self.openai.is_some() {
            available.push("OpenAI");
        }
        if self.deepseek.is_some() {
            available.push("DeepSeek");
        }

        if available.is_empty() {
            warn!("No API keys configured - AI analysis will fail until one is set");
        } else {
            debug!(keys = ?available, "API keys loaded");
        }
    }
}

/// Everything read from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub api_keys: ApiKeys,
    /// TRIAGE_PROVIDER
    pub provider: Option<Provider>,
    /// TRIAGE_MODEL
    pub model: Option<String>,
    /// TRIAGE_BASE_URL
    pub base_url: Option<String>,
    /// TRIAGE_LOG_LEVEL
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load all configuration from environment variables
    pub fn load() -> Self {
        let provider = read_var("TRIAGE_PROVIDER").and_then(|p| {
            let parsed = Provider::from_str(&p);
            if parsed.is_none() {
                warn!(value = %p, "Unknown TRIAGE_PROVIDER, ignoring");
            }
            parsed
        });

        let config = Self {
            api_keys: ApiKeys::from_env(),
            provider,
            model: read_var("TRIAGE_MODEL"),
            base_url: read_var("TRIAGE_BASE_URL"),
            log_level: read_var("TRIAGE_LOG_LEVEL"),
        };

        if let Some(ref model) = config.model {
            info!(model = %model, "Model override from environment");
        }
        config
    }
}

/// Read a non-empty, trimmed environment variable
fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration validation result
#[derive(Debug)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Default for ConfigValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warning in &self.warnings {
                lines.push(format!("  - {}", warning));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

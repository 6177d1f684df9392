// crates/triage/src/config/mod.rs
// Configuration: environment + config file, resolved into one Settings value

pub mod env;
pub mod file;

pub use env::{ApiKeys, ConfigValidation, EnvConfig, PLACEHOLDER_API_KEY};
pub use file::TriageConfig;

use crate::llm::http_client::LlmHttpClient;
use crate::llm::{LlmClient, OpenAiClient, Provider};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Fully resolved settings. Precedence: env > config file > built-in defaults
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub provider: Provider,
    pub model: String,
    pub base_url: String,
    #[serde(skip)]
    pub api_key: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub log_level: String,
}

impl Settings {
    /// Resolve from the process environment and ~/.triage/config.toml
    pub fn load() -> Self {
        Self::resolve(EnvConfig::load(), TriageConfig::load())
    }

    /// Merge the two configuration sources
    pub fn resolve(env: EnvConfig, file: TriageConfig) -> Self {
        let provider = env
            .provider
            .or_else(|| file.provider())
            .unwrap_or(Provider::OpenAi);

        let model = env
            .model
            .or(file.llm.model)
            .unwrap_or_else(|| provider.default_model().to_string());

        let base_url = env
            .base_url
            .or(file.llm.base_url)
            .unwrap_or_else(|| provider.default_base_url().to_string());

        let log_level = env
            .log_level
            .or(file.logging.level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            provider,
            model,
            base_url,
            api_key: env.api_keys.key_or_placeholder(provider),
            request_timeout_secs: file
                .llm
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: file
                .llm
                .connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            log_level,
        }
    }

    /// Check the settings for problems that will surface at call time
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        if self.api_key == PLACEHOLDER_API_KEY {
            validation.add_warning(format!(
                "no API key set for {}; requests will be rejected",
                self.provider
            ));
        }
        if self.base_url.trim().is_empty() {
            validation.add_error("base URL cannot be empty");
        } else if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            validation.add_error(format!("base URL '{}' must start with http:// or https://", self.base_url));
        }
        if self.model.trim().is_empty() {
            validation.add_error("model cannot be empty");
        }
        if self.request_timeout_secs == 0 {
            validation.add_error("request_timeout_secs must be greater than 0");
        }
        if self.connect_timeout_secs == 0 {
            validation.add_error("connect_timeout_secs must be greater than 0");
        }

        validation
    }

    /// Build the process-wide completion client handle
    pub fn build_client(&self) -> Arc<dyn LlmClient> {
        let http = LlmHttpClient::new(
            Duration::from_secs(self.request_timeout_secs),
            Duration::from_secs(self.connect_timeout_secs),
        );

        info!(
            provider = %self.provider,
            model = %self.model,
            base_url = %self.base_url,
            "Completion client initialized"
        );

        Arc::new(
            OpenAiClient::with_model(self.api_key.clone(), self.model.clone())
                .for_provider(self.provider, self.base_url.clone())
                .with_http(http),
        )
    }
}

// crates/triage/src/llm/openai.rs
// OpenAI chat completions client (non-streaming, JSON mode capable)

use crate::llm::http_client::LlmHttpClient;
use crate::llm::openai_compat::{ChatRequest, parse_chat_response};
use crate::llm::provider::{CompletionRequest, LlmClient, Provider};
use crate::llm::ChatResult;
use anyhow::Result;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

/// Client for any OpenAI-compatible chat completions endpoint
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    model: String,
    provider: Provider,
    http: LlmHttpClient,
}

impl OpenAiClient {
    /// Create a new OpenAI client with the provider's default model
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, Provider::OpenAi.default_model().into())
    }

    /// Create a new OpenAI client with custom model
    pub fn with_model(api_key: String, model: String) -> Self {
        let http = LlmHttpClient::new(Duration::from_secs(300), Duration::from_secs(30));
        Self {
            api_key,
            base_url: Provider::OpenAi.default_base_url().into(),
            model,
            provider: Provider::OpenAi,
            http,
        }
    }

    /// Point the client at another OpenAI-compatible provider
    pub fn for_provider(mut self, provider: Provider, base_url: impl Into<String>) -> Self {
        self.provider = provider;
        self.base_url = base_url.into();
        self
    }

    /// Replace the HTTP layer (custom timeouts)
    pub fn with_http(mut self, http: LlmHttpClient) -> Self {
        self.http = http;
        self
    }

    /// Full chat completions URL
    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    #[instrument(skip(self, request), fields(request_id, model = %self.model, provider = %self.provider))]
    pub async fn complete(&self, request: CompletionRequest) -> Result<ChatResult> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", request_id.as_str());

        info!(
            request_id = %request_id,
            response_format = ?request.response_format,
            temperature = ?request.temperature,
            prompt_len = request.user.len(),
            "Starting chat completion request"
        );

        let chat_request = ChatRequest::new(&self.model, request.messages())
            .with_response_format(request.response_format)
            .with_temperature(request.temperature);

        let body = serde_json::to_string(&chat_request)?;
        debug!(request_id = %request_id, "Completion request: {}", body);

        let response_body = self
            .http
            .post_json(&request_id, &self.endpoint(), &self.api_key, body)
            .await?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        let result = parse_chat_response(&response_body, request_id.clone(), duration_ms)?;

        let provider_name = self.provider.to_string();
        if let Some(ref u) = result.usage {
            crate::llm::logging::log_usage(&request_id, &provider_name, u);
        }
        crate::llm::logging::log_completion(
            &request_id,
            &provider_name,
            duration_ms,
            result.content.as_ref().map(|c| c.len()).unwrap_or(0),
            result.finish_reason.as_deref(),
        );

        Ok(result)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn provider_type(&self) -> Provider {
        self.provider
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<ChatResult> {
        // Delegate to the inherent implementation
        OpenAiClient::complete(self, request).await
    }
}

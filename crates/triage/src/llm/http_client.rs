// crates/triage/src/llm/http_client.rs
// Shared HTTP client configuration for all LLM providers

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Shared HTTP client configuration for all LLM providers.
///
/// Requests are sent exactly once. Retry policy belongs to the caller.
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl LlmHttpClient {
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            request_timeout,
            connect_timeout,
        }
    }

    /// POST a JSON body with Bearer auth.
    /// Returns the response body as text on success
    pub async fn post_json(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                status = %status,
                error = %error_body,
                "Completion API returned an error status"
            );
            return Err(anyhow!("API error {}: {}", status, error_body));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn test_client_creation() {
        let client = LlmHttpClient::new(Duration::from_secs(10), Duration::from_secs(5));
        assert_eq!(client.request_timeout, Duration::from_secs(10));
        assert_eq!(client.connect_timeout, Duration::from_secs(5));
    }

    // ========================================================================
    // Request behavior (requires tokio + actual HTTP)
    // ========================================================================

    #[tokio::test]
    async fn test_post_json_connection_refused() {
        let client = LlmHttpClient::new(Duration::from_millis(500), Duration::from_millis(200));
        let result = client
            .post_json("test", "http://127.0.0.1:1/chat/completions", "key", "{}".into())
            .await;
        let err = result.unwrap_err();
        assert!(
            format!("{:#}", err).contains("failed"),
            "Expected connection error, got: {:#}",
            err
        );
    }
}

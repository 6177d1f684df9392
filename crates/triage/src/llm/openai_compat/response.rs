// crates/triage/src/llm/openai_compat/response.rs
// OpenAI-compatible chat response parsing

use crate::llm::{ChatResult, Usage};
use anyhow::{Result, anyhow};
use serde::Deserialize;

/// Non-streaming chat response (OpenAI-compatible format)
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ResponseChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

/// Parse an OpenAI-compatible chat response into a ChatResult
pub fn parse_chat_response(
    response_body: &str,
    request_id: impl Into<String>,
    duration_ms: u64,
) -> Result<ChatResult> {
    let data: ChatResponse = serde_json::from_str(response_body)
        .map_err(|e| anyhow!("Failed to parse chat response: {}", e))?;

    let choice = data.choices.into_iter().next();
    let (content, finish_reason) = match choice {
        Some(c) => {
            if let Some(refusal) = c.message.refusal {
                return Err(anyhow!("Model refused the request: {}", refusal));
            }
            (c.message.content, c.finish_reason)
        }
        None => (None, None),
    };

    Ok(ChatResult {
        request_id: request_id.into(),
        content,
        finish_reason,
        usage: data.usage,
        duration_ms,
    })
}

// crates/triage/src/llm/types.rs
// Wire-level message and result types shared by all completion clients

use serde::{Deserialize, Serialize};

/// Message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String, // "system" | "user" | "assistant"
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Usage statistics
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Result of a chat completion
#[derive(Debug, Clone)]
pub struct ChatResult {
    pub request_id: String,
    pub content: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<Usage>,
    pub duration_ms: u64,
}

impl ChatResult {
    /// Convenience constructor for a completion that produced text
    pub fn from_content(request_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            content: Some(content.into()),
            finish_reason: None,
            usage: None,
            duration_ms: 0,
        }
    }
}

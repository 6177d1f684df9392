// crates/triage/src/llm/openai_compat/request.rs
// OpenAI-compatible chat request builder

use crate::llm::{Message, ResponseFormat};
use serde::Serialize;

/// `response_format` object as the chat completions API expects it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseFormatSpec {
    #[serde(rename = "type")]
    pub format_type: &'static str, // "text" | "json_object"
}

impl From<ResponseFormat> for ResponseFormatSpec {
    fn from(format: ResponseFormat) -> Self {
        let format_type = match format {
            ResponseFormat::Text => "text",
            ResponseFormat::JsonObject => "json_object",
        };
        Self { format_type }
    }
}

/// Chat completion request (OpenAI-compatible format)
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormatSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Create a new chat request with required fields
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            response_format: None,
            temperature: None,
        }
    }

    /// Constrain the output format; plain text is the API default and is omitted
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = match format {
            ResponseFormat::Text => None,
            ResponseFormat::JsonObject => Some(format.into()),
        };
        self
    }

    /// Set temperature (0.0 to 2.0)
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

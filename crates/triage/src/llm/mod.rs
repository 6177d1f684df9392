// crates/triage/src/llm/mod.rs
// LLM completion clients (OpenAI and OpenAI-compatible providers)

pub mod http_client;
pub mod logging;
mod openai;
pub mod openai_compat;
mod prompt;
mod provider;
mod types;

pub use openai::OpenAiClient;
pub use prompt::PromptBuilder;
pub use provider::{CompletionRequest, LlmClient, Provider, ResponseFormat};
pub use types::{ChatResult, Message, Usage};

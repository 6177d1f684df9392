// crates/triage/src/llm/openai_compat/mod.rs
// Shared OpenAI-compatible request/response handling for OpenAI, DeepSeek, etc.

mod request;
mod response;

pub use request::{ChatRequest, ResponseFormatSpec};
pub use response::parse_chat_response;

// crates/triage/src/llm/prompt.rs
// PromptBuilder for consistent single-turn prompt construction

use super::CompletionRequest;

/// Shown to the model after every JSON-mode instruction block
const JSON_ONLY_FOOTER: &str = "Respond with a single JSON object and nothing else.";

/// PromptBuilder assembles a request from two layers:
/// 1. Role instructions (system persona)
/// 2. Dynamic user content, made of labelled sections and an optional
///    JSON shape the answer must follow
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    role_instructions: String,
    preamble: String,
    sections: Vec<(String, String)>,
    fenced: Option<(String, String)>,
    json_shape: Option<String>,
}

impl PromptBuilder {
    /// Create a new PromptBuilder with role-specific instructions
    pub fn new(role_instructions: impl Into<String>) -> Self {
        Self {
            role_instructions: role_instructions.into(),
            preamble: String::new(),
            sections: Vec::new(),
            fenced: None,
            json_shape: None,
        }
    }

    /// Opening sentence of the user message
    pub fn preamble(mut self, text: impl Into<String>) -> Self {
        self.preamble = text.into();
        self
    }

    /// Add a `Label: value` line
    pub fn section(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.sections.push((label.into(), value.into()));
        self
    }

    /// Add a section only when a non-blank value is present
    pub fn optional_section(self, label: impl Into<String>, value: Option<&str>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => self.section(label, v),
            None => self,
        }
    }

    /// Embed a snippet in a fenced code block tagged with its language
    pub fn code_block(mut self, language: impl Into<String>, code: impl Into<String>) -> Self {
        self.fenced = Some((language.into(), code.into()));
        self
    }

    /// Describe the JSON object the model must return
    pub fn json_shape(mut self, shape: impl Into<String>) -> Self {
        self.json_shape = Some(shape.into());
        self
    }

    /// Build the system prompt
    pub fn build_system_prompt(&self) -> String {
        self.role_instructions.clone()
    }

    /// Build the user prompt
    pub fn build_user_prompt(&self) -> String {
        let mut prompt = String::new();

        if !self.preamble.is_empty() {
            prompt.push_str(&self.preamble);
            prompt.push_str("\n\n");
        }

        for (label, value) in &self.sections {
            prompt.push_str(&format!("{}: {}\n", label, value));
        }

        if let Some((language, code)) = &self.fenced {
            prompt.push_str(&format!("Code:\n```{}\n{}\n```\n", language, code));
        }

        if let Some(shape) = &self.json_shape {
            prompt.push_str("\nPlease provide a JSON response with the following structure:\n");
            prompt.push_str(shape.trim());
            prompt.push_str("\n\n");
            prompt.push_str(JSON_ONLY_FOOTER);
        }

        prompt.trim_end().to_string()
    }

    /// Build a completion request; JSON mode is enabled when a shape was given
    pub fn build_request(&self, temperature: f32) -> CompletionRequest {
        let request = CompletionRequest::new(self.build_system_prompt(), self.build_user_prompt())
            .with_temperature(temperature);

        if self.json_shape.is_some() {
            request.json_object()
        } else {
            request
        }
    }
}

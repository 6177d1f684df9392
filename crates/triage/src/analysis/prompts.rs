// crates/triage/src/analysis/prompts.rs
// Instruction templates for the three analysis requests

use crate::llm::{CompletionRequest, PromptBuilder};

/// Low temperature favors literal compliance with the requested shape
pub const CLASSIFICATION_TEMPERATURE: f32 = 0.3;
/// Suggestions are open-ended ideation
pub const IDEATION_TEMPERATURE: f32 = 0.4;

pub const BUG_ANALYST_ROLE: &str = "You are an expert software engineer specializing in bug analysis and debugging. \
Provide accurate, actionable insights based on the bug report.";

pub const CODE_REVIEWER_ROLE: &str = "You are an expert software engineer specializing in code review and analysis. \
Provide constructive, actionable feedback to improve code quality.";

pub const SUGGESTION_ROLE: &str = "You are an expert software engineer providing code improvement suggestions. \
Focus on practical, implementable recommendations.";

const BUG_SHAPE: &str = r#"
{
  "category": "string (e.g., 'UI/UX', 'Performance', 'Logic', 'Security', 'Compatibility')",
  "severity": "string (e.g., 'Low', 'Medium', 'High', 'Critical')",
  "possibleCauses": ["array of possible root causes"],
  "suggestedFixes": ["array of specific fix recommendations"],
  "confidence": number (0-1, confidence in the analysis)
}
"#;

const CODE_SHAPE: &str = r#"
{
  "qualityScore": number (0-100, overall code quality score),
  "issues": [
    {
      "type": "string (e.g., 'Performance', 'Maintainability', 'Security', 'Best Practices')",
      "severity": "string (e.g., 'Low', 'Medium', 'High')",
      "line": number (line number, 0 if general),
      "message": "string (description of the issue)",
      "suggestion": "string (specific fix recommendation)"
    }
  ],
  "suggestions": ["array of general improvement suggestions"],
  "metrics": {
    "complexity": number (1-10, code complexity score),
    "maintainability": number (1-10, maintainability score),
    "testability": number (1-10, testability score)
  }
}
"#;

const SUGGESTION_SHAPE: &str = r#"
{
  "suggestions": ["array of specific, actionable code improvement suggestions"]
}
"#;

/// Bug report triage. A blank stack trace is left out entirely.
pub fn bug_analysis(title: &str, description: &str, stack_trace: Option<&str>) -> CompletionRequest {
    PromptBuilder::new(BUG_ANALYST_ROLE)
        .preamble("As a senior software engineer, analyze the following bug report and provide structured insights:")
        .section("Title", title)
        .section("Description", description)
        .optional_section("Stack Trace", stack_trace)
        .json_shape(BUG_SHAPE)
        .build_request(CLASSIFICATION_TEMPERATURE)
}

/// Review of one source file
pub fn code_analysis(code: &str, language: &str, file_path: &str) -> CompletionRequest {
    PromptBuilder::new(CODE_REVIEWER_ROLE)
        .preamble(format!(
            "As a senior software engineer, analyze the following {} code and provide structured feedback:",
            language
        ))
        .section("File", file_path)
        .code_block(language, code)
        .json_shape(CODE_SHAPE)
        .build_request(CLASSIFICATION_TEMPERATURE)
}

/// Open-ended improvement ideas
pub fn code_suggestions(context: &str, language: &str, requirements: &str) -> CompletionRequest {
    PromptBuilder::new(SUGGESTION_ROLE)
        .preamble("As a senior software engineer, provide code improvement suggestions based on the following context:")
        .section("Language", language)
        .section("Context", context)
        .section("Requirements", requirements)
        .json_shape(SUGGESTION_SHAPE)
        .build_request(IDEATION_TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ResponseFormat;

    #[test]
    fn test_bug_prompt_contents() {
        let req = bug_analysis("Login hangs", "Spinner never stops", Some("at auth.ts:42"));
        assert_eq!(req.system, BUG_ANALYST_ROLE);
        assert_eq!(req.response_format, ResponseFormat::JsonObject);
        assert_eq!(req.temperature, Some(0.3));
        assert!(req.user.contains("Title: Login hangs"));
        assert!(req.user.contains("Description: Spinner never stops"));
        assert!(req.user.contains("Stack Trace: at auth.ts:42"));
        for field in ["category", "severity", "possibleCauses", "suggestedFixes", "confidence"] {
            assert!(req.user.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn test_bug_prompt_omits_missing_stack_trace() {
        for trace in [None, Some(""), Some("  \n")] {
            let req = bug_analysis("t", "d", trace);
            assert!(!req.user.contains("Stack Trace"));
        }
    }

    #[test]
    fn test_bug_prompt_tolerates_empty_inputs() {
        let req = bug_analysis("", "", None);
        assert!(req.user.contains("Title: \n"));
        assert!(req.user.contains("Description: \n"));
    }

    #[test]
    fn test_bug_prompt_is_deterministic() {
        let a = bug_analysis("t", "d", Some("s"));
        let b = bug_analysis("t", "d", Some("s"));
        assert_eq!(a.user, b.user);
        assert_eq!(a.system, b.system);
    }

    #[test]
    fn test_code_prompt_contents() {
        let req = code_analysis("def f():\n    pass", "python", "src/app.py");
        assert_eq!(req.system, CODE_REVIEWER_ROLE);
        assert_eq!(req.temperature, Some(0.3));
        assert!(req.user.contains("analyze the following python code"));
        assert!(req.user.contains("File: src/app.py"));
        assert!(req.user.contains("```python\ndef f():\n    pass\n```"));
        for field in ["qualityScore", "issues", "suggestions", "metrics", "maintainability"] {
            assert!(req.user.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn test_suggestion_prompt_contents() {
        let req = code_suggestions("nested loops over users", "rust", "O(n) lookup");
        assert_eq!(req.system, SUGGESTION_ROLE);
        assert_eq!(req.temperature, Some(0.4));
        assert_eq!(req.response_format, ResponseFormat::JsonObject);
        assert!(req.user.contains("Language: rust"));
        assert!(req.user.contains("Context: nested loops over users"));
        assert!(req.user.contains("Requirements: O(n) lookup"));
    }
}

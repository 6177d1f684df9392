// crates/triage/src/analysis/schema.rs
// Parse-then-coerce: one schema with defaults per result shape.
//
// Only a response that is not a JSON object is rejected. Inside the object,
// missing fields take their default, numbers are clamped to their declared
// range and values of the wrong type are replaced or dropped.

use crate::error::AnalysisFailure;
use serde_json::{Map, Value};
use std::ops::RangeInclusive;
use triage_types::{
    BugAnalysis, CodeAnalysis, CodeIssue, CodeMetrics, SuggestionList, CONFIDENCE_RANGE,
    DEFAULT_CATEGORY, DEFAULT_CONFIDENCE, DEFAULT_ISSUE_TYPE, DEFAULT_METRIC,
    DEFAULT_QUALITY_SCORE, DEFAULT_SEVERITY, METRIC_RANGE, QUALITY_SCORE_RANGE,
};

pub type JsonObject = Map<String, Value>;

/// A result shape that can be built from any JSON object
pub trait Schema: Sized {
    fn coerce(object: &JsonObject) -> Self;
}

/// Parse raw model output and coerce it into `T`
pub fn normalize<T: Schema>(raw: &str) -> Result<T, AnalysisFailure> {
    let object = parse_object(raw)?;
    Ok(T::coerce(&object))
}

/// Parse raw model output, requiring a top-level JSON object
pub fn parse_object(raw: &str) -> Result<JsonObject, AnalysisFailure> {
    let value: Value = serde_json::from_str(strip_code_fences(raw))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AnalysisFailure::NotAnObject(json_type_name(&other))),
    }
}

/// Strip markdown code fences some models add even in JSON mode.
fn strip_code_fences(s: &str) -> &str {
    let trimmed = s.trim();

    // Try ```json ... ```
    if let Some(rest) = trimmed.strip_prefix("```json") {
        if let Some(json) = rest.strip_suffix("```") {
            return json.trim();
        }
    }
    // Try ``` ... ```
    if let Some(rest) = trimmed.strip_prefix("```") {
        if let Some(json) = rest.strip_suffix("```") {
            return json.trim();
        }
    }

    trimmed
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ═══════════════════════════════════════
// FIELD READERS
// ═══════════════════════════════════════

/// String field, or `default` when missing or not a string
pub fn text_or(object: &JsonObject, key: &str, default: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

/// Numeric reading of a value. Numeric strings such as "0.8" count.
///
/// Magnitudes beyond f64 read as infinity so they clamp to the range end.
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        // as_f64 rejects overflow; the literal text still parses to +/-inf
        Value::Number(n) => n.as_f64().or_else(|| n.to_string().parse::<f64>().ok()),
        Value::String(s) => parse_numeric_text(s),
        _ => None,
    };
    n.filter(|n| !n.is_nan())
}

/// Rust also parses "inf" and "NaN"; only digit-bearing text is a number here
fn parse_numeric_text(s: &str) -> Option<f64> {
    let s = s.trim();
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Clamp to a closed range
pub fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

/// Numeric field clamped to `range`, or `default` when missing or non-numeric
pub fn number_in(object: &JsonObject, key: &str, range: &RangeInclusive<f64>, default: f64) -> f64 {
    object
        .get(key)
        .and_then(as_number)
        .map(|n| clamp(n, range))
        .unwrap_or(default)
}

/// Array of strings; non-string entries are dropped, order is kept
pub fn string_list(object: &JsonObject, key: &str) -> Vec<String> {
    match object.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Line number >= 0; fractional values round down, anything unusable is 0
pub fn line_number(object: &JsonObject, key: &str) -> u32 {
    object
        .get(key)
        .and_then(as_number)
        .map(|n| n.floor().clamp(0.0, u32::MAX as f64) as u32)
        .unwrap_or(0)
}

// ═══════════════════════════════════════
// SCHEMAS
// ═══════════════════════════════════════

impl Schema for BugAnalysis {
    fn coerce(object: &JsonObject) -> Self {
        Self {
            category: text_or(object, "category", DEFAULT_CATEGORY),
            severity: text_or(object, "severity", DEFAULT_SEVERITY),
            possible_causes: string_list(object, "possibleCauses"),
            suggested_fixes: string_list(object, "suggestedFixes"),
            confidence: number_in(object, "confidence", &CONFIDENCE_RANGE, DEFAULT_CONFIDENCE),
        }
    }
}

impl Schema for CodeIssue {
    fn coerce(object: &JsonObject) -> Self {
        Self {
            issue_type: text_or(object, "type", DEFAULT_ISSUE_TYPE),
            severity: text_or(object, "severity", DEFAULT_SEVERITY),
            line: line_number(object, "line"),
            message: text_or(object, "message", ""),
            suggestion: text_or(object, "suggestion", ""),
        }
    }
}

impl Schema for CodeMetrics {
    fn coerce(object: &JsonObject) -> Self {
        Self {
            complexity: number_in(object, "complexity", &METRIC_RANGE, DEFAULT_METRIC),
            maintainability: number_in(object, "maintainability", &METRIC_RANGE, DEFAULT_METRIC),
            testability: number_in(object, "testability", &METRIC_RANGE, DEFAULT_METRIC),
        }
    }
}

impl Schema for CodeAnalysis {
    fn coerce(object: &JsonObject) -> Self {
        let issues = match object.get("issues") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_object)
                .map(CodeIssue::coerce)
                .collect(),
            _ => Vec::new(),
        };

        let metrics = match object.get("metrics") {
            Some(Value::Object(m)) => CodeMetrics::coerce(m),
            _ => CodeMetrics::default(),
        };

        Self {
            quality_score: number_in(
                object,
                "qualityScore",
                &QUALITY_SCORE_RANGE,
                DEFAULT_QUALITY_SCORE,
            ),
            issues,
            suggestions: string_list(object, "suggestions"),
            metrics,
        }
    }
}

impl Schema for SuggestionList {
    fn coerce(object: &JsonObject) -> Self {
        Self {
            suggestions: string_list(object, "suggestions"),
        }
    }
}

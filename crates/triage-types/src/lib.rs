// crates/triage-types/src/lib.rs
// Shared types for triage (native + WASM compatible)
// No native-only dependencies allowed here

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ═══════════════════════════════════════
// RANGES & DEFAULTS
// ═══════════════════════════════════════

/// Allowed range for `BugAnalysis::confidence`
pub const CONFIDENCE_RANGE: RangeInclusive<f64> = 0.0..=1.0;
/// Allowed range for `CodeAnalysis::quality_score`
pub const QUALITY_SCORE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// Allowed range for every `CodeMetrics` field
pub const METRIC_RANGE: RangeInclusive<f64> = 1.0..=10.0;

pub const DEFAULT_CATEGORY: &str = "Unknown";
pub const DEFAULT_SEVERITY: &str = "Medium";
pub const DEFAULT_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_QUALITY_SCORE: f64 = 50.0;
pub const DEFAULT_METRIC: f64 = 5.0;
pub const DEFAULT_ISSUE_TYPE: &str = "General";

// ═══════════════════════════════════════
// BUG ANALYSIS
// ═══════════════════════════════════════

/// Structured insight attached to a bug report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugAnalysis {
    /// Free-form label, e.g. "Performance" or "UI/UX"
    pub category: String,
    /// Free-form label, e.g. "Low" or "Critical"
    pub severity: String,
    pub possible_causes: Vec<String>,
    pub suggested_fixes: Vec<String>,
    /// Always within `CONFIDENCE_RANGE`
    pub confidence: f64,
}

impl Default for BugAnalysis {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            severity: DEFAULT_SEVERITY.to_string(),
            possible_causes: Vec::new(),
            suggested_fixes: Vec::new(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

// ═══════════════════════════════════════
// CODE ANALYSIS
// ═══════════════════════════════════════

/// Review of a single source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnalysis {
    /// Always within `QUALITY_SCORE_RANGE`
    pub quality_score: f64,
    pub issues: Vec<CodeIssue>,
    pub suggestions: Vec<String>,
    pub metrics: CodeMetrics,
}

impl Default for CodeAnalysis {
    fn default() -> Self {
        Self {
            quality_score: DEFAULT_QUALITY_SCORE,
            issues: Vec::new(),
            suggestions: Vec::new(),
            metrics: CodeMetrics::default(),
        }
    }
}

/// One finding inside a code review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub severity: String,
    /// 1-based line number, 0 for file-wide issues
    pub line: u32,
    pub message: String,
    pub suggestion: String,
}

impl Default for CodeIssue {
    fn default() -> Self {
        Self {
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
            severity: DEFAULT_SEVERITY.to_string(),
            line: 0,
            message: String::new(),
            suggestion: String::new(),
        }
    }
}

impl CodeIssue {
    /// True when the issue is not tied to a specific line
    pub fn is_general(&self) -> bool {
        self.line == 0
    }
}

/// Scores on a 1-10 scale, each within `METRIC_RANGE`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeMetrics {
    pub complexity: f64,
    pub maintainability: f64,
    pub testability: f64,
}

impl Default for CodeMetrics {
    fn default() -> Self {
        Self {
            complexity: DEFAULT_METRIC,
            maintainability: DEFAULT_METRIC,
            testability: DEFAULT_METRIC,
        }
    }
}

// ═══════════════════════════════════════
// SUGGESTIONS
// ═══════════════════════════════════════

/// Envelope for free-form improvement suggestions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionList {
    pub suggestions: Vec<String>,
}

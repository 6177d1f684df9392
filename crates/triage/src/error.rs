// crates/triage/src/error.rs
// Error types for the analysis operations

use std::fmt;
use thiserror::Error;

/// Which analysis request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisOperation {
    BugAnalysis,
    CodeAnalysis,
    SuggestionGeneration,
}

impl AnalysisOperation {
    /// Short identifier used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BugAnalysis => "bug_analysis",
            Self::CodeAnalysis => "code_analysis",
            Self::SuggestionGeneration => "suggestion_generation",
        }
    }
}

impl fmt::Display for AnalysisOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BugAnalysis => write!(f, "analyze bug"),
            Self::CodeAnalysis => write!(f, "analyze code"),
            Self::SuggestionGeneration => write!(f, "generate code suggestions"),
        }
    }
}

/// Underlying cause of an analysis failure
#[derive(Error, Debug)]
pub enum AnalysisFailure {
    /// Transport failure, non-2xx status, or an unreadable provider envelope
    #[error("completion request failed: {0}")]
    Completion(String),

    #[error("completion returned no content")]
    EmptyResponse,

    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("response is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}

/// The single error raised by the analysis operations
#[derive(Error, Debug)]
#[error("failed to {operation} with AI: {source}")]
pub struct AnalysisError {
    pub operation: AnalysisOperation,
    #[source]
    pub source: AnalysisFailure,
}

impl AnalysisError {
    pub fn new(operation: AnalysisOperation, source: AnalysisFailure) -> Self {
        Self { operation, source }
    }

    /// Wrap a transport-level error from the completion client
    pub fn completion(operation: AnalysisOperation, err: &anyhow::Error) -> Self {
        // {:#} keeps the whole context chain on one line
        Self::new(operation, AnalysisFailure::Completion(format!("{:#}", err)))
    }
}

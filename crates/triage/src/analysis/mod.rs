// crates/triage/src/analysis/mod.rs
// AI analysis: prompt -> constrained completion -> JSON parse -> default/clamp

mod intake;
pub mod prompts;
pub mod schema;

pub use intake::{BugIntake, IntakeAnalysis};
pub use schema::{Schema, normalize};

use crate::error::{AnalysisError, AnalysisFailure, AnalysisOperation};
use crate::llm::{CompletionRequest, LlmClient};
use std::sync::Arc;
use tracing::{debug, info, warn};
use triage_types::{BugAnalysis, CodeAnalysis, SuggestionList};

/// Turns free-text model output into validated, range-safe results.
///
/// Holds no state besides the injected completion client, so one instance
/// can serve any number of concurrent callers. Each call is sent once; a
/// failed call or unparseable response is reported, never retried or
/// replaced by a made-up result.
#[derive(Clone)]
pub struct Analyzer {
    client: Arc<dyn LlmClient>,
}

impl Analyzer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Classify a bug report and propose causes and fixes
    pub async fn analyze_bug(
        &self,
        title: &str,
        description: &str,
        stack_trace: Option<&str>,
    ) -> Result<BugAnalysis, AnalysisError> {
        let request = prompts::bug_analysis(title, description, stack_trace);
        let analysis: BugAnalysis = self.run(AnalysisOperation::BugAnalysis, request).await?;

        info!(
            category = %analysis.category,
            severity = %analysis.severity,
            confidence = analysis.confidence,
            causes = analysis.possible_causes.len(),
            "Bug analysis complete"
        );
        Ok(analysis)
    }

    /// Review a source snippet for quality issues
    pub async fn analyze_code(
        &self,
        code: &str,
        language: &str,
        file_path: &str,
    ) -> Result<CodeAnalysis, AnalysisError> {
        let request = prompts::code_analysis(code, language, file_path);
        let analysis: CodeAnalysis = self.run(AnalysisOperation::CodeAnalysis, request).await?;

        info!(
            file_path = %file_path,
            quality_score = analysis.quality_score,
            issues = analysis.issues.len(),
            "Code analysis complete"
        );
        Ok(analysis)
    }

    /// Generate improvement suggestions, order preserved
    pub async fn generate_suggestions(
        &self,
        context: &str,
        language: &str,
        requirements: &str,
    ) -> Result<Vec<String>, AnalysisError> {
        let request = prompts::code_suggestions(context, language, requirements);
        let list: SuggestionList = self
            .run(AnalysisOperation::SuggestionGeneration, request)
            .await?;

        info!(count = list.suggestions.len(), "Suggestions generated");
        Ok(list.suggestions)
    }

    /// Shared pipeline for every operation
    async fn run<T: Schema>(
        &self,
        operation: AnalysisOperation,
        request: CompletionRequest,
    ) -> Result<T, AnalysisError> {
        debug!(
            operation = operation.as_str(),
            model = %self.client.model_name(),
            "Sending analysis request"
        );

        let result = self.client.complete(request).await.map_err(|e| {
            warn!(operation = operation.as_str(), error = %e, "Completion call failed");
            AnalysisError::completion(operation, &e)
        })?;

        let content = result
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                warn!(
                    operation = operation.as_str(),
                    request_id = %result.request_id,
                    "Completion returned no content"
                );
                AnalysisError::new(operation, AnalysisFailure::EmptyResponse)
            })?;

        normalize::<T>(&content).map_err(|failure| {
            warn!(
                operation = operation.as_str(),
                request_id = %result.request_id,
                error = %failure,
                content_preview = %preview(&content),
                "Unusable analysis response"
            );
            AnalysisError::new(operation, failure)
        })
    }
}

/// First 200 chars of a response, for logs
fn preview(content: &str) -> String {
    content.chars().take(200).collect()
}

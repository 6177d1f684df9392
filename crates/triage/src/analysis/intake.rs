// crates/triage/src/analysis/intake.rs
// Bug intake side of the analysis boundary.
//
// Creating a bug never depends on analysis: the record is persisted first,
// then analysis runs as a separate step whose failure only leaves the
// analysis empty.

use super::Analyzer;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;
use triage_types::BugAnalysis;

/// Outcome of the optional analysis step
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeAnalysis {
    Analyzed(BugAnalysis),
    /// Analysis failed or timed out; the bug stays without one
    Skipped { reason: String },
}

impl IntakeAnalysis {
    pub fn into_option(self) -> Option<BugAnalysis> {
        match self {
            Self::Analyzed(analysis) => Some(analysis),
            Self::Skipped { .. } => None,
        }
    }

    pub fn is_analyzed(&self) -> bool {
        matches!(self, Self::Analyzed(_))
    }
}

/// Degradable bug analysis for the intake flow
#[derive(Clone)]
pub struct BugIntake {
    analyzer: Analyzer,
    deadline: Option<Duration>,
}

impl BugIntake {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            deadline: None,
        }
    }

    /// Give up on analysis after `deadline`
    pub fn with_timeout(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Analyze a freshly created bug. Never fails.
    pub async fn analyze_for_intake(
        &self,
        title: &str,
        description: &str,
        stack_trace: Option<&str>,
    ) -> IntakeAnalysis {
        let call = self.analyzer.analyze_bug(title, description, stack_trace);

        let outcome = match self.deadline {
            Some(deadline) => match timeout(deadline, call).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!(timeout_ms = deadline.as_millis() as u64, "Bug analysis timed out, continuing without it");
                    return IntakeAnalysis::Skipped {
                        reason: format!("analysis timed out after {:?}", deadline),
                    };
                }
            },
            None => call.await,
        };

        match outcome {
            Ok(analysis) => IntakeAnalysis::Analyzed(analysis),
            Err(e) => {
                warn!(error = %e, "Bug analysis failed, continuing without it");
                IntakeAnalysis::Skipped {
                    reason: e.to_string(),
                }
            }
        }
    }
}

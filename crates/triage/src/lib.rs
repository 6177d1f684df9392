// crates/triage/src/lib.rs
// triage - AI-assisted bug and code analysis with validated results

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;

pub use analysis::{Analyzer, BugIntake, IntakeAnalysis};
pub use error::{AnalysisError, AnalysisFailure, AnalysisOperation};
pub use triage_types as types;

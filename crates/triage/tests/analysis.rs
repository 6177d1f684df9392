//! Integration tests for the analysis operations
//!
//! These run the full pipeline (prompt, completion call, parse, coerce)
//! against a scripted completion client.


use std::time::Duration;
use test_utils::{FakeCompletion, Reply, analyzer_with};
use triage::llm::ResponseFormat;
use triage::types::{BugAnalysis, CodeAnalysis, CodeMetrics};
use triage::{AnalysisFailure, AnalysisOperation, BugIntake, IntakeAnalysis};

// ============================================================================
// analyze_bug
// ============================================================================

#[tokio::test]
async fn test_analyze_bug_well_formed_response() {
    let fake = FakeCompletion::replying(
        r#"{
            "category": "Performance",
            "severity": "High",
            "possibleCauses": ["unbounded cache", "N+1 queries"],
            "suggestedFixes": ["add an eviction policy"],
            "confidence": 0.8
        }"#,
    );
    let analyzer = analyzer_with(&fake);

    let analysis = analyzer
        .analyze_bug("Dashboard slow", "Takes 20s to load", Some("at render (app.js:10)"))
        .await
        .unwrap();

    assert_eq!(
        analysis,
        BugAnalysis {
            category: "Performance".into(),
            severity: "High".into(),
            possible_causes: vec!["unbounded cache".into(), "N+1 queries".into()],
            suggested_fixes: vec!["add an eviction policy".into()],
            confidence: 0.8,
        }
    );
}

#[tokio::test]
async fn test_analyze_bug_request_shape() {
    let fake = FakeCompletion::replying("{}");
    let analyzer = analyzer_with(&fake);

    analyzer
        .analyze_bug("Crash on save", "NPE when saving", None)
        .await
        .unwrap();

    let requests = fake.requests().await;
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert!(req.system.contains("specializing in bug analysis"));
    assert_eq!(req.response_format, ResponseFormat::JsonObject);
    assert_eq!(req.temperature, Some(0.3));
    assert!(req.user.contains("Title: Crash on save"));
    assert!(!req.user.contains("Stack Trace"));
}

#[tokio::test]
async fn test_analyze_bug_confidence_clamped() {
    for (raw, expected) in [("1.7", 1.0), ("-0.2", 0.0), ("0.42", 0.42), ("\"high\"", 0.5)] {
        let fake = FakeCompletion::replying(&format!(r#"{{"confidence": {}}}"#, raw));
        let analysis = analyzer_with(&fake)
            .analyze_bug("t", "d", None)
            .await
            .unwrap();
        assert_eq!(analysis.confidence, expected, "input {}", raw);
    }
}

#[tokio::test]
async fn test_analyze_bug_empty_object_defaults() {
    let fake = FakeCompletion::replying("{}");
    let analysis = analyzer_with(&fake)
        .analyze_bug("", "", None)
        .await
        .unwrap();

    assert_eq!(analysis.category, "Unknown");
    assert_eq!(analysis.severity, "Medium");
    assert!(analysis.possible_causes.is_empty());
    assert!(analysis.suggested_fixes.is_empty());
    assert_eq!(analysis.confidence, 0.5);
}

#[tokio::test]
async fn test_analyze_bug_non_json_fails() {
    let fake = FakeCompletion::replying("I think this is a performance bug.");
    let err = analyzer_with(&fake)
        .analyze_bug("t", "d", None)
        .await
        .unwrap_err();

    assert_eq!(err.operation, AnalysisOperation::BugAnalysis);
    assert!(matches!(err.source, AnalysisFailure::InvalidJson(_)));
}

#[tokio::test]
async fn test_analyze_bug_call_failure_not_retried() {
    let fake = FakeCompletion::new(vec![
        Reply::Fail("API error 429 Too Many Requests".into()),
        Reply::Content("{}".into()),
    ]);
    let err = analyzer_with(&fake)
        .analyze_bug("t", "d", None)
        .await
        .unwrap_err();

    assert_eq!(err.operation, AnalysisOperation::BugAnalysis);
    assert!(matches!(err.source, AnalysisFailure::Completion(_)));
    assert!(err.to_string().contains("429"));
    assert_eq!(fake.call_count().await, 1);
}

#[tokio::test]
async fn test_analyze_bug_missing_content_fails() {
    let fake = FakeCompletion::new(vec![Reply::NoContent]);
    let err = analyzer_with(&fake)
        .analyze_bug("t", "d", None)
        .await
        .unwrap_err();
    assert!(matches!(err.source, AnalysisFailure::EmptyResponse));
}

// ============================================================================
// analyze_code
// ============================================================================

#[tokio::test]
async fn test_analyze_code_clamps_scores() {
    let fake = FakeCompletion::replying(
        r#"{
            "qualityScore": 150,
            "issues": [{"type": "Performance", "severity": "Low", "message": "copy in loop", "suggestion": "borrow"}],
            "suggestions": ["add tests"],
            "metrics": {"complexity": 15, "maintainability": -2, "testability": 7}
        }"#,
    );
    let analysis = analyzer_with(&fake)
        .analyze_code("fn main() {}", "rust", "src/main.rs")
        .await
        .unwrap();

    assert_eq!(analysis.quality_score, 100.0);
    assert_eq!(
        analysis.metrics,
        CodeMetrics {
            complexity: 10.0,
            maintainability: 1.0,
            testability: 7.0,
        }
    );
    assert_eq!(analysis.issues.len(), 1);
    assert_eq!(analysis.issues[0].line, 0);
    assert_eq!(analysis.suggestions, vec!["add tests"]);
}

#[tokio::test]
async fn test_analyze_code_negative_score() {
    let fake = FakeCompletion::replying(r#"{"qualityScore": -10}"#);
    let analysis = analyzer_with(&fake)
        .analyze_code("x", "python", "a.py")
        .await
        .unwrap();
    assert_eq!(analysis.quality_score, 0.0);
}

#[tokio::test]
async fn test_analyze_code_empty_object_defaults() {
    let fake = FakeCompletion::replying("{}");
    let analysis = analyzer_with(&fake)
        .analyze_code("x", "go", "main.go")
        .await
        .unwrap();
    assert_eq!(analysis, CodeAnalysis::default());
}

#[tokio::test]
async fn test_analyze_code_request_embeds_snippet() {
    let fake = FakeCompletion::replying("{}");
    analyzer_with(&fake)
        .analyze_code("print('hi')", "python", "scripts/hello.py")
        .await
        .unwrap();

    let req = &fake.requests().await[0];
    assert!(req.system.contains("code review"));
    assert_eq!(req.temperature, Some(0.3));
    assert!(req.user.contains("File: scripts/hello.py"));
    assert!(req.user.contains("```python\nprint('hi')\n```"));
}

#[tokio::test]
async fn test_analyze_code_array_response_fails() {
    let fake = FakeCompletion::replying(r#"[{"qualityScore": 80}]"#);
    let err = analyzer_with(&fake)
        .analyze_code("x", "rust", "lib.rs")
        .await
        .unwrap_err();
    assert_eq!(err.operation, AnalysisOperation::CodeAnalysis);
    assert!(matches!(err.source, AnalysisFailure::NotAnObject("array")));
}

// ============================================================================
// generate_suggestions
// ============================================================================

#[tokio::test]
async fn test_generate_suggestions_order_preserved() {
    let fake = FakeCompletion::replying(r#"{"suggestions": ["use a map", "avoid nested loops"]}"#);
    let suggestions = analyzer_with(&fake)
        .generate_suggestions("lookup in a loop", "rust", "faster")
        .await
        .unwrap();
    assert_eq!(suggestions, vec!["use a map", "avoid nested loops"]);

    let req = &fake.requests().await[0];
    assert_eq!(req.temperature, Some(0.4));
    assert_eq!(req.response_format, ResponseFormat::JsonObject);
}

#[tokio::test]
async fn test_generate_suggestions_missing_field() {
    let fake = FakeCompletion::replying(r#"{"ideas": ["x"]}"#);
    let suggestions = analyzer_with(&fake)
        .generate_suggestions("c", "l", "r")
        .await
        .unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_generate_suggestions_failure_tagged() {
    let fake = FakeCompletion::failing("connection reset");
    let err = analyzer_with(&fake)
        .generate_suggestions("c", "l", "r")
        .await
        .unwrap_err();
    assert_eq!(err.operation, AnalysisOperation::SuggestionGeneration);
    assert!(err.to_string().contains("generate code suggestions"));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let fake = FakeCompletion::new(vec![
        Reply::Content(r#"{"confidence": 0.9}"#.into()),
        Reply::Content(r#"{"confidence": 0.9}"#.into()),
        Reply::Content(r#"{"confidence": 0.9}"#.into()),
    ]);
    let analyzer = analyzer_with(&fake);

    let (a, b, c) = tokio::join!(
        analyzer.analyze_bug("a", "a", None),
        analyzer.analyze_bug("b", "b", None),
        analyzer.analyze_bug("c", "c", None),
    );
    for result in [a, b, c] {
        assert_eq!(result.unwrap().confidence, 0.9);
    }
    assert_eq!(fake.call_count().await, 3);
}

// ============================================================================
// Bug intake
// ============================================================================

#[tokio::test]
async fn test_intake_success() {
    let fake = FakeCompletion::replying(r#"{"category": "Logic", "confidence": 0.7}"#);
    let intake = BugIntake::new(analyzer_with(&fake));

    let outcome = intake.analyze_for_intake("t", "d", None).await;
    let analysis = outcome.into_option().unwrap();
    assert_eq!(analysis.category, "Logic");
    assert_eq!(analysis.confidence, 0.7);
}

#[tokio::test]
async fn test_intake_failure_is_skipped() {
    let fake = FakeCompletion::failing("invalid api key");
    let intake = BugIntake::new(analyzer_with(&fake));

    match intake.analyze_for_intake("t", "d", Some("trace")).await {
        IntakeAnalysis::Skipped { reason } => assert!(reason.contains("invalid api key")),
        other => panic!("expected skip, got {:?}", other),
    }
}

#[tokio::test]
async fn test_intake_timeout_is_skipped() {
    let fake = FakeCompletion::new(vec![Reply::Delayed(
        Duration::from_secs(5),
        r#"{"confidence": 1}"#.into(),
    )]);
    let intake = BugIntake::new(analyzer_with(&fake)).with_timeout(Duration::from_millis(20));

    let outcome = intake.analyze_for_intake("t", "d", None).await;
    match outcome {
        IntakeAnalysis::Skipped { reason } => assert!(reason.contains("timed out")),
        other => panic!("expected timeout skip, got {:?}", other),
    }
}

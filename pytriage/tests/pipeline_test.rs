//! End-to-end tests for the review pipeline.
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use pytriage::pipeline::ReviewPipeline;
use pytriage::report::{ExecutionOutcome, IssueKind, Severity};

#[test]
fn test_eval_scenario() {
    let report = ReviewPipeline::new().review("x = 1\ny = eval(x)\n");
    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.kind, IssueKind::Security);
    assert_eq!(issue.severity, Severity::High);
    assert_eq!(issue.line, 2);
    assert_eq!(report.fixes.len(), 1);
    assert!(report.fixes[0].suggested_line.contains("literal_eval"));
}

#[test]
fn test_bare_except_scenario() {
    let report = ReviewPipeline::new().review("try:\n    pass\nexcept:\n    pass\n");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].kind, IssueKind::Logical);
    assert_eq!(report.issues[0].severity, Severity::Medium);
    assert_eq!(report.issues[0].line, 3);
}

#[test]
fn test_parse_failure_short_circuits() {
    let report = ReviewPipeline::new().review("def f(\n");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].kind, IssueKind::Syntax);
    assert_eq!(report.issues[0].severity, Severity::High);
    assert_eq!(report.metrics.functions, 0);
    assert_eq!(report.metrics.classes, 0);
    assert_eq!(report.metrics.complexity, 0);
    assert!(report.fixes.is_empty());
    assert!(report.execution.is_none());
}

#[test]
fn test_clean_input_has_metrics_and_no_issues() {
    let source = "\
def add(a, b):
    if a > b:
        return a
    return b

class Calc:
    pass
";
    let report = ReviewPipeline::new().review(source);
    assert!(report.issues.is_empty());
    assert!(report.fixes.is_empty());
    assert_eq!(report.metrics.functions, 1);
    assert_eq!(report.metrics.classes, 1);
    assert_eq!(report.metrics.complexity, 1);
}

#[test]
fn test_high_severity_blocks_execution() {
    let report = ReviewPipeline::new()
        .with_execution(true)
        .review("y = eval(input())\n");
    assert!(report.has_severity(Severity::High));
    assert!(report.execution.is_none());
}

#[test]
fn test_execution_runs_when_not_blocked() {
    let report = ReviewPipeline::new().with_execution(true).review("print('hi')\n");
    // One low-severity style issue does not block the sandbox.
    assert!(!report.has_severity(Severity::High));
    let execution = report.execution.expect("sandbox should have run");
    assert_eq!(execution.outcome, ExecutionOutcome::Completed);
    assert_eq!(execution.stdout, "hi\n");
    assert!(execution.runtime_issues.is_empty());
}

#[test]
fn test_runtime_issues_merge_into_report() {
    let report = ReviewPipeline::new().with_execution(true).review("x = 1 / 0\n");
    let execution = report.execution.expect("sandbox should have run");
    assert_eq!(execution.outcome, ExecutionOutcome::Failed);
    assert!(report
        .issues
        .iter()
        .any(|i| i.kind == IssueKind::Runtime && i.message.starts_with("ZeroDivisionError")));
}

#[test]
fn test_execution_disabled_by_default() {
    let report = ReviewPipeline::new().review("print('hi')\n");
    assert!(report.execution.is_none());
}

#[test]
fn test_report_serializes_to_json() {
    let report = ReviewPipeline::new().review("password = \"hunter2\"\n");
    let json = serde_json::to_string(&report).expect("should serialize");
    assert!(json.contains("\"kind\":\"security\""));
    assert!(json.contains("\"severity\":\"high\""));
    assert!(json.contains("\"weakness_id\":\"CWE-798\""));
}

#[test]
fn test_requests_are_independent() {
    let pipeline = ReviewPipeline::new();
    let first = pipeline.review("print(1)\n");
    let second = pipeline.review("print(1)\n");
    assert_eq!(first.issues.len(), second.issues.len());
    assert_eq!(first.metrics, second.metrics);
}

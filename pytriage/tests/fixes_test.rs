//! Unit tests for the Fix Recommender.
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use pytriage::fixes::{apply_fix, recommend_fixes, FixError};
use pytriage::parser::parse_source;
use pytriage::report::{Fix, Issue, IssueKind, Severity};
use pytriage::scanner::scan;

fn scan_issues(source: &str) -> Vec<Issue> {
    let parsed = parse_source(source).expect("Failed to parse");
    scan(&parsed)
}

fn make_issue(rule_id: &str, kind: IssueKind, line: usize) -> Issue {
    Issue {
        rule_id: rule_id.to_owned(),
        kind,
        line,
        message: String::new(),
        severity: Severity::Low,
        weakness_id: None,
    }
}

#[test]
fn test_bare_except_fix() {
    let source = "try:\n    pass\nexcept:\n    pass\n";
    let fixes = recommend_fixes(&scan_issues(source), source);
    assert_eq!(fixes.len(), 1);
    let fix = &fixes[0];
    assert_eq!(fix.line, 3);
    assert_eq!(fix.original_line, "except:");
    assert_eq!(fix.suggested_line, "except (ValueError, TypeError):");
}

#[test]
fn test_eval_scenario_recommends_safe_parsing() {
    let source = "x = 1\ny = eval(x)\n";
    let issues = scan_issues(source);
    assert_eq!(issues.len(), 1);
    let fixes = recommend_fixes(&issues, source);
    assert_eq!(fixes.len(), 1);
    assert!(fixes[0].suggested_line.contains("literal_eval"));
    assert_eq!(fixes[0].original_line, "y = eval(x)");
}

#[test]
fn test_unmatched_issue_kind_yields_no_fix() {
    let source = "if x is None:\n    pass\n";
    let issues = scan_issues(source);
    assert_eq!(issues.len(), 1);
    assert!(recommend_fixes(&issues, source).is_empty());
}

#[test]
fn test_out_of_range_line_degrades_to_empty() {
    let source = "print(1)\n";
    let issue = make_issue("PYT-T001", IssueKind::Style, 999);
    let fixes = recommend_fixes(&[issue], source);
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].original_line, "");

    let issue = make_issue("PYT-T001", IssueKind::Style, 0);
    let fixes = recommend_fixes(&[issue], source);
    assert_eq!(fixes[0].original_line, "");
}

#[test]
fn test_apply_fix_replaces_exactly_one_line() {
    let source = "a = 1\nprint(a)\nb = 2\n";
    let fix = Fix {
        rule_id: "PYT-T001".to_owned(),
        issue_kind: IssueKind::Style,
        line: 2,
        original_line: "print(a)".to_owned(),
        suggested_line: "logging.info(a)".to_owned(),
        rationale: String::new(),
    };
    let patched = apply_fix(source, &fix).expect("should apply");
    assert_eq!(patched, "a = 1\nlogging.info(a)\nb = 2\n");
}

#[test]
fn test_apply_fix_rejects_out_of_range_lines() {
    let source = "a = 1\n";
    let mut fix = Fix {
        rule_id: "PYT-T001".to_owned(),
        issue_kind: IssueKind::Style,
        line: 0,
        original_line: String::new(),
        suggested_line: "b = 2".to_owned(),
        rationale: String::new(),
    };
    assert_eq!(
        apply_fix(source, &fix),
        Err(FixError::InvalidLine {
            line: 0,
            line_count: 1
        })
    );

    fix.line = 5;
    assert!(matches!(
        apply_fix(source, &fix),
        Err(FixError::InvalidLine { line: 5, .. })
    ));
}

#[test]
fn test_fix_mirrors_issue_fields() {
    let source = "password = \"hunter2\"\n";
    let issues = scan_issues(source);
    let fixes = recommend_fixes(&issues, source);
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].rule_id, issues[0].rule_id);
    assert_eq!(fixes[0].issue_kind, issues[0].kind);
    assert_eq!(fixes[0].line, issues[0].line);
}

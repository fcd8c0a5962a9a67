//! Unit tests for the Pattern Scanner rules.
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use pytriage::parser::parse_source;
use pytriage::report::{IssueKind, Severity};
use pytriage::scanner::scan;

macro_rules! scan_source {
    ($source:expr) => {{
        let parsed = parse_source($source).expect("Failed to parse");
        scan(&parsed)
    }};
}

#[test]
fn test_eval_detection() {
    let issues = scan_source!("x = 1\ny = eval(x)\n");
    assert_eq!(issues.len(), 1);
    let issue = &issues[0];
    assert_eq!(issue.rule_id, "PYT-S001");
    assert_eq!(issue.kind, IssueKind::Security);
    assert_eq!(issue.severity, Severity::High);
    assert_eq!(issue.line, 2);
    assert_eq!(issue.weakness_id.as_deref(), Some("CWE-95"));
}

#[test]
fn test_exec_detection() {
    let issues = scan_source!("code = \"x = 1\"\nexec(code)\n");
    assert!(issues.iter().any(|i| i.rule_id == "PYT-S001"));
}

#[test]
fn test_bare_except() {
    let issues = scan_source!("try:\n    pass\nexcept:\n    pass\n");
    assert_eq!(issues.len(), 1);
    let issue = &issues[0];
    assert_eq!(issue.rule_id, "PYT-L001");
    assert_eq!(issue.kind, IssueKind::Logical);
    assert_eq!(issue.severity, Severity::Medium);
    assert_eq!(issue.line, 3);
}

#[test]
fn test_typed_except_is_clean() {
    let issues = scan_source!("try:\n    pass\nexcept ValueError:\n    pass\n");
    assert!(issues.is_empty());
}

#[test]
fn test_hardcoded_secret() {
    let issues = scan_source!("password = \"hunter2\"\n");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule_id, "PYT-S002");
    assert_eq!(issues[0].weakness_id.as_deref(), Some("CWE-798"));
}

#[test]
fn test_secret_names_are_case_insensitive() {
    let issues = scan_source!("API_KEY = \"abc123\"\nAuthToken = \"xyz\"\n");
    let secrets: Vec<_> = issues.iter().filter(|i| i.rule_id == "PYT-S002").collect();
    assert_eq!(secrets.len(), 2);
}

#[test]
fn test_annotated_secret_assignment() {
    let issues = scan_source!("api_key: str = \"abc123\"\n");
    assert!(issues.iter().any(|i| i.rule_id == "PYT-S002"));
}

#[test]
fn test_dynamic_secret_is_clean() {
    // Only literal values count as hardcoded.
    let issues = scan_source!("password = read_password()\n");
    assert!(issues.iter().all(|i| i.rule_id != "PYT-S002"));
}

#[test]
fn test_sql_injection_concat() {
    let issues = scan_source!("cursor.execute(\"SELECT * FROM users WHERE id = \" + user_id)\n");
    assert_eq!(
        issues
            .iter()
            .filter(|i| i.rule_id == "PYT-S003")
            .count(),
        1
    );
    assert_eq!(issues[0].weakness_id.as_deref(), Some("CWE-89"));
}

#[test]
fn test_sql_injection_fstring() {
    let issues = scan_source!("cursor.executemany(f\"DELETE FROM t WHERE id = {x}\")\n");
    assert!(issues.iter().any(|i| i.rule_id == "PYT-S003"));
}

#[test]
fn test_parameterized_query_is_clean() {
    let issues = scan_source!("cursor.execute(\"SELECT * FROM users WHERE id = %s\", (uid,))\n");
    assert!(issues.iter().all(|i| i.rule_id != "PYT-S003"));
}

#[test]
fn test_print_detection() {
    let issues = scan_source!("print(\"debugging\")\n");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule_id, "PYT-T001");
    assert_eq!(issues[0].severity, Severity::Low);
}

#[test]
fn test_identity_comparison_with_literal() {
    let issues = scan_source!("if x is True:\n    pass\n");
    assert!(issues.iter().any(|i| i.rule_id == "PYT-T002"));

    let issues = scan_source!("if x is not None:\n    pass\n");
    assert!(issues.iter().any(|i| i.rule_id == "PYT-T002"));
}

#[test]
fn test_identity_comparison_with_name_is_clean() {
    let issues = scan_source!("if x is y:\n    pass\n");
    assert!(issues.is_empty());
}

#[test]
fn test_clean_input_yields_no_issues() {
    let issues = scan_source!("def add(a, b):\n    return a + b\n");
    assert!(issues.is_empty());
}

#[test]
fn test_multiple_rules_on_one_line() {
    // print(eval(x)) fires both the style and the security rule.
    let issues = scan_source!("print(eval(x))\n");
    assert!(issues.iter().any(|i| i.rule_id == "PYT-T001"));
    assert!(issues.iter().any(|i| i.rule_id == "PYT-S001"));
}

#[test]
fn test_detection_inside_nested_scopes() {
    let source = "class Worker:\n    def run(self):\n        for i in range(3):\n            eval(i)\n";
    let issues = scan_source!(source);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line, 4);
}

#[test]
fn test_issues_sorted_by_line() {
    let source = "print(1)\ntry:\n    pass\nexcept:\n    pass\npassword = \"x\"\n";
    let issues = scan_source!(source);
    let lines: Vec<usize> = issues.iter().map(|i| i.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn test_scan_is_idempotent() {
    let parsed = parse_source("y = eval(x)\nprint(y)\n").expect("Failed to parse");
    let first = scan(&parsed);
    let second = scan(&parsed);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.rule_id, b.rule_id);
        assert_eq!(a.line, b.line);
        assert_eq!(a.message, b.message);
    }
}

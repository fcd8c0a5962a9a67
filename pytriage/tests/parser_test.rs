//! Unit tests for the Structural Parser.
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use pytriage::parser::parse_source;
use pytriage::report::{IssueKind, Severity};

#[test]
fn test_valid_source_parses() {
    let parsed = parse_source("x = 1\ny = 2\n").expect("should parse");
    assert_eq!(parsed.line_count, 2);
    assert_eq!(parsed.module.body.len(), 2);
}

#[test]
fn test_unterminated_def_reports_syntax_issue() {
    let issue = parse_source("def f(\n").expect_err("should fail to parse");
    assert_eq!(issue.kind, IssueKind::Syntax);
    assert_eq!(issue.severity, Severity::High);
    assert_eq!(issue.rule_id, "PYT-P001");
    assert!(!issue.message.is_empty());
}

#[test]
fn test_syntax_issue_line_is_in_range() {
    let source = "x = 1\ny = (\n";
    let issue = parse_source(source).expect_err("should fail to parse");
    // Either a real line within the source, or 0 when the parser gave none.
    assert!(issue.line <= source.lines().count());
}

#[test]
fn test_error_message_uses_lines_not_byte_ranges() {
    let issue = parse_source("x = 1\ny = (\n").expect_err("should fail to parse");
    assert!(!issue.message.contains("byte range"));
}

#[test]
fn test_empty_source_is_valid() {
    assert!(parse_source("").is_ok());
}

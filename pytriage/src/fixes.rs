//! Fix Recommender: canned remediation templates keyed by rule ID.
//!
//! At most one fix is produced per issue; issues without a known template
//! are simply omitted. Fix application is a textual line replacement — it
//! does not re-parse or validate the result.

use crate::report::{Fix, Issue};
use crate::rules::ids;
use thiserror::Error;

/// Error during fix application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    /// The fix references a line outside the source.
    #[error("invalid line {line}: source has {line_count} lines")]
    InvalidLine {
        /// 1-based line the fix referenced.
        line: usize,
        /// Number of lines in the source.
        line_count: usize,
    },
}

/// A static remediation template.
struct FixTemplate {
    suggested_line: &'static str,
    rationale: &'static str,
}

/// Looks up the remediation template for a rule, if one exists.
fn template_for(rule_id: &str) -> Option<FixTemplate> {
    match rule_id {
        ids::RULE_ID_BARE_EXCEPT => Some(FixTemplate {
            suggested_line: "except (ValueError, TypeError):",
            rationale: "Specify the exceptions you want to catch instead of using a bare except",
        }),
        ids::RULE_ID_DYNAMIC_EVAL => Some(FixTemplate {
            suggested_line: "value = ast.literal_eval(user_input)",
            rationale: "Use a safe literal parser or validate input instead of eval/exec",
        }),
        ids::RULE_ID_HARDCODED_SECRET => Some(FixTemplate {
            suggested_line: "secret = os.getenv(\"SECRET_KEY\")",
            rationale: "Use environment variables for sensitive data instead of hardcoding",
        }),
        ids::RULE_ID_SQL_INJECTION => Some(FixTemplate {
            suggested_line: "cursor.execute(\"SELECT * FROM users WHERE id = %s\", (user_id,))",
            rationale: "Use parameterized queries to prevent SQL injection",
        }),
        ids::RULE_ID_PRINT_CALL => Some(FixTemplate {
            suggested_line: "logging.info(\"Your message here\")",
            rationale: "Use logging instead of print statements in production code",
        }),
        _ => None,
    }
}

/// Recommends fixes for the given issues.
///
/// `original_line` is filled from the source when the issue line is within
/// range; an out-of-range line degrades to an empty string, never a fault.
#[must_use]
pub fn recommend_fixes(issues: &[Issue], source: &str) -> Vec<Fix> {
    let lines: Vec<&str> = source.lines().collect();
    let mut fixes = Vec::new();

    for issue in issues {
        let Some(template) = template_for(&issue.rule_id) else {
            continue;
        };
        let original_line = if issue.line >= 1 && issue.line <= lines.len() {
            lines[issue.line - 1].to_owned()
        } else {
            String::new()
        };
        fixes.push(Fix {
            rule_id: issue.rule_id.clone(),
            issue_kind: issue.kind,
            line: issue.line,
            original_line,
            suggested_line: template.suggested_line.to_owned(),
            rationale: template.rationale.to_owned(),
        });
    }

    fixes
}

/// Applies a fix by replacing line `fix.line` (1-based) wholesale with the
/// suggested line, preserving every other line verbatim.
pub fn apply_fix(source: &str, fix: &Fix) -> Result<String, FixError> {
    let line_count = source.lines().count();
    if fix.line < 1 || fix.line > line_count {
        return Err(FixError::InvalidLine {
            line: fix.line,
            line_count,
        });
    }

    // split('\n') keeps a trailing empty segment, so a trailing newline
    // survives the join.
    let mut lines: Vec<&str> = source.split('\n').collect();
    lines[fix.line - 1] = fix.suggested_line.as_str();
    Ok(lines.join("\n"))
}

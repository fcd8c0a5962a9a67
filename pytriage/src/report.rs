//! Result data structures produced by the review pipeline.
//!
//! Everything here is a plain record: serializable, no behavior beyond
//! construction helpers, so any host layer (CLI printer, JSON consumer)
//! can use the output without calling back into the core.

use serde::Serialize;
use std::fmt;

/// Classification of a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The source failed to parse.
    Syntax,
    /// Logic-level problem (e.g. a bare exception handler).
    Logical,
    /// Security-relevant pattern.
    Security,
    /// Stylistic problem.
    Style,
    /// Fault raised while the snippet executed in the sandbox.
    Runtime,
    /// Resource ceiling (memory, iterations) reported by the sandbox.
    Resource,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Syntax => "syntax",
            Self::Logical => "logical",
            Self::Security => "security",
            Self::Style => "style",
            Self::Runtime => "runtime",
            Self::Resource => "resource",
        };
        f.write_str(s)
    }
}

/// Ordinal severity classification guiding triage priority.
///
/// Variant order matters: `Severity::High > Severity::Medium > Severity::Low`,
/// which is how the pipeline decides whether a static issue blocks execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational; safe to ignore.
    Low,
    /// Should be addressed.
    Medium,
    /// Must be addressed; blocks sandboxed execution.
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// A single issue found by static analysis or sandboxed execution.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// ID of the rule that produced the issue (see [`crate::rules::ids`]).
    pub rule_id: String,
    /// Category of the issue.
    pub kind: IssueKind,
    /// 1-based source line, or 0 when unknown / whole-file.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
    /// External weakness classification (CWE), when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakness_id: Option<String>,
}

/// Aggregate structural counts for one source unit.
///
/// Always present in a report, zero-initialized when parsing failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Number of function definitions (including `async def` and methods).
    pub functions: usize,
    /// Number of class definitions.
    pub classes: usize,
    /// Branch/loop node count, a cyclomatic-complexity proxy.
    pub complexity: usize,
}

/// A templated remediation tied to one [`Issue`].
#[derive(Debug, Clone, Serialize)]
pub struct Fix {
    /// ID of the rule whose issue this fix addresses.
    pub rule_id: String,
    /// Kind of the source issue.
    pub issue_kind: IssueKind,
    /// 1-based line the fix applies to (mirrors the issue).
    pub line: usize,
    /// Verbatim text of the offending line, empty if unavailable.
    pub original_line: String,
    /// Replacement text; template-generated, not guaranteed valid in context.
    pub suggested_line: String,
    /// Why this fix addresses the issue.
    pub rationale: String,
}

/// Terminal state of one sandboxed execution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionOutcome {
    /// The snippet ran to completion without an uncaught fault.
    Completed,
    /// Compilation or execution raised an uncaught fault.
    Failed,
    /// The wall-clock limit terminated the run.
    TimedOut,
}

/// Outcome of one sandboxed run. Constructed once per attempt, never retried
/// by this layer.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    /// Terminal state of the run.
    pub outcome: ExecutionOutcome,
    /// Captured standard output (possibly empty).
    pub stdout: String,
    /// Captured standard error (possibly empty).
    pub stderr: String,
    /// Non-empty only when a fault terminated execution, formatted as
    /// `<ExceptionKind>: <message>`.
    pub error: String,
    /// Wall-clock duration in seconds, measured regardless of outcome.
    pub elapsed_seconds: f64,
    /// Peak resident set size in MiB as reported by the sandbox, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_memory_mb: Option<f64>,
    /// Issues observed at runtime (`kind` is `Runtime` or `Resource`).
    pub runtime_issues: Vec<Issue>,
}

/// The accumulated output of one full review request.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewReport {
    /// Structural counts (all-zero when parsing failed).
    pub metrics: Metrics,
    /// All issues: static findings plus any merged runtime issues.
    pub issues: Vec<Issue>,
    /// Recommended fixes for issues with a known template.
    pub fixes: Vec<Fix>,
    /// Sandboxed execution outcome, `None` when execution was disabled or
    /// blocked by a high-severity static issue.
    pub execution: Option<ExecutionResult>,
}

impl ReviewReport {
    /// True if any static or runtime issue carries the given severity.
    #[must_use]
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.issues.iter().any(|i| i.severity == severity)
    }
}

//! Detector rules applied by the Pattern Scanner.
//!
//! Each rule is independent and order-insensitive: several rules may fire on
//! the same node, none may mutate the tree, and an unrecognized node shape is
//! skipped silently rather than treated as fatal.

use crate::report::{Issue, IssueKind, Severity};
use crate::utils::LineIndex;
use ruff_python_ast::{Expr, Stmt};

#[derive(Debug, Clone)]
/// Context passed to rules during the scan.
pub struct Context {
    /// Line index for accurate line mapping.
    pub line_index: LineIndex,
}

#[derive(Debug, Clone, Copy)]
/// Metadata associated with a rule.
pub struct RuleMetadata {
    /// Unique code/ID of the rule.
    pub id: &'static str,
    /// Issue kind the rule reports.
    pub kind: IssueKind,
    /// Severity of issues the rule reports.
    pub severity: Severity,
    /// External weakness classification (CWE), when one applies.
    pub weakness_id: Option<&'static str>,
}

/// Trait defining a scan rule.
pub trait Rule: Send + Sync {
    /// Returns the descriptive name of the rule.
    fn name(&self) -> &'static str;
    /// Returns the full metadata for the rule.
    fn metadata(&self) -> RuleMetadata;
    /// Called when entering a statement.
    fn enter_stmt(&mut self, _stmt: &Stmt, _context: &Context) -> Option<Vec<Issue>> {
        None
    }
    /// Called when visiting an expression.
    fn visit_expr(&mut self, _expr: &Expr, _context: &Context) -> Option<Vec<Issue>> {
        None
    }
}

/// Module containing rule ID constants.
pub mod ids;
/// Logical-category rules.
pub mod logical;
/// Security-category rules.
pub mod security;
/// Style-category rules.
pub mod style;
/// Shared helpers for rule implementations.
pub mod utils;

use logical::BareExceptRule;
use security::{DynamicEvalRule, HardcodedSecretRule, SqlInjectionRule};
use style::{LiteralIdentityRule, PrintCallRule};

/// Returns the canonical set of scan rules, one per detector pattern.
#[must_use]
pub fn get_scan_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(BareExceptRule),      // PYT-L001: bare except handler
        Box::new(DynamicEvalRule),     // PYT-S001: eval()/exec()
        Box::new(HardcodedSecretRule), // PYT-S002: hardcoded secret
        Box::new(SqlInjectionRule),    // PYT-S003: dynamic SQL execute
        Box::new(PrintCallRule),       // PYT-T001: debug print
        Box::new(LiteralIdentityRule), // PYT-T002: is/is not with literal
    ]
}

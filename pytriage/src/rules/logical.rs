//! Logical-category rules.

use super::utils::create_issue;
use crate::report::{Issue, IssueKind, Severity};
use crate::rules::{ids, Context, Rule, RuleMetadata};
use ruff_python_ast::{self as ast, Stmt};
use ruff_text_size::Ranged;

const META_BARE_EXCEPT: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_BARE_EXCEPT,
    kind: IssueKind::Logical,
    severity: Severity::Medium,
    weakness_id: None,
};

/// Rule for detecting exception handlers with no declared exception type.
pub struct BareExceptRule;

impl Rule for BareExceptRule {
    fn name(&self) -> &'static str {
        "BareExceptRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_BARE_EXCEPT
    }
    fn enter_stmt(&mut self, stmt: &Stmt, context: &Context) -> Option<Vec<Issue>> {
        let Stmt::Try(t) = stmt else { return None };
        let mut issues = Vec::new();
        for handler in &t.handlers {
            let ast::ExceptHandler::ExceptHandler(h) = handler;
            if h.type_.is_none() {
                issues.push(create_issue(
                    "Bare except handler catches all exceptions",
                    META_BARE_EXCEPT,
                    context,
                    h.range().start(),
                ));
            }
        }
        if issues.is_empty() {
            None
        } else {
            Some(issues)
        }
    }
}

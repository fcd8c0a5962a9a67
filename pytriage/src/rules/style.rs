//! Style-category rules.

use super::utils::{create_issue, get_call_name};
use crate::report::{Issue, IssueKind, Severity};
use crate::rules::{ids, Context, Rule, RuleMetadata};
use ruff_python_ast::{CmpOp, Expr};
use ruff_text_size::Ranged;

const META_PRINT_CALL: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_PRINT_CALL,
    kind: IssueKind::Style,
    severity: Severity::Low,
    weakness_id: None,
};
const META_LITERAL_IDENTITY: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_LITERAL_IDENTITY,
    kind: IssueKind::Style,
    severity: Severity::Low,
    weakness_id: None,
};

/// Rule for detecting debug `print()` calls.
pub struct PrintCallRule;

impl Rule for PrintCallRule {
    fn name(&self) -> &'static str {
        "PrintCallRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_PRINT_CALL
    }
    fn visit_expr(&mut self, expr: &Expr, context: &Context) -> Option<Vec<Issue>> {
        if let Expr::Call(call) = expr {
            if let Expr::Name(name) = &*call.func {
                if name.id.as_str() == "print" {
                    return Some(vec![create_issue(
                        "print() call found; use logging in production code",
                        META_PRINT_CALL,
                        context,
                        call.range().start(),
                    )]);
                }
            }
        }
        None
    }
}

/// Rule for detecting identity comparisons against boolean/None literals.
pub struct LiteralIdentityRule;

impl Rule for LiteralIdentityRule {
    fn name(&self) -> &'static str {
        "LiteralIdentityRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_LITERAL_IDENTITY
    }
    fn visit_expr(&mut self, expr: &Expr, context: &Context) -> Option<Vec<Issue>> {
        let Expr::Compare(node) = expr else {
            return None;
        };
        for (op, comparator) in node.ops.iter().zip(node.comparators.iter()) {
            if matches!(op, CmpOp::Is | CmpOp::IsNot)
                && matches!(comparator, Expr::BooleanLiteral(_) | Expr::NoneLiteral(_))
            {
                return Some(vec![create_issue(
                    "Use == instead of 'is' when comparing with True/False/None",
                    META_LITERAL_IDENTITY,
                    context,
                    node.range().start(),
                )]);
            }
        }
        None
    }
}

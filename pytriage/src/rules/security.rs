//! Security-category rules.

use super::utils::{contains_ignore_case, create_issue, get_call_name, is_literal_expr};
use crate::constants::SECRET_NAME_PARTS;
use crate::report::{Issue, IssueKind, Severity};
use crate::rules::{ids, Context, Rule, RuleMetadata};
use ruff_python_ast::{Expr, Stmt};
use ruff_text_size::Ranged;

const META_DYNAMIC_EVAL: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_DYNAMIC_EVAL,
    kind: IssueKind::Security,
    severity: Severity::High,
    weakness_id: Some("CWE-95"),
};
const META_HARDCODED_SECRET: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_HARDCODED_SECRET,
    kind: IssueKind::Security,
    severity: Severity::High,
    weakness_id: Some("CWE-798"),
};
const META_SQL_INJECTION: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_SQL_INJECTION,
    kind: IssueKind::Security,
    severity: Severity::High,
    weakness_id: Some("CWE-89"),
};

/// Rule for detecting calls to the dynamic-evaluation primitives.
pub struct DynamicEvalRule;

impl Rule for DynamicEvalRule {
    fn name(&self) -> &'static str {
        "DynamicEvalRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_DYNAMIC_EVAL
    }
    fn visit_expr(&mut self, expr: &Expr, context: &Context) -> Option<Vec<Issue>> {
        if let Expr::Call(call) = expr {
            if let Some(name) = get_call_name(&call.func) {
                if name == "eval" || name == "exec" {
                    return Some(vec![create_issue(
                        &format!("Dangerous use of {name}() detected"),
                        META_DYNAMIC_EVAL,
                        context,
                        call.range().start(),
                    )]);
                }
            }
        }
        None
    }
}

/// Rule for detecting assignments of literal values to secret-like names.
pub struct HardcodedSecretRule;

impl HardcodedSecretRule {
    fn is_secret_name(name: &str) -> bool {
        SECRET_NAME_PARTS
            .iter()
            .any(|part| contains_ignore_case(name, part))
    }
}

impl Rule for HardcodedSecretRule {
    fn name(&self) -> &'static str {
        "HardcodedSecretRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_HARDCODED_SECRET
    }
    fn enter_stmt(&mut self, stmt: &Stmt, context: &Context) -> Option<Vec<Issue>> {
        let (targets, value, location) = match stmt {
            Stmt::Assign(node) => (
                node.targets.iter().collect::<Vec<_>>(),
                &*node.value,
                node.range().start(),
            ),
            Stmt::AnnAssign(node) => {
                let value = node.value.as_deref()?;
                (vec![&*node.target], value, node.range().start())
            }
            _ => return None,
        };
        if !is_literal_expr(value) {
            return None;
        }
        for target in targets {
            if let Expr::Name(name) = target {
                if Self::is_secret_name(&name.id) {
                    return Some(vec![create_issue(
                        "Possible hardcoded secret detected",
                        META_HARDCODED_SECRET,
                        context,
                        location,
                    )]);
                }
            }
        }
        None
    }
}

/// Rule for detecting database `execute` calls with dynamically built queries.
pub struct SqlInjectionRule;

impl SqlInjectionRule {
    /// Concatenations, calls (e.g. `.format(...)`) and f-strings are the
    /// dynamic argument shapes that make a query injectable.
    fn is_dynamic_arg(expr: &Expr) -> bool {
        matches!(expr, Expr::BinOp(_) | Expr::Call(_) | Expr::FString(_))
    }
}

impl Rule for SqlInjectionRule {
    fn name(&self) -> &'static str {
        "SqlInjectionRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_SQL_INJECTION
    }
    fn visit_expr(&mut self, expr: &Expr, context: &Context) -> Option<Vec<Issue>> {
        let Expr::Call(call) = expr else { return None };
        let Expr::Attribute(attr) = &*call.func else {
            return None;
        };
        let method = attr.attr.as_str();
        if method != "execute" && method != "executemany" {
            return None;
        }
        if call.arguments.args.iter().any(Self::is_dynamic_arg) {
            return Some(vec![create_issue(
                "Possible SQL injection vulnerability (dynamically built query)",
                META_SQL_INJECTION,
                context,
                call.range().start(),
            )]);
        }
        None
    }
}

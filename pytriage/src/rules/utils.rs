//! Shared helpers for rule implementations.

use crate::report::Issue;
use crate::rules::{Context, RuleMetadata};
use ruff_python_ast::Expr;

/// Extracts the name of a function or method call as a string.
pub fn get_call_name(func: &Expr) -> Option<String> {
    match func {
        Expr::Name(node) => Some(node.id.to_string()),
        Expr::Attribute(node) => {
            // Handle nested attributes: module.submodule.func
            if let Expr::Attribute(_inner) = &*node.value {
                let prefix = get_call_name(&node.value)?;
                Some(format!("{}.{}", prefix, node.attr))
            } else if let Expr::Name(value) = &*node.value {
                Some(format!("{}.{}", value.id, node.attr))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Check if a single expression is a literal (constant value).
/// Returns false for dynamic values like variables, f-strings, concatenations, etc.
pub fn is_literal_expr(expr: &Expr) -> bool {
    match expr {
        Expr::StringLiteral(_)
        | Expr::BytesLiteral(_)
        | Expr::NumberLiteral(_)
        | Expr::BooleanLiteral(_)
        | Expr::NoneLiteral(_)
        | Expr::EllipsisLiteral(_) => true,
        Expr::List(list) => list.elts.iter().all(is_literal_expr),
        Expr::Tuple(tuple) => tuple.elts.iter().all(is_literal_expr),
        // f-strings, concatenations, variables, calls, etc. are NOT literal
        _ => false,
    }
}

/// Checks if `haystack` contains `needle` as a substring, ignoring ASCII case.
/// `needle` must be lowercase.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle_bytes = needle.as_bytes();
    if needle_bytes.len() > haystack.len() {
        return false;
    }
    haystack
        .as_bytes()
        .windows(needle_bytes.len())
        .any(|window| {
            window
                .iter()
                .zip(needle_bytes)
                .all(|(h, n)| h.eq_ignore_ascii_case(n))
        })
}

/// Creates an issue with line mapping from a `TextSize` location.
pub fn create_issue(
    msg: &str,
    metadata: RuleMetadata,
    context: &Context,
    location: ruff_text_size::TextSize,
) -> Issue {
    let line = context.line_index.line_index(location);
    Issue {
        rule_id: metadata.id.to_owned(),
        kind: metadata.kind,
        line,
        message: msg.to_owned(),
        severity: metadata.severity,
        weakness_id: metadata.weakness_id.map(str::to_owned),
    }
}

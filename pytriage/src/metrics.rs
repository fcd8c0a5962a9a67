//! Metrics Collector: structural tallies over the parsed tree.
//!
//! Pure multiset accumulation — traversal order does not affect the final
//! counts, so this pass may run concurrently with the Pattern Scanner or be
//! fused into it without changing the result.

use crate::parser::ParsedModule;
use crate::report::Metrics;
use ruff_python_ast::Stmt;

/// Collects structural counts for a parsed module.
#[must_use]
pub fn collect_metrics(parsed: &ParsedModule) -> Metrics {
    let mut visitor = MetricsVisitor {
        metrics: Metrics::default(),
    };
    visitor.visit_body(&parsed.module.body);
    visitor.metrics
}

struct MetricsVisitor {
    metrics: Metrics,
}

impl MetricsVisitor {
    fn visit_body(&mut self, body: &[Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(node) => {
                self.metrics.functions += 1;
                self.visit_body(&node.body);
            }
            Stmt::ClassDef(node) => {
                self.metrics.classes += 1;
                self.visit_body(&node.body);
            }
            Stmt::If(node) => {
                self.metrics.complexity += 1;
                self.visit_body(&node.body);
                for clause in &node.elif_else_clauses {
                    // An elif is its own conditional node; a plain else is not.
                    if clause.test.is_some() {
                        self.metrics.complexity += 1;
                    }
                    self.visit_body(&clause.body);
                }
            }
            Stmt::For(node) => {
                self.metrics.complexity += 1;
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::While(node) => {
                self.metrics.complexity += 1;
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::Try(node) => {
                self.visit_body(&node.body);
                for handler in &node.handlers {
                    let ruff_python_ast::ExceptHandler::ExceptHandler(h) = handler;
                    self.visit_body(&h.body);
                }
                self.visit_body(&node.orelse);
                self.visit_body(&node.finalbody);
            }
            Stmt::With(node) => {
                self.visit_body(&node.body);
            }
            _ => {}
        }
    }
}

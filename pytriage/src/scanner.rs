//! Pattern Scanner: a single pre-order traversal applying all detector rules.
//!
//! Traversal order matches source layout, so issues come out sorted by
//! ascending line and two scans of the same tree produce identical output.

use crate::parser::ParsedModule;
use crate::report::Issue;
use crate::rules::{get_scan_rules, Context, Rule};
use ruff_python_ast::{Expr, Stmt};

/// Visitor for traversing the AST and applying scan rules.
pub struct ScanVisitor {
    rules: Vec<Box<dyn Rule>>,
    context: Context,
    /// List of issues collected during the traversal.
    pub issues: Vec<Issue>,
}

/// Scans a parsed module with the canonical rule set.
#[must_use]
pub fn scan(parsed: &ParsedModule) -> Vec<Issue> {
    let mut visitor = ScanVisitor::new(get_scan_rules(), parsed.line_index.clone());
    for stmt in &parsed.module.body {
        visitor.visit_stmt(stmt);
    }
    visitor.issues
}

impl ScanVisitor {
    /// Creates a new `ScanVisitor` with the given rules.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>, line_index: crate::utils::LineIndex) -> Self {
        Self {
            rules,
            context: Context { line_index },
            issues: Vec::new(),
        }
    }

    /// Visits a statement node and applies rules.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        for rule in &mut self.rules {
            if let Some(mut issues) = rule.enter_stmt(stmt, &self.context) {
                self.issues.append(&mut issues);
            }
        }

        // Manually walk children
        match stmt {
            Stmt::FunctionDef(node) => {
                for s in &node.body {
                    self.visit_stmt(s);
                }
            }
            Stmt::ClassDef(node) => {
                for s in &node.body {
                    self.visit_stmt(s);
                }
            }
            Stmt::If(node) => {
                self.visit_expr(&node.test);
                for s in &node.body {
                    self.visit_stmt(s);
                }
                for clause in &node.elif_else_clauses {
                    if let Some(test) = &clause.test {
                        self.visit_expr(test);
                    }
                    for s in &clause.body {
                        self.visit_stmt(s);
                    }
                }
            }
            Stmt::For(node) => {
                self.visit_expr(&node.iter);
                for s in &node.body {
                    self.visit_stmt(s);
                }
                for s in &node.orelse {
                    self.visit_stmt(s);
                }
            }
            Stmt::While(node) => {
                self.visit_expr(&node.test);
                for s in &node.body {
                    self.visit_stmt(s);
                }
                for s in &node.orelse {
                    self.visit_stmt(s);
                }
            }
            Stmt::Try(node) => {
                for s in &node.body {
                    self.visit_stmt(s);
                }
                for handler in &node.handlers {
                    match handler {
                        ruff_python_ast::ExceptHandler::ExceptHandler(h) => {
                            for s in &h.body {
                                self.visit_stmt(s);
                            }
                        }
                    }
                }
                for s in &node.orelse {
                    self.visit_stmt(s);
                }
                for s in &node.finalbody {
                    self.visit_stmt(s);
                }
            }
            Stmt::With(node) => {
                for item in &node.items {
                    self.visit_expr(&item.context_expr);
                }
                for s in &node.body {
                    self.visit_stmt(s);
                }
            }
            Stmt::Expr(node) => {
                self.visit_expr(&node.value);
            }
            Stmt::Assign(node) => {
                self.visit_expr(&node.value);
            }
            Stmt::AnnAssign(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::AugAssign(node) => {
                self.visit_expr(&node.value);
            }
            Stmt::Return(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Assert(node) => {
                self.visit_expr(&node.test);
            }
            Stmt::Raise(node) => {
                if let Some(exc) = &node.exc {
                    self.visit_expr(exc);
                }
            }
            // Unknown/unsupported constructs are skipped silently; this is a
            // best-effort pattern scan, not a sound analysis.
            _ => {}
        }
    }

    /// Visits an expression node and applies rules, recursing into all
    /// sub-expressions so rules can inspect strictly nested nodes.
    pub fn visit_expr(&mut self, expr: &Expr) {
        for rule in &mut self.rules {
            if let Some(mut issues) = rule.visit_expr(expr, &self.context) {
                self.issues.append(&mut issues);
            }
        }

        // Recursively visit sub-expressions
        match expr {
            Expr::Call(node) => {
                self.visit_expr(&node.func);
                for arg in &node.arguments.args {
                    self.visit_expr(arg);
                }
                for keyword in &node.arguments.keywords {
                    self.visit_expr(&keyword.value);
                }
            }
            Expr::Attribute(node) => self.visit_expr(&node.value),
            Expr::BinOp(node) => {
                self.visit_expr(&node.left);
                self.visit_expr(&node.right);
            }
            Expr::UnaryOp(node) => self.visit_expr(&node.operand),
            Expr::BoolOp(node) => {
                for value in &node.values {
                    self.visit_expr(value);
                }
            }
            Expr::Compare(node) => {
                self.visit_expr(&node.left);
                for val in &node.comparators {
                    self.visit_expr(val);
                }
            }
            Expr::List(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Set(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Dict(node) => {
                for item in &node.items {
                    if let Some(key) = &item.key {
                        self.visit_expr(key);
                    }
                    self.visit_expr(&item.value);
                }
            }
            Expr::Subscript(node) => {
                self.visit_expr(&node.value);
                self.visit_expr(&node.slice);
            }
            Expr::Starred(node) => self.visit_expr(&node.value),
            Expr::Yield(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Expr::YieldFrom(node) => self.visit_expr(&node.value),
            Expr::Await(node) => self.visit_expr(&node.value),
            Expr::Lambda(node) => self.visit_expr(&node.body),
            Expr::ListComp(node) => {
                for gen in &node.generators {
                    self.visit_expr(&gen.iter);
                    for r in &gen.ifs {
                        self.visit_expr(r);
                    }
                }
                self.visit_expr(&node.elt);
            }
            Expr::SetComp(node) => {
                for gen in &node.generators {
                    self.visit_expr(&gen.iter);
                    for r in &gen.ifs {
                        self.visit_expr(r);
                    }
                }
                self.visit_expr(&node.elt);
            }
            Expr::DictComp(node) => {
                for gen in &node.generators {
                    self.visit_expr(&gen.iter);
                    for r in &gen.ifs {
                        self.visit_expr(r);
                    }
                }
                if let Some(key) = &node.key {
                    self.visit_expr(key);
                }
                self.visit_expr(&node.value);
            }
            Expr::Generator(node) => {
                for gen in &node.generators {
                    self.visit_expr(&gen.iter);
                    for r in &gen.ifs {
                        self.visit_expr(r);
                    }
                }
                self.visit_expr(&node.elt);
            }
            _ => {}
        }
    }
}

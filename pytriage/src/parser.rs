//! Structural parsing of review input.
//!
//! Wraps `ruff_python_parser` so the rest of the pipeline works with one
//! immutable, pre-indexed tree handle. Parse failure is not a Rust error:
//! it is reported as a single high-severity syntax [`Issue`] and the static
//! stages downstream are skipped.

use crate::report::{Issue, IssueKind, Severity};
use crate::rules::ids;
use crate::utils::{convert_byte_range_to_line, parse_error_line, LineIndex};
use ruff_python_ast::ModModule;
use ruff_python_parser::parse_module;

/// An immutable, parsed source unit.
///
/// The tree is read-only; the Pattern Scanner and Metrics Collector may
/// traverse it concurrently without synchronization.
#[derive(Debug)]
pub struct ParsedModule {
    /// The parsed module body.
    pub module: ModModule,
    /// Byte-offset to line mapping for the source.
    pub line_index: LineIndex,
    /// Number of lines in the analyzed source.
    pub line_count: usize,
}

/// Parses source text into a [`ParsedModule`].
///
/// On failure returns exactly one `syntax`/`high` issue whose line is taken
/// from the parser's reported location, or 0 when the parser omits one.
pub fn parse_source(source: &str) -> Result<ParsedModule, Issue> {
    match parse_module(source) {
        Ok(parsed) => Ok(ParsedModule {
            module: parsed.into_syntax(),
            line_index: LineIndex::new(source),
            line_count: source.lines().count(),
        }),
        Err(e) => {
            let raw = format!("{e}");
            let line_count = source.lines().count();
            let line = parse_error_line(&raw, source)
                .filter(|l| *l <= line_count)
                .unwrap_or(0);
            Err(Issue {
                rule_id: ids::RULE_ID_SYNTAX.to_owned(),
                kind: IssueKind::Syntax,
                line,
                message: convert_byte_range_to_line(&raw, source),
                severity: Severity::High,
                weakness_id: None,
            })
        }
    }
}

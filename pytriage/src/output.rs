//! Terminal rendering of review reports.

use crate::report::{ExecutionOutcome, ReviewReport, Severity};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use std::io::Write;

/// Prints a human-readable review report.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_report(writer: &mut impl Write, report: &ReviewReport) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {} functions, {} classes, complexity {}",
        "Structure:".bold(),
        report.metrics.functions,
        report.metrics.classes,
        report.metrics.complexity
    )?;

    if report.issues.is_empty() {
        writeln!(writer, "{}", "No issues found.".green())?;
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Line", "Rule", "Kind", "Severity", "Message"]);
        for issue in &report.issues {
            table.add_row(vec![
                Cell::new(issue.line),
                Cell::new(&issue.rule_id),
                Cell::new(issue.kind),
                Cell::new(severity_label(issue.severity)),
                Cell::new(&issue.message),
            ]);
        }
        writeln!(writer, "{table}")?;
    }

    for fix in &report.fixes {
        writeln!(
            writer,
            "{} line {}: {}",
            "Fix".cyan().bold(),
            fix.line,
            fix.rationale
        )?;
        if !fix.original_line.is_empty() {
            writeln!(writer, "  - {}", fix.original_line.dimmed())?;
        }
        writeln!(writer, "  + {}", fix.suggested_line)?;
    }

    if let Some(execution) = &report.execution {
        let outcome = match execution.outcome {
            ExecutionOutcome::Completed => "completed".green(),
            ExecutionOutcome::Failed => "failed".red(),
            ExecutionOutcome::TimedOut => "timed out".red(),
        };
        writeln!(
            writer,
            "{} {} in {:.3}s",
            "Execution:".bold(),
            outcome,
            execution.elapsed_seconds
        )?;
        if !execution.stdout.is_empty() {
            writeln!(writer, "{}", "--- stdout ---".dimmed())?;
            write!(writer, "{}", execution.stdout)?;
        }
        if !execution.stderr.is_empty() {
            writeln!(writer, "{}", "--- stderr ---".dimmed())?;
            write!(writer, "{}", execution.stderr)?;
        }
        if !execution.error.is_empty() {
            writeln!(writer, "{} {}", "Error:".red().bold(), execution.error)?;
        }
    }

    Ok(())
}

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::High => "high".red().bold().to_string(),
        Severity::Medium => "medium".yellow().to_string(),
        Severity::Low => "low".to_string(),
    }
}

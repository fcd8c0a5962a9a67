//! Shared entry point logic used by every binary front-end.

use crate::cli::Cli;
use crate::config::Config;
use crate::output::print_report;
use crate::pipeline::ReviewPipeline;
use crate::report::Severity;
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::Read;
use std::path::Path;

/// Parses CLI arguments (without the program name), runs one review, prints
/// the report, and returns the process exit code.
///
/// Exit code 1 signals that a high-severity issue was found; parse errors of
/// the CLI itself return clap's conventional code 2.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    let argv = std::iter::once("pytriage".to_owned()).chain(args);
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders help/version/usage errors itself.
            e.print()?;
            return Ok(if e.use_stderr() { 2 } else { 0 });
        }
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::discover(Path::new(".")),
    };

    // CLI flags override file configuration.
    if cli.exec {
        config.pytriage.execute = Some(true);
    }
    if let Some(secs) = cli.timeout {
        config.pytriage.timeout_seconds = Some(secs);
    }
    if let Some(mb) = cli.memory_limit {
        config.pytriage.memory_limit_mb = Some(mb);
    }
    if let Some(python) = &cli.python {
        config.pytriage.python = Some(python.clone());
    }

    let source = if cli.path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read source from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cli.path)
            .with_context(|| format!("failed to read {}", cli.path.display()))?
    };

    let pipeline = ReviewPipeline::from_config(&config);
    let report = pipeline.review(&source);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let stdout = std::io::stdout();
        print_report(&mut stdout.lock(), &report)?;
    }

    Ok(i32::from(report.has_severity(Severity::High)))
}

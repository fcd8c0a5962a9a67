//! Command-line interface arguments.

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.pytriage.toml):
  Create this file in your working directory to set defaults.

  [pytriage]
  execute = false            # Run snippets in the sandbox
  timeout_seconds = 5        # Sandbox wall-clock limit
  memory_limit_mb = 100      # Advisory sandbox memory ceiling
  max_iterations = 25000000  # Sandbox line-event ceiling
  python = \"python3\"         # Sandbox interpreter
  respect_suppressions = true  # Honor `# noqa` comments
";

/// Deterministic review pipeline for Python snippets: structure, issues,
/// fixes, and optional sandboxed execution.
#[derive(Parser, Debug)]
#[command(name = "pytriage", version, after_help = CONFIG_HELP)]
pub struct Cli {
    /// Python file to review, or `-` to read from stdin.
    pub path: PathBuf,

    /// Output the raw JSON report.
    #[arg(long)]
    pub json: bool,

    /// Run the snippet in the sandbox after static analysis.
    #[arg(long)]
    pub exec: bool,

    /// Sandbox wall-clock limit in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Advisory sandbox memory ceiling in MiB.
    #[arg(long)]
    pub memory_limit: Option<u64>,

    /// Python interpreter for the sandbox subprocess.
    #[arg(long)]
    pub python: Option<String>,

    /// Explicit configuration file path.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

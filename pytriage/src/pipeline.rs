//! Pipeline wiring: parse, scan and tally, recommend, optionally execute.
//!
//! One `review` call is one independent request. The pipeline holds no
//! mutable state, so independent requests may run fully in parallel; within
//! a request the scanner and metrics collector share the read-only tree.

use crate::config::Config;
use crate::fixes::recommend_fixes;
use crate::metrics::collect_metrics;
use crate::parser::parse_source;
use crate::report::{Metrics, ReviewReport, Severity};
use crate::sandbox::{SandboxExecutor, SandboxLimits, SandboxPolicy};
use crate::scanner::scan;
use crate::utils::{get_ignored_lines, is_line_suppressed};
use std::time::Duration;

/// The full review pipeline for one source snippet.
#[derive(Debug, Clone)]
pub struct ReviewPipeline {
    executor: SandboxExecutor,
    enable_execution: bool,
    respect_suppressions: bool,
}

impl Default for ReviewPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewPipeline {
    /// Creates a pipeline with default limits and execution disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            executor: SandboxExecutor::default(),
            enable_execution: false,
            respect_suppressions: true,
        }
    }

    /// Builds a pipeline from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let c = &config.pytriage;
        let mut limits = SandboxLimits::default();
        if let Some(secs) = c.timeout_seconds {
            limits.timeout = Duration::from_secs(secs);
        }
        if let Some(mb) = c.memory_limit_mb {
            limits.memory_limit_mb = mb;
        }
        if let Some(n) = c.max_iterations {
            limits.max_iterations = n;
        }
        let mut executor = SandboxExecutor::new(SandboxPolicy::default(), limits);
        if let Some(python) = &c.python {
            executor = executor.with_python(python.clone());
        }
        Self {
            executor,
            enable_execution: c.execute.unwrap_or(false),
            respect_suppressions: c.respect_suppressions.unwrap_or(true),
        }
    }

    /// Enables or disables the sandboxed execution stage.
    #[must_use]
    pub fn with_execution(mut self, enabled: bool) -> Self {
        self.enable_execution = enabled;
        self
    }

    /// Replaces the sandbox executor (policy, limits, interpreter).
    #[must_use]
    pub fn with_executor(mut self, executor: SandboxExecutor) -> Self {
        self.executor = executor;
        self
    }

    /// Reviews one snippet and returns the accumulated report.
    ///
    /// Parse failure short-circuits static analysis: the report carries the
    /// single syntax issue, all-zero metrics, no fixes and no execution.
    #[must_use]
    pub fn review(&self, source: &str) -> ReviewReport {
        let parsed = match parse_source(source) {
            Ok(parsed) => parsed,
            Err(issue) => {
                return ReviewReport {
                    metrics: Metrics::default(),
                    issues: vec![issue],
                    fixes: Vec::new(),
                    execution: None,
                };
            }
        };

        // Both passes only read the tree, so they can run side by side.
        let (mut issues, metrics) = rayon::join(|| scan(&parsed), || collect_metrics(&parsed));

        if self.respect_suppressions {
            let ignored = get_ignored_lines(source);
            issues.retain(|i| !is_line_suppressed(&ignored, i.line, &i.rule_id));
        }

        let fixes = recommend_fixes(&issues, source);

        // A high-severity static issue blocks execution outright.
        let blocked = issues.iter().any(|i| i.severity == Severity::High);
        let execution = if self.enable_execution && !blocked {
            let result = self.executor.execute(source);
            issues.extend(result.runtime_issues.iter().cloned());
            Some(result)
        } else {
            None
        };

        ReviewReport {
            metrics,
            issues,
            fixes,
            execution,
        }
    }
}

//! Sandboxed Executor: runs a snippet in an isolated Python subprocess.
//!
//! The isolation boundary is the process, not the restricted namespace: the
//! namespace enforces the capability policy (imports, builtins), while the
//! host enforces the wall-clock ceiling by killing the child. The child is
//! always reaped — on timeout, fault, or success — so no subprocess leaks.
//!
//! Every failure mode is reported as a value inside [`ExecutionResult`];
//! this module never raises an error to the caller.

mod harness;

use crate::constants::{SANDBOX_ALLOWED_MODULES, SANDBOX_DENIED_MODULES, SANDBOX_SAFE_BUILTINS};
use crate::report::{ExecutionOutcome, ExecutionResult, Issue, IssueKind, Severity};
use crate::rules::ids;
use harness::{policy_json, HarnessReport, HARNESS};
use std::io::{Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Capability policy for sandboxed code.
#[derive(Debug, Clone)]
pub struct SandboxPolicy {
    /// Standard-library modules the import guard permits.
    pub allowed_modules: Vec<String>,
    /// Modules refused by name with a "denied" error.
    pub denied_modules: Vec<String>,
    /// Builtins exposed to the snippet.
    pub safe_builtins: Vec<String>,
}

impl Default for SandboxPolicy {
    fn default() -> Self {
        Self {
            allowed_modules: to_owned_vec(SANDBOX_ALLOWED_MODULES),
            denied_modules: to_owned_vec(SANDBOX_DENIED_MODULES),
            safe_builtins: to_owned_vec(SANDBOX_SAFE_BUILTINS),
        }
    }
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Resource ceilings for one sandboxed run.
#[derive(Debug, Clone, Copy)]
pub struct SandboxLimits {
    /// Wall-clock limit; the child is killed when it elapses.
    pub timeout: Duration,
    /// Advisory peak-memory ceiling in MiB; exceeding it adds a `resource`
    /// issue, it does not kill the run.
    pub memory_limit_mb: u64,
    /// Trace-counted line-event ceiling, a backstop against unbounded loops.
    pub max_iterations: u64,
}

impl Default for SandboxLimits {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            memory_limit_mb: 100,
            max_iterations: 25_000_000,
        }
    }
}

/// Executes snippets under the configured policy and limits.
#[derive(Debug, Clone)]
pub struct SandboxExecutor {
    policy: SandboxPolicy,
    limits: SandboxLimits,
    python: String,
}

impl Default for SandboxExecutor {
    fn default() -> Self {
        Self::new(SandboxPolicy::default(), SandboxLimits::default())
    }
}

impl SandboxExecutor {
    /// Creates an executor with the given policy and limits, running
    /// `python3` from `PATH`.
    #[must_use]
    pub fn new(policy: SandboxPolicy, limits: SandboxLimits) -> Self {
        Self {
            policy,
            limits,
            python: "python3".to_owned(),
        }
    }

    /// Overrides the Python interpreter used for the sandbox subprocess.
    #[must_use]
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Runs the snippet and reports the outcome.
    ///
    /// Compilation happens first inside the harness; a compile failure is an
    /// `ExecutionResult` with the `SyntaxError` in `error` and nothing run.
    #[must_use]
    pub fn execute(&self, source: &str) -> ExecutionResult {
        let start = Instant::now();
        let policy = policy_json(
            &self.policy.allowed_modules,
            &self.policy.denied_modules,
            &self.policy.safe_builtins,
            self.limits.max_iterations,
        );

        let spawned = Command::new(&self.python)
            .arg("-I")
            .arg("-c")
            .arg(HARNESS)
            .arg(policy)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                return Self::failure(
                    format!("SandboxUnavailable: failed to start {}: {e}", self.python),
                    start.elapsed(),
                );
            }
        };

        // Feed the snippet on stdin; EPIPE here just means the child died
        // early and the report below will say why.
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(source.as_bytes());
        }

        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let status = wait_with_deadline(&mut child, start, self.limits.timeout);
        let raw_stdout = join_reader(stdout_reader);
        let raw_stderr = join_reader(stderr_reader);
        let elapsed = start.elapsed();

        match status {
            WaitOutcome::TimedOut => {
                let mut result = ExecutionResult {
                    outcome: ExecutionOutcome::TimedOut,
                    // The harness buffers output until it reports, so a
                    // killed run usually has nothing; keep whatever arrived.
                    stdout: raw_stdout,
                    stderr: String::new(),
                    error: format!(
                        "SandboxTimeout: execution exceeded {:.1}s wall clock",
                        self.limits.timeout.as_secs_f64()
                    ),
                    elapsed_seconds: elapsed.as_secs_f64(),
                    peak_memory_mb: None,
                    runtime_issues: Vec::new(),
                };
                result.runtime_issues.push(Issue {
                    rule_id: ids::RULE_ID_RESOURCE_LIMIT.to_owned(),
                    kind: IssueKind::Resource,
                    line: 0,
                    message: result.error.clone(),
                    severity: Severity::High,
                    weakness_id: None,
                });
                result
            }
            WaitOutcome::Exited => match HarnessReport::from_stdout(&raw_stdout) {
                Some(report) => self.from_report(&report, elapsed),
                None => Self::failure(
                    format!(
                        "SandboxFailure: harness produced no report ({})",
                        raw_stderr.trim()
                    ),
                    elapsed,
                ),
            },
            WaitOutcome::WaitFailed(msg) => {
                Self::failure(format!("SandboxFailure: {msg}"), elapsed)
            }
        }
    }

    /// Builds the result for a run whose harness report came back.
    fn from_report(&self, report: &HarnessReport, elapsed: Duration) -> ExecutionResult {
        let peak_mb = report.peak_rss_mb();
        let mut runtime_issues = Vec::new();

        if !report.error.is_empty() {
            let (rule_id, kind) = if report.error.starts_with("ResourceLimitError") {
                (ids::RULE_ID_RESOURCE_LIMIT, IssueKind::Resource)
            } else {
                (ids::RULE_ID_RUNTIME_FAULT, IssueKind::Runtime)
            };
            runtime_issues.push(Issue {
                rule_id: rule_id.to_owned(),
                kind,
                line: 0,
                message: report.error.clone(),
                severity: Severity::High,
                weakness_id: None,
            });
        }

        if peak_mb > self.limits.memory_limit_mb as f64 {
            runtime_issues.push(Issue {
                rule_id: ids::RULE_ID_MEMORY_ADVISORY.to_owned(),
                kind: IssueKind::Resource,
                line: 0,
                message: format!(
                    "High memory usage: {peak_mb:.0}MB exceeds the advisory limit of {}MB",
                    self.limits.memory_limit_mb
                ),
                severity: Severity::Medium,
                weakness_id: None,
            });
        }

        ExecutionResult {
            outcome: if report.error.is_empty() {
                ExecutionOutcome::Completed
            } else {
                ExecutionOutcome::Failed
            },
            stdout: report.stdout.clone(),
            stderr: report.stderr.clone(),
            error: report.error.clone(),
            elapsed_seconds: elapsed.as_secs_f64(),
            peak_memory_mb: Some(peak_mb),
            runtime_issues,
        }
    }

    /// Builds a failed result for host-side faults (spawn/wait problems).
    fn failure(error: String, elapsed: Duration) -> ExecutionResult {
        let issue = Issue {
            rule_id: ids::RULE_ID_RUNTIME_FAULT.to_owned(),
            kind: IssueKind::Runtime,
            line: 0,
            message: error.clone(),
            severity: Severity::High,
            weakness_id: None,
        };
        ExecutionResult {
            outcome: ExecutionOutcome::Failed,
            stdout: String::new(),
            stderr: String::new(),
            error,
            elapsed_seconds: elapsed.as_secs_f64(),
            peak_memory_mb: None,
            runtime_issues: vec![issue],
        }
    }
}

enum WaitOutcome {
    Exited,
    TimedOut,
    WaitFailed(String),
}

/// Polls the child until it exits or the deadline passes; on timeout the
/// child is killed and reaped before returning, guaranteeing teardown.
fn wait_with_deadline(child: &mut Child, start: Instant, timeout: Duration) -> WaitOutcome {
    loop {
        match child.try_wait() {
            Ok(Some(_status)) => return WaitOutcome::Exited,
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return WaitOutcome::TimedOut;
                }
                thread::sleep(Duration::from_millis(10));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return WaitOutcome::WaitFailed(format!("wait on sandbox child failed: {e}"));
            }
        }
    }
}

/// Drains a child stream on its own thread so the child never blocks on a
/// full pipe while the host is polling.
fn spawn_reader<R>(stream: Option<R>) -> Option<thread::JoinHandle<String>>
where
    R: Read + Send + 'static,
{
    stream.map(|mut stream| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stream.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn join_reader(handle: Option<thread::JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

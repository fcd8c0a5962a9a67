//! The Python-side harness run inside the sandbox subprocess.
//!
//! The harness compiles the snippet, executes it under an allow-listed
//! builtin namespace with a guarded `__import__`, captures stdout/stderr in
//! memory, and emits a single JSON report on the real stdout. The host
//! parses that report; it never shares streams with the snippet.

use serde::Deserialize;
use serde_json::json;

/// Python program passed to `python3 -c`. Receives one argv entry: the JSON
/// policy document produced by [`policy_json`].
pub(crate) const HARNESS: &str = r#"
import sys, io, json, builtins

def _run():
    cfg = json.loads(sys.argv[1])
    source = sys.stdin.read()
    report = {"stdout": "", "stderr": "", "error": "", "peak_rss_kb": 0, "line_events": 0}

    try:
        code = compile(source, "<sandbox>", "exec")
    except SyntaxError as exc:
        report["error"] = "SyntaxError: %s" % exc
        print(json.dumps(report))
        return

    allowed = set(cfg["allowed_modules"])
    denied = set(cfg["denied_modules"])
    real_import = builtins.__import__

    def guarded_import(name, globals=None, locals=None, fromlist=(), level=0):
        root = name.split(".")[0]
        if root in denied:
            raise ImportError("module '%s' is denied in the sandbox" % root)
        if root not in allowed:
            raise ImportError("module '%s' is not permitted in the sandbox" % root)
        return real_import(name, globals, locals, fromlist, level)

    safe = {}
    for name in cfg["safe_builtins"]:
        if hasattr(builtins, name):
            safe[name] = getattr(builtins, name)
    safe["__import__"] = guarded_import
    scope = {"__builtins__": safe, "__name__": "__main__"}

    class ResourceLimitError(Exception):
        pass

    budget = int(cfg["max_iterations"])
    counter = {"events": 0}

    def tracer(frame, event, arg):
        if event == "line":
            counter["events"] += 1
            if counter["events"] > budget:
                raise ResourceLimitError("iteration budget of %d line events exceeded" % budget)
        return tracer

    out, err = io.StringIO(), io.StringIO()
    real_out, real_err = sys.stdout, sys.stderr
    sys.stdout, sys.stderr = out, err
    sys.settrace(tracer)
    try:
        exec(code, scope)
    except BaseException as exc:
        report["error"] = "%s: %s" % (type(exc).__name__, exc)
    finally:
        sys.settrace(None)
        sys.stdout, sys.stderr = real_out, real_err

    report["stdout"] = out.getvalue()
    report["stderr"] = err.getvalue()
    report["line_events"] = counter["events"]
    try:
        import resource as _resource
        report["peak_rss_kb"] = _resource.getrusage(_resource.RUSAGE_SELF).ru_maxrss
    except Exception:
        pass
    print(json.dumps(report))

_run()
"#;

/// Report document emitted by the harness on its stdout.
#[derive(Debug, Deserialize)]
pub(crate) struct HarnessReport {
    /// Output captured from the snippet's stdout.
    pub stdout: String,
    /// Output captured from the snippet's stderr.
    pub stderr: String,
    /// `<ExceptionKind>: <message>` of the fault, empty on success.
    pub error: String,
    /// Peak resident set size as reported by `getrusage`.
    #[serde(default)]
    pub peak_rss_kb: u64,
    /// Trace-counted line events, for diagnostics.
    #[serde(default)]
    pub line_events: u64,
}

impl HarnessReport {
    /// Parses the last non-empty stdout line as a harness report.
    pub(crate) fn from_stdout(raw: &str) -> Option<Self> {
        let line = raw.lines().rev().find(|l| !l.trim().is_empty())?;
        serde_json::from_str(line).ok()
    }

    /// Peak RSS in MiB. `ru_maxrss` is KiB on Linux and bytes on macOS.
    pub(crate) fn peak_rss_mb(&self) -> f64 {
        if cfg!(target_os = "macos") {
            self.peak_rss_kb as f64 / (1024.0 * 1024.0)
        } else {
            self.peak_rss_kb as f64 / 1024.0
        }
    }
}

/// Serializes the sandbox policy for the harness argv.
pub(crate) fn policy_json(
    allowed_modules: &[String],
    denied_modules: &[String],
    safe_builtins: &[String],
    max_iterations: u64,
) -> String {
    json!({
        "allowed_modules": allowed_modules,
        "denied_modules": denied_modules,
        "safe_builtins": safe_builtins,
        "max_iterations": max_iterations,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_last_json_line() {
        let raw = "ignored noise\n{\"stdout\":\"hi\\n\",\"stderr\":\"\",\"error\":\"\"}\n";
        let report = HarnessReport::from_stdout(raw).unwrap();
        assert_eq!(report.stdout, "hi\n");
        assert!(report.error.is_empty());
    }

    #[test]
    fn missing_report_is_none() {
        assert!(HarnessReport::from_stdout("").is_none());
        assert!(HarnessReport::from_stdout("not json\n").is_none());
    }
}

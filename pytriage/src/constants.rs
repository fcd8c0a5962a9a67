//! Shared constants: detection tables, sandbox policy defaults, and regexes.

use regex::Regex;
use std::sync::OnceLock;

/// Name of the configuration file searched for in the working directory.
pub const CONFIG_FILENAME: &str = ".pytriage.toml";

/// Substrings that mark an assignment target as secret-like.
///
/// Matching is a case-insensitive substring check against the target name.
pub static SECRET_NAME_PARTS: &[&str] = &["password", "secret", "key", "token"];

/// Standard-library modules the sandbox permits importing.
///
/// Arithmetic, collections, date/time, JSON and iteration helpers are safe;
/// everything else is refused by the import guard.
pub static SANDBOX_ALLOWED_MODULES: &[&str] = &[
    "math",
    "cmath",
    "random",
    "datetime",
    "json",
    "typing",
    "collections",
    "itertools",
    "functools",
    "string",
    "statistics",
    "decimal",
    "fractions",
    "heapq",
    "bisect",
];

/// Modules the sandbox explicitly refuses, named so the error message can
/// say "denied" rather than "unknown".
///
/// Process control, sockets, HTTP clients, filesystem paths and interpreter
/// introspection all live here.
pub static SANDBOX_DENIED_MODULES: &[&str] = &[
    "os",
    "sys",
    "subprocess",
    "importlib",
    "pathlib",
    "shutil",
    "socket",
    "requests",
    "urllib",
    "http",
    "ftplib",
    "telnetlib",
    "smtplib",
    "ctypes",
    "multiprocessing",
    "threading",
    "signal",
    "resource",
];

/// Builtins exposed to sandboxed code.
///
/// Deliberately excludes `open`, `input`, `eval`, `exec`, `compile`,
/// `__import__` (replaced by the guard), and the introspection family
/// (`globals`, `locals`, `vars`, `getattr`, ...).
pub static SANDBOX_SAFE_BUILTINS: &[&str] = &[
    "abs",
    "all",
    "any",
    "ascii",
    "bin",
    "bool",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "complex",
    "dict",
    "divmod",
    "enumerate",
    "filter",
    "float",
    "format",
    "frozenset",
    "hash",
    "hex",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "list",
    "map",
    "max",
    "min",
    "next",
    "object",
    "oct",
    "ord",
    "pow",
    "print",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "slice",
    "sorted",
    "str",
    "sum",
    "tuple",
    "type",
    "zip",
    // Class statements compile to a __build_class__ call.
    "__build_class__",
    // Exceptions sandboxed code may legitimately raise or catch.
    "BaseException",
    "Exception",
    "ArithmeticError",
    "AttributeError",
    "IndexError",
    "KeyError",
    "LookupError",
    "NameError",
    "OverflowError",
    "RuntimeError",
    "StopIteration",
    "TypeError",
    "ValueError",
    "ZeroDivisionError",
];

/// Regex for inline suppression comments.
///
/// Matches `# noqa` (suppress everything on the line) and
/// `# noqa: PYT-S001, PYT-T001` (suppress specific rules).
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_suppression_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(?i)#\s*noqa(?::\s*([A-Za-z0-9,\-\s]+))?")
            .expect("Invalid suppression regex pattern")
    })
}

/// Regex extracting `byte range X..Y` spans from ruff parse errors.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_byte_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(?:at )?byte range (\d+)\.\.(\d+)").expect("Invalid byte range regex pattern")
    })
}

pub use get_byte_range_re as BYTE_RANGE_RE;
pub use get_suppression_re as SUPPRESSION_RE;

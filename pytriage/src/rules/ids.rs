//! Centralized rule IDs for PyTriage.

/// Parser: source failed to parse.
pub const RULE_ID_SYNTAX: &str = "PYT-P001";

/// Logical: exception handler with no declared exception type.
pub const RULE_ID_BARE_EXCEPT: &str = "PYT-L001";

/// Security: call to a dynamic-evaluation primitive (`eval`/`exec`).
pub const RULE_ID_DYNAMIC_EVAL: &str = "PYT-S001";
/// Security: secret-named assignment target with a literal value.
pub const RULE_ID_HARDCODED_SECRET: &str = "PYT-S002";
/// Security: `execute`/`executemany` call with a dynamically built argument.
pub const RULE_ID_SQL_INJECTION: &str = "PYT-S003";

/// Style: call to the `print` primitive.
pub const RULE_ID_PRINT_CALL: &str = "PYT-T001";
/// Style: identity comparison against a boolean/None literal.
pub const RULE_ID_LITERAL_IDENTITY: &str = "PYT-T002";

/// Runtime: uncaught fault raised during sandboxed execution.
pub const RULE_ID_RUNTIME_FAULT: &str = "PYT-R001";
/// Resource: wall-clock or iteration ceiling hit in the sandbox.
pub const RULE_ID_RESOURCE_LIMIT: &str = "PYT-R002";
/// Resource: advisory memory ceiling exceeded.
pub const RULE_ID_MEMORY_ADVISORY: &str = "PYT-R003";

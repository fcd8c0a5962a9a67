//! Configuration loading for the review pipeline.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for PyTriage.
    pub pytriage: PyTriageConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for PyTriage.
pub struct PyTriageConfig {
    /// Whether to run the snippet in the sandbox after static analysis.
    pub execute: Option<bool>,
    /// Wall-clock limit for sandboxed execution, in seconds.
    pub timeout_seconds: Option<u64>,
    /// Advisory peak-memory ceiling for the sandbox, in MiB.
    pub memory_limit_mb: Option<u64>,
    /// Line-event ceiling for the sandbox trace hook.
    pub max_iterations: Option<u64>,
    /// Python interpreter used for the sandbox subprocess.
    pub python: Option<String>,
    /// Whether `# noqa` comments suppress findings on their line.
    pub respect_suppressions: Option<bool>,
}

impl Config {
    /// Loads configuration from an explicit TOML file.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `.pytriage.toml` from the given directory, falling back to
    /// defaults when the file is missing or unreadable.
    #[must_use]
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load_from_path(&candidate).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

//! Spec pipeline config: where reports are written.

use std::path::PathBuf;

/// Requirement used when none is given on the command line.
pub const DEFAULT_REQUIREMENT: &str =
    "Build a system that recommends products to users based on browsing history.";
pub const DEFAULT_OUTPUT_DIR: &str = "Outputs";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecConfig {
    /// Root directory for `{sanitized title}/specification.md`.
    pub output_dir: PathBuf,
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SpecConfig {
    /// `SPEC_OUTPUT_DIR` overrides the default `Outputs`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("SPEC_OUTPUT_DIR").filter(|v| !v.trim().is_empty()) {
            Some(dir) => Self {
                output_dir: PathBuf::from(dir),
            },
            None => Self::default(),
        }
    }
}

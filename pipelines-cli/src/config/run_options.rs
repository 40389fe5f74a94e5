//! Optional overrides for a run (CLI args or programmatic).
//!
//! Used by [`LlmConfig::from_env_with_options`](super::LlmConfig::from_env_with_options)
//! and the run entry points. Only set fields override the env-based config.

use std::path::PathBuf;

use flowgraph::LlmProvider;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    /// Debug-level node logging.
    pub verbose: bool,
    pub provider: Option<LlmProvider>,
    pub model: Option<String>,
    /// Spec report root (overrides `SPEC_OUTPUT_DIR`).
    pub output_dir: Option<PathBuf>,
}

//! Configuration for a CLI run.
//!
//! Re-exports [`LlmConfig`], [`RunOptions`] and config [`Error`].

mod llm_config;
mod run_options;

pub use llm_config::LlmConfig;
pub use run_options::RunOptions;

/// Error type for config and run entry points.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

//! Run entry points for the three commands.
//!
//! The `run_*` functions load `.env`, resolve config from env plus [`RunOptions`] and run;
//! the `*_with` variants take already-built services so tests can inject fakes.

mod content;
mod setup_pages;
mod spec;

use std::sync::Arc;

use flowgraph::{ChatOpenAI, LlmClient};
use tracing_subscriber::EnvFilter;

use crate::config::LlmConfig;

pub use content::{run_content, run_content_with};
pub use setup_pages::run_setup_pages;
pub use spec::{run_spec, run_spec_with};

/// Builds the chat client for the configured provider.
pub fn build_llm(config: &LlmConfig) -> Arc<dyn LlmClient> {
    tracing::debug!(config = %config.summary(), "building LLM client");
    Arc::new(ChatOpenAI::for_provider(
        config.provider,
        &config.api_key,
        config.api_base.as_deref(),
        config.model.clone(),
    ))
}

/// Installs the stderr subscriber. `RUST_LOG` wins; otherwise `debug` when verbose, else `info`.
///
/// A second call is a no-op.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

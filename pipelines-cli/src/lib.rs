//! pipelines-cli library: reusable run logic behind the `pipelines` binary.
//!
//! Reads LLM and pipeline config from `.env`, builds the content or spec graph with
//! per-node logging, runs it and returns the final state.
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let state = pipelines_cli::run_content(&RunOptions::default()).await?;
//! println!("{}", state.publish_url.unwrap_or_default());
//! ```

mod cli;
mod config;
mod middleware;
mod run;

pub use cli::{Cli, Command};
pub use config::{Error, LlmConfig, RunOptions};
pub use middleware::{LoggingMiddleware, WithNodeLogging};
pub use run::{
    build_llm, init_tracing, run_content, run_content_with, run_setup_pages, run_spec,
    run_spec_with,
};

#[cfg(test)]
mod tests;

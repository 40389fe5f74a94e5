//! `spec`: requirement → analysis → modules → schemas → pseudocode → Markdown report.

use std::path::PathBuf;
use std::sync::Arc;

use flowgraph::LlmClient;
use spec_pipeline::{build_graph, SpecConfig, SpecState};

use crate::config::{Error, LlmConfig, RunOptions};
use crate::middleware::WithNodeLogging;

use super::build_llm;

/// Runs the spec pipeline for `requirement`. The report root is `options.output_dir`,
/// else `SPEC_OUTPUT_DIR`, else `Outputs`.
pub async fn run_spec(requirement: &str, options: &RunOptions) -> Result<SpecState, Error> {
    dotenv::dotenv().ok();
    let llm_config = LlmConfig::from_env_with_options(options)?;
    let output_dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => SpecConfig::from_env().output_dir,
    };
    run_spec_with(build_llm(&llm_config), requirement, output_dir).await
}

pub async fn run_spec_with(
    llm: Arc<dyn LlmClient>,
    requirement: &str,
    output_dir: impl Into<PathBuf>,
) -> Result<SpecState, Error> {
    let compiled = build_graph(llm, output_dir).with_node_logging().compile()?;
    let state = compiled.invoke(SpecState::new(requirement)).await?;
    Ok(state)
}

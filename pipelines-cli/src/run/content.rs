//! `blog`: feed item → keywords → context → blog post → GitHub Pages.

use content_pipeline::{build_graph, BlogState, ContentConfig, ContentServices};

use crate::config::{Error, LlmConfig, RunOptions};
use crate::middleware::WithNodeLogging;

use super::build_llm;

/// Runs the content pipeline with config from env and `options`, returns final state.
pub async fn run_content(options: &RunOptions) -> Result<BlogState, Error> {
    dotenv::dotenv().ok();
    let llm_config = LlmConfig::from_env_with_options(options)?;
    let content_config = ContentConfig::from_env()?;
    let services = ContentServices::from_config(&content_config, build_llm(&llm_config))?;
    run_content_with(services).await
}

/// Compiles the content graph over `services` with node logging and runs it from an empty state.
pub async fn run_content_with(services: ContentServices) -> Result<BlogState, Error> {
    let compiled = build_graph(services).with_node_logging().compile()?;
    let state = compiled.invoke(BlogState::default()).await?;
    Ok(state)
}

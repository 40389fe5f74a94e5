//! Command-line surface of the `pipelines` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flowgraph::LlmProvider;
use spec_pipeline::DEFAULT_REQUIREMENT;

use crate::config::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "pipelines")]
#[command(about = "LLM automation pipelines: product blog posts and technical specifications")]
pub struct Cli {
    /// Log every node at debug level (RUST_LOG still wins when set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// LLM backend: openai or groq (overrides LLM_PROVIDER).
    #[arg(long, global = true, value_name = "NAME")]
    pub provider: Option<LlmProvider>,

    /// Model name (overrides LLM_MODEL).
    #[arg(long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Turn the first deal of the RSS feed into a published blog post.
    Blog,
    /// Turn a business requirement into a Markdown technical specification.
    Spec {
        /// Directory the report folder is written under (overrides SPEC_OUTPUT_DIR).
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Requirement text; words are joined with spaces.
        #[arg(trailing_var_arg = true)]
        requirement: Vec<String>,
    },
    /// Create or update the Jekyll site files of the publish repository.
    SetupPages,
}

impl Cli {
    /// Overrides taken from the command line.
    pub fn run_options(&self) -> RunOptions {
        let output_dir = match &self.command {
            Command::Spec { output_dir, .. } => output_dir.clone(),
            _ => None,
        };
        RunOptions {
            verbose: self.verbose,
            provider: self.provider,
            model: self.model.clone(),
            output_dir,
        }
    }
}

impl Command {
    /// Requirement for `spec`: the joined words, or the default when none are given.
    pub fn requirement(&self) -> Option<String> {
        match self {
            Command::Spec { requirement, .. } => {
                let joined = requirement.join(" ").trim().to_string();
                if joined.is_empty() {
                    Some(DEFAULT_REQUIREMENT.to_string())
                } else {
                    Some(joined)
                }
            }
            _ => None,
        }
    }
}

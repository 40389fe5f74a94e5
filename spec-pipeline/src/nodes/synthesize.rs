use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{complete_structured, FlowError, LlmClient, Node};

use crate::models::TechnicalSpecification;
use crate::prompts::{pretty, synthesize_prompt};
use crate::report::save_report;
use crate::state::SpecState;

pub const TEMPERATURE: f32 = 0.3;

/// Produces the Markdown specification from all earlier outputs and saves it under
/// `output_dir`. A write failure aborts the run.
pub struct SynthesizeReportNode {
    llm: Arc<dyn LlmClient>,
    output_dir: PathBuf,
}

impl SynthesizeReportNode {
    pub fn new(llm: Arc<dyn LlmClient>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            llm,
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl Node<SpecState> for SynthesizeReportNode {
    fn id(&self) -> &str {
        "synthesize_report"
    }

    async fn run(&self, mut state: SpecState) -> Result<SpecState, FlowError> {
        let prompt = synthesize_prompt(
            &state.requirement,
            &pretty(state.analysis()?),
            &pretty(state.modules()?),
            &pretty(state.schemas()?),
            &pretty(state.pseudocode()?),
        );
        let spec: TechnicalSpecification =
            complete_structured(self.llm.as_ref(), &prompt, TEMPERATURE).await?;

        let path = save_report(&self.output_dir, state.title()?, &spec.markdown_content)
            .await
            .map_err(|e| {
                FlowError::ExecutionFailed(format!(
                    "failed to save report under {}: {}",
                    self.output_dir.display(),
                    e
                ))
            })?;
        tracing::info!(path = %path.display(), "report saved");
        state.final_report = Some(spec.markdown_content);
        state.report_path = Some(path);
        Ok(state)
    }
}

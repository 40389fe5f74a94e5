use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{complete_structured, FlowError, LlmClient, Node};

use crate::models::BusinessAnalysis;
use crate::prompts::analyze_prompt;
use crate::state::SpecState;

pub const TEMPERATURE: f32 = 0.3;

/// Extracts title, goal, actors, expectations and constraints from the requirement.
pub struct AnalyzeRequirementsNode {
    llm: Arc<dyn LlmClient>,
}

impl AnalyzeRequirementsNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<SpecState> for AnalyzeRequirementsNode {
    fn id(&self) -> &str {
        "analyze_requirements"
    }

    async fn run(&self, mut state: SpecState) -> Result<SpecState, FlowError> {
        let analysis: BusinessAnalysis = complete_structured(
            self.llm.as_ref(),
            &analyze_prompt(&state.requirement),
            TEMPERATURE,
        )
        .await?;
        tracing::info!(title = %analysis.title, "analysis complete");
        state.title = Some(analysis.title.clone());
        state.analysis = Some(analysis);
        Ok(state)
    }
}

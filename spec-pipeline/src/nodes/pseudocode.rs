use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{complete_structured, FlowError, LlmClient, Node};

use crate::models::PseudoCode;
use crate::prompts::{pretty, pseudocode_prompt};
use crate::state::SpecState;

pub const TEMPERATURE: f32 = 0.6;

/// Writes pseudo-code for the main workflows over the designed modules and schemas.
pub struct GeneratePseudocodeNode {
    llm: Arc<dyn LlmClient>,
}

impl GeneratePseudocodeNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<SpecState> for GeneratePseudocodeNode {
    fn id(&self) -> &str {
        "generate_pseudocode"
    }

    async fn run(&self, mut state: SpecState) -> Result<SpecState, FlowError> {
        let prompt = pseudocode_prompt(
            &pretty(state.analysis()?),
            &pretty(state.modules()?),
            &pretty(state.schemas()?),
        );
        let pseudocode: PseudoCode =
            complete_structured(self.llm.as_ref(), &prompt, TEMPERATURE).await?;
        tracing::info!(count = pseudocode.sections.len(), "pseudo-code sections");
        state.pseudocode = Some(pseudocode);
        Ok(state)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{complete_structured, FlowError, LlmClient, Node};

use crate::models::ModuleDecomposition;
use crate::prompts::{decompose_prompt, pretty};
use crate::state::SpecState;

pub const TEMPERATURE: f32 = 0.5;

/// Breaks the analyzed system into modules with responsibilities and dependencies.
pub struct DecomposeModulesNode {
    llm: Arc<dyn LlmClient>,
}

impl DecomposeModulesNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<SpecState> for DecomposeModulesNode {
    fn id(&self) -> &str {
        "decompose_modules"
    }

    async fn run(&self, mut state: SpecState) -> Result<SpecState, FlowError> {
        let prompt = decompose_prompt(&pretty(state.analysis()?));
        let modules: ModuleDecomposition =
            complete_structured(self.llm.as_ref(), &prompt, TEMPERATURE).await?;
        tracing::info!(count = modules.modules.len(), "modules identified");
        state.modules = Some(modules);
        Ok(state)
    }
}

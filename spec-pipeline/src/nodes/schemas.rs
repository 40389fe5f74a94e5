use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{complete_structured, FlowError, LlmClient, Node};

use crate::models::DataSchemas;
use crate::prompts::{pretty, schema_prompt};
use crate::state::SpecState;

pub const TEMPERATURE: f32 = 0.4;

pub struct DesignSchemasNode {
    llm: Arc<dyn LlmClient>,
}

impl DesignSchemasNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<SpecState> for DesignSchemasNode {
    fn id(&self) -> &str {
        "design_schemas"
    }

    async fn run(&self, mut state: SpecState) -> Result<SpecState, FlowError> {
        let prompt = schema_prompt(&pretty(state.analysis()?), &pretty(state.modules()?));
        let schemas: DataSchemas =
            complete_structured(self.llm.as_ref(), &prompt, TEMPERATURE).await?;
        tracing::info!(count = schemas.schemas.len(), "schemas designed");
        state.schemas = Some(schemas);
        Ok(state)
    }
}

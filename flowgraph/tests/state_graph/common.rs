//! Shared test state and nodes for the state_graph integration tests.

use async_trait::async_trait;
use flowgraph::{FlowError, Node};

/// Small pipeline-like state: optional fields filled in by successive nodes.
#[derive(Clone, Debug, Default)]
pub struct PostState {
    pub title: Option<String>,
    pub steps: Vec<String>,
}

/// Appends its id to `steps`; sets `title` when configured.
pub struct AppendNode {
    id: &'static str,
    title: Option<&'static str>,
}

impl AppendNode {
    pub fn new(id: &'static str) -> Self {
        Self { id, title: None }
    }

    pub fn with_title(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title: Some(title),
        }
    }
}

#[async_trait]
impl Node<PostState> for AppendNode {
    fn id(&self) -> &str {
        self.id
    }

    async fn run(&self, mut state: PostState) -> Result<PostState, FlowError> {
        state.steps.push(self.id.to_string());
        if let Some(title) = self.title {
            state.title = Some(title.to_string());
        }
        Ok(state)
    }
}

/// Requires `title` to be set by an earlier node.
pub struct RequireTitleNode;

#[async_trait]
impl Node<PostState> for RequireTitleNode {
    fn id(&self) -> &str {
        "require_title"
    }

    async fn run(&self, mut state: PostState) -> Result<PostState, FlowError> {
        let title = state.title.clone().ok_or(FlowError::MissingField("title"))?;
        state.steps.push(format!("saw {}", title));
        Ok(state)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{FlowError, Node};

use crate::search::{gather_context, SearchClient};
use crate::state::BlogState;

/// Collects review and specification snippets for the post; see [`gather_context`].
pub struct SearchProductNode {
    search: Option<Arc<dyn SearchClient>>,
}

impl SearchProductNode {
    pub fn new(search: Option<Arc<dyn SearchClient>>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Node<BlogState> for SearchProductNode {
    fn id(&self) -> &str {
        "search_product"
    }

    async fn run(&self, mut state: BlogState) -> Result<BlogState, FlowError> {
        let context = gather_context(
            self.search.as_deref(),
            state.normalized_name()?,
            state.product_description()?,
        )
        .await;
        tracing::info!(chars = context.chars().count(), "gathered search data");
        state.search_results = Some(context);
        Ok(state)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{parse_or_fallback, CallOptions, FlowError, LlmClient, Message, Node, ParseOutcome};
use serde::Deserialize;

use crate::prompts::normalize_prompt;
use crate::state::BlogState;

/// Core product name and category extracted from a deal title.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NormalizedProduct {
    pub name: String,
    pub category: String,
}

/// Parses the model answer; unparseable output falls back to the first word of the
/// lowercased title and the category `electronics`.
pub fn parse_normalized(raw: &str, title: &str) -> ParseOutcome<NormalizedProduct> {
    parse_or_fallback(raw, || NormalizedProduct {
        name: title
            .to_lowercase()
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
        category: "electronics".to_string(),
    })
}

/// Asks the model for the short product name used as keyword seed and search query.
pub struct NormalizeKeywordNode {
    llm: Arc<dyn LlmClient>,
}

impl NormalizeKeywordNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<BlogState> for NormalizeKeywordNode {
    fn id(&self) -> &str {
        "normalize_keyword"
    }

    async fn run(&self, mut state: BlogState) -> Result<BlogState, FlowError> {
        let title = state.product_title()?;
        let response = self
            .llm
            .invoke(&[Message::user(normalize_prompt(title))], &CallOptions::json(0.0))
            .await?;
        let product = parse_normalized(&response.content, title).into_inner();
        tracing::info!(name = %product.name, category = %product.category, "normalized");
        state.normalized_name = Some(product.name);
        state.product_category = Some(product.category);
        Ok(state)
    }
}

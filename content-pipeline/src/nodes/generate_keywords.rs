use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{parse_or_fallback, CallOptions, FlowError, LlmClient, Message, Node, ParseOutcome};
use serde_json::Value;

use crate::prompts::keyword_generation_prompt;
use crate::state::BlogState;

/// With at least this many looked-up keywords the model is not asked.
pub const KEYWORD_THRESHOLD: usize = 3;

/// `best {name}`, `{name} price`, `{name} review`, `buy {name}`.
pub fn fallback_keywords(name: &str) -> Vec<String> {
    vec![
        format!("best {}", name),
        format!("{} price", name),
        format!("{} review", name),
        format!("buy {}", name),
    ]
}

fn strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// Accepts a JSON array of strings or `{"keywords": [...]}`; other JSON is an empty list.
/// Unparseable output falls back to [`fallback_keywords`].
pub fn parse_keywords(raw: &str, name: &str) -> ParseOutcome<Vec<String>> {
    match parse_or_fallback::<Value, _>(raw, || Value::Null) {
        ParseOutcome::Parsed(value) => ParseOutcome::Parsed(match &value {
            Value::Array(items) => strings(items),
            Value::Object(map) => match map.get("keywords") {
                Some(Value::Array(items)) => strings(items),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }),
        ParseOutcome::Fallback(_) => ParseOutcome::Fallback(fallback_keywords(name)),
    }
}

/// Generates keywords with the model when the lookup found fewer than three.
pub struct GenerateKeywordsNode {
    llm: Arc<dyn LlmClient>,
}

impl GenerateKeywordsNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<BlogState> for GenerateKeywordsNode {
    fn id(&self) -> &str {
        "generate_keywords"
    }

    async fn run(&self, mut state: BlogState) -> Result<BlogState, FlowError> {
        if state.seo_keywords()?.len() >= KEYWORD_THRESHOLD {
            tracing::info!("skipping keyword generation (enough keywords)");
            return Ok(state);
        }

        let name = state.normalized_name()?;
        let prompt = keyword_generation_prompt(
            name,
            state.product_category()?,
            state.product_description()?,
        );
        let response = self
            .llm
            .invoke(&[Message::user(prompt)], &CallOptions::json(0.0))
            .await?;
        let keywords = parse_keywords(&response.content, name).into_inner();
        tracing::info!(?keywords, "generated keywords");
        state.seo_keywords = Some(keywords);
        Ok(state)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{parse_or_fallback, CallOptions, FlowError, LlmClient, Message, Node, ParseOutcome};
use serde::Deserialize;

use crate::prompts::{blog_generation_prompt, truncate_chars};
use crate::state::BlogState;

/// Title and Markdown body written by the model.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
}

/// Parses the model's post. Unparseable output becomes
/// `"{first keyword} - {title[..50]}"` / `"Discover the {title}. {description[..150]}"`.
/// Without keywords, `lead_keyword` is used in the title.
pub fn parse_blog_draft(
    raw: &str,
    lead_keyword: &str,
    product_title: &str,
    product_description: &str,
) -> ParseOutcome<BlogDraft> {
    parse_or_fallback(raw, || BlogDraft {
        title: format!("{} - {}", lead_keyword, truncate_chars(product_title, 50)),
        content: format!(
            "Discover the {}. {}",
            product_title,
            truncate_chars(product_description, 150)
        ),
    })
}

/// Has the model write a ~200-word post that uses every SEO keyword.
pub struct GenerateBlogNode {
    llm: Arc<dyn LlmClient>,
}

impl GenerateBlogNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<BlogState> for GenerateBlogNode {
    fn id(&self) -> &str {
        "generate_blog"
    }

    async fn run(&self, mut state: BlogState) -> Result<BlogState, FlowError> {
        let title = state.product_title()?;
        let description = state.product_description()?;
        let keywords = state.seo_keywords()?;
        let prompt = blog_generation_prompt(
            title,
            state.product_category()?,
            description,
            keywords,
            state.search_results()?,
        );
        let response = self
            .llm
            .invoke(&[Message::user(prompt)], &CallOptions::json(0.0))
            .await?;

        let lead = match keywords.first() {
            Some(k) => k.as_str(),
            None => state.normalized_name()?,
        };
        let draft = parse_blog_draft(&response.content, lead, title, description).into_inner();
        tracing::info!(
            title = %draft.title,
            words = draft.content.split_whitespace().count(),
            "blog generated"
        );
        state.blog_title = Some(draft.title);
        state.blog_content = Some(draft.content);
        Ok(state)
    }
}

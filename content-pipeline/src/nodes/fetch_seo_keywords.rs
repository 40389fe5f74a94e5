use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{FlowError, Node};

use crate::keywords::KeywordSource;
use crate::state::BlogState;

/// Looks up related keywords for `normalized_name`.
///
/// Never fails on the keyword service: an unconfigured source, a non-200 answer or a
/// transport error all leave `seo_keywords` empty so the model generates them instead.
pub struct FetchSeoKeywordsNode {
    source: Option<Arc<dyn KeywordSource>>,
}

impl FetchSeoKeywordsNode {
    pub fn new(source: Option<Arc<dyn KeywordSource>>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Node<BlogState> for FetchSeoKeywordsNode {
    fn id(&self) -> &str {
        "fetch_seo_keywords"
    }

    async fn run(&self, mut state: BlogState) -> Result<BlogState, FlowError> {
        let name = state.normalized_name()?;
        let keywords = match &self.source {
            Some(source) => match source.related_keywords(name).await {
                Ok(keywords) => keywords,
                Err(e) => {
                    tracing::warn!(error = %e, "keyword lookup failed");
                    Vec::new()
                }
            },
            None => {
                tracing::info!("keyword source not configured, will use model generation");
                Vec::new()
            }
        };
        tracing::info!(count = keywords.len(), ?keywords, "seo keywords");
        state.seo_keywords = Some(keywords);
        Ok(state)
    }
}

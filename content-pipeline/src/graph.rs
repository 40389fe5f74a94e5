//! Pipeline A assembly: services in, seven-node `StateGraph<BlogState>` out.

use std::sync::Arc;

use flowgraph::{LlmClient, StateGraph};

use crate::config::{ContentConfig, SiteTarget};
use crate::error::ContentError;
use crate::feed::{FeedSource, RssFeed};
use crate::keywords::{DataForSeoClient, KeywordSource};
use crate::nodes::{
    FetchProductNode, FetchSeoKeywordsNode, GenerateBlogNode, GenerateKeywordsNode,
    NormalizeKeywordNode, PublishBlogNode, SearchProductNode,
};
use crate::publish::{ContentStore, GitHubContents};
use crate::search::{SearchClient, SerpApiClient};
use crate::state::BlogState;

/// External services used by the content pipeline.
///
/// `keywords` and `search` are optional: without them the pipeline relies on model-generated
/// keywords and the product description.
#[derive(Clone)]
pub struct ContentServices {
    pub llm: Arc<dyn LlmClient>,
    pub feed: Arc<dyn FeedSource>,
    pub keywords: Option<Arc<dyn KeywordSource>>,
    pub search: Option<Arc<dyn SearchClient>>,
    pub store: Arc<dyn ContentStore>,
    pub site: SiteTarget,
}

impl ContentServices {
    /// HTTP-backed services for `config`, sharing the given model client.
    pub fn from_config(config: &ContentConfig, llm: Arc<dyn LlmClient>) -> Result<Self, ContentError> {
        let keywords = match &config.dataforseo {
            Some(credentials) => {
                Some(Arc::new(DataForSeoClient::new(credentials.clone())?) as Arc<dyn KeywordSource>)
            }
            None => None,
        };
        let search = match &config.serpapi_key {
            Some(key) => Some(Arc::new(SerpApiClient::new(key.clone())?) as Arc<dyn SearchClient>),
            None => None,
        };
        Ok(Self {
            llm,
            feed: Arc::new(RssFeed::new(config.feed_url.clone())),
            keywords,
            search,
            store: Arc::new(GitHubContents::new(config.site.clone())),
            site: config.site.clone(),
        })
    }
}

/// Builds the uncompiled pipeline graph
/// `fetch_product → … → publish_blog`; attach middleware, then `compile()`.
pub fn build_graph(services: ContentServices) -> StateGraph<BlogState> {
    let mut graph = StateGraph::new();
    graph.add_sequence(vec![
        Arc::new(FetchProductNode::new(services.feed)),
        Arc::new(NormalizeKeywordNode::new(services.llm.clone())),
        Arc::new(FetchSeoKeywordsNode::new(services.keywords)),
        Arc::new(GenerateKeywordsNode::new(services.llm.clone())),
        Arc::new(SearchProductNode::new(services.search)),
        Arc::new(GenerateBlogNode::new(services.llm)),
        Arc::new(PublishBlogNode::new(services.store, services.site)),
    ]);
    graph
}

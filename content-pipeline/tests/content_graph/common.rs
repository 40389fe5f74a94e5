//! Shared fakes for the content pipeline integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use content_pipeline::publish::InMemoryContentStore;
use content_pipeline::{
    ContentError, ContentServices, FeedItem, FeedSource, KeywordSource, SearchClient,
    SearchResponse, SiteTarget,
};
use flowgraph::MockLlm;

pub const NORMALIZE_JSON: &str = r#"{"name": "apple airpods pro", "category": "wireless earbuds"}"#;
pub const KEYWORDS_JSON: &str =
    r#"{"keywords": ["airpods pro deal", "best wireless earbuds", "airpods pro price", "buy airpods pro"]}"#;
pub const BLOG_JSON: &str = r#"{"title": "Airpods Pro Deal: Best Wireless Earbuds at $189", "content": "Looking for an airpods pro deal? These best wireless earbuds drop to a great airpods pro price, so buy airpods pro today."}"#;

/// Feed that always returns the same item, or always fails.
pub struct FixedFeed(pub Option<FeedItem>);

impl FixedFeed {
    pub fn airpods() -> Self {
        Self(Some(FeedItem {
            title: "Apple AirPods Pro 2 for $189 + free shipping".into(),
            description: "Active noise cancellation, USB-C MagSafe case, up to 6 hours of listening.".into(),
        }))
    }
}

#[async_trait]
impl FeedSource for FixedFeed {
    async fn first_item(&self) -> Result<FeedItem, ContentError> {
        self.0.clone().ok_or(ContentError::EmptyFeed)
    }
}

/// Keyword source returning a fixed list (or an error), recording the seeds it saw.
pub struct FixedKeywords {
    pub answer: Result<Vec<String>, u16>,
    pub seeds: Mutex<Vec<String>>,
}

impl FixedKeywords {
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            answer: Ok(keywords.iter().map(|k| k.to_string()).collect()),
            seeds: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            answer: Err(status),
            seeds: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl KeywordSource for FixedKeywords {
    async fn related_keywords(&self, seed: &str) -> Result<Vec<String>, ContentError> {
        self.seeds.lock().unwrap().push(seed.to_string());
        self.answer.clone().map_err(|status| ContentError::Api {
            service: "dataforseo",
            status,
            body: "unauthorized".into(),
        })
    }
}

/// Search engine answering every query with the same snippets.
pub struct FixedSearch(pub Vec<&'static str>);

#[async_trait]
impl SearchClient for FixedSearch {
    async fn search(&self, _query: &str) -> Result<SearchResponse, ContentError> {
        Ok(SearchResponse::from_snippets(self.0.clone()))
    }
}

/// Search engine whose every query fails.
pub struct FailingSearch;

#[async_trait]
impl SearchClient for FailingSearch {
    async fn search(&self, _query: &str) -> Result<SearchResponse, ContentError> {
        Err(ContentError::Api {
            service: "serpapi",
            status: 503,
            body: "unavailable".into(),
        })
    }
}

/// Wraps a search fake for [`services`].
pub fn with_search(search: impl SearchClient + 'static) -> Option<Arc<dyn SearchClient>> {
    Some(Arc::new(search))
}

pub fn site() -> SiteTarget {
    SiteTarget::new("octo", "deals-blog", "test-token")
}

/// Services wired to the given fakes; returns the store too so tests can inspect commits.
pub fn services(
    llm: Arc<MockLlm>,
    feed: FixedFeed,
    keywords: Option<Arc<FixedKeywords>>,
    search: Option<Arc<dyn SearchClient>>,
    store: Arc<InMemoryContentStore>,
) -> ContentServices {
    ContentServices {
        llm,
        feed: Arc::new(feed),
        keywords: keywords.map(|k| k as Arc<dyn KeywordSource>),
        search,
        store,
        site: site(),
    }
}

//! # content-pipeline
//!
//! Pipeline A: pick the newest deal from an RSS feed, derive SEO keywords, have a language
//! model write a short blog post about it and publish the post to a GitHub Pages repository.
//!
//! ```text
//! fetch_product → normalize_keyword → fetch_seo_keywords → generate_keywords
//!     → search_product → generate_blog → publish_blog
//! ```
//!
//! Every external system sits behind a trait ([`FeedSource`], [`KeywordSource`],
//! [`SearchClient`], [`ContentStore`], `flowgraph::LlmClient`) so the graph can be driven
//! by real HTTP clients or by in-memory fakes. Build the graph with [`build_graph`].
//!
//! Failure policy: an unreadable feed or a rejected publish aborts the run; keyword API,
//! search and model-parse failures degrade to deterministic fallbacks.

pub mod config;
pub mod error;
pub mod feed;
pub mod graph;
pub mod keywords;
pub mod nodes;
pub mod prompts;
pub mod publish;
pub mod search;
pub mod setup;
pub mod state;

pub use config::{ContentConfig, DataForSeoCredentials, SiteTarget};
pub use error::ContentError;
pub use feed::{FeedItem, FeedSource, RssFeed};
pub use graph::{build_graph, ContentServices};
pub use keywords::{DataForSeoClient, KeywordSource};
pub use publish::{ContentStore, GitHubContents, PublishedPost};
pub use search::{SearchClient, SearchResponse, SerpApiClient};
pub use setup::{setup_site, SetupOutcome};
pub use state::BlogState;

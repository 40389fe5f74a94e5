//! Pipeline A nodes, in execution order.
//!
//! Each node implements `Node<BlogState>`, reads fields written by earlier nodes and
//! performs one external action (feed fetch, model call, API call or commit).

mod fetch_product;
mod fetch_seo_keywords;
mod generate_blog;
mod generate_keywords;
mod normalize_keyword;
mod publish_blog;
mod search_product;

pub use fetch_product::FetchProductNode;
pub use fetch_seo_keywords::FetchSeoKeywordsNode;
pub use generate_blog::{parse_blog_draft, BlogDraft, GenerateBlogNode};
pub use generate_keywords::{fallback_keywords, parse_keywords, GenerateKeywordsNode, KEYWORD_THRESHOLD};
pub use normalize_keyword::{parse_normalized, NormalizeKeywordNode, NormalizedProduct};
pub use publish_blog::PublishBlogNode;
pub use search_product::SearchProductNode;

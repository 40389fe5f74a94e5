//! Deal feed: fetch the RSS document and take its first item.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use crate::error::ContentError;

/// Title and plain-text description of one feed entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
}

/// Source of the newest product deal.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns the first entry of the feed. An empty feed is `ContentError::EmptyFeed`.
    async fn first_item(&self) -> Result<FeedItem, ContentError>;
}

/// RSS feed over HTTP.
pub struct RssFeed {
    client: reqwest::Client,
    url: String,
}

impl RssFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Use a preconfigured client (timeouts, proxy).
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl FeedSource for RssFeed {
    async fn first_item(&self) -> Result<FeedItem, ContentError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ContentError::Api {
                service: "feed",
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        parse_first_item(&body)
    }
}

/// Parses an RSS document and returns its first item, HTML stripped from the description.
pub fn parse_first_item(body: &[u8]) -> Result<FeedItem, ContentError> {
    let channel = rss::Channel::read_from(body).map_err(|e| ContentError::Feed(e.to_string()))?;
    let item = channel.items().first().ok_or(ContentError::EmptyFeed)?;
    Ok(FeedItem {
        title: item.title().unwrap_or_default().to_string(),
        description: strip_html(item.description().unwrap_or_default()),
    })
}

/// Removes anything between `<` and the nearest `>` on the same line.
pub fn strip_html(text: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new("<.*?>").expect("valid tag pattern"));
    tag.replace_all(text, "").into_owned()
}

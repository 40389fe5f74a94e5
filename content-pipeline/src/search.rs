//! Web search context for the post: review and specification snippets via SerpAPI.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ContentError;

pub const SERPAPI_URL: &str = "https://serpapi.com/search.json";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
/// Organic results requested and used per query.
pub const RESULTS_PER_QUERY: usize = 3;
/// Gathered context shorter than this is replaced by the product description.
pub const MIN_CONTEXT_CHARS: usize = 50;

/// One organic search hit; only the snippet is used.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct OrganicResult {
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Search response. `organic_results` is absent when the engine found nothing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Option<Vec<OrganicResult>>,
}

impl SearchResponse {
    /// Response with one organic result per snippet.
    pub fn from_snippets<I, S>(snippets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            organic_results: Some(
                snippets
                    .into_iter()
                    .map(|s| OrganicResult {
                        snippet: Some(s.into()),
                    })
                    .collect(),
            ),
        }
    }
}

/// Web search engine.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, ContentError>;
}

/// SerpAPI Google engine, three results per query.
pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl SerpApiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            url: SERPAPI_URL.to_string(),
        })
    }
}

#[async_trait]
impl SearchClient for SerpApiClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, ContentError> {
        let num = RESULTS_PER_QUERY.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Api {
                service: "serpapi",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json::<SearchResponse>().await?)
    }
}

/// Appends `header` and one `- {snippet}` line per non-empty snippet of the first three
/// results. A response without organic results contributes nothing.
fn append_section(out: &mut String, header: &str, response: &SearchResponse) -> usize {
    let Some(results) = &response.organic_results else {
        return 0;
    };
    out.push_str(header);
    for snippet in results
        .iter()
        .take(RESULTS_PER_QUERY)
        .filter_map(|r| r.snippet.as_deref())
        .filter(|s| !s.is_empty())
    {
        out.push_str("- ");
        out.push_str(snippet);
        out.push('\n');
    }
    results.len()
}

/// Runs the review and specification queries for `product_name` one after the other and
/// builds the research text. Query failures are logged and skipped; with no client, or
/// when fewer than 50 characters were gathered, the product description is used instead.
pub async fn gather_context(
    client: Option<&dyn SearchClient>,
    product_name: &str,
    product_description: &str,
) -> String {
    let mut text = String::new();

    if let Some(client) = client {
        let queries = [
            (format!("{} review", product_name), "=== Reviews ===\n"),
            (
                format!("{} specifications", product_name),
                "\n=== Specifications ===\n",
            ),
        ];
        for (query, header) in &queries {
            match client.search(query).await {
                Ok(response) => {
                    let found = append_section(&mut text, header, &response);
                    tracing::debug!(query = %query, found, "search results");
                }
                Err(e) => tracing::warn!(query = %query, error = %e, "search failed"),
            }
        }
    } else {
        tracing::info!("search not configured, using product description");
    }

    if text.chars().count() < MIN_CONTEXT_CHARS {
        tracing::warn!("no usable search results, using product description");
        text = format!("=== Product Information ===\n{}", product_description);
    }
    text
}

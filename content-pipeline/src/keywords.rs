//! Related-keyword lookup via the DataForSEO Google Ads "keywords for keywords" endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::DataForSeoCredentials;
use crate::error::ContentError;

pub const DATAFORSEO_URL: &str =
    "https://api.dataforseo.com/v3/keywords_data/google_ads/keywords_for_keywords/live";
/// United States.
pub const LOCATION_CODE: u32 = 2840;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Keywords kept from one lookup.
pub const MAX_KEYWORDS: usize = 4;

/// Source of search-engine keywords related to a seed phrase.
#[async_trait]
pub trait KeywordSource: Send + Sync {
    /// Up to [`MAX_KEYWORDS`] related keywords, in the order the source ranks them.
    async fn related_keywords(&self, seed: &str) -> Result<Vec<String>, ContentError>;
}

/// DataForSEO client with basic auth and a 60 s timeout.
pub struct DataForSeoClient {
    client: reqwest::Client,
    credentials: DataForSeoCredentials,
    url: String,
}

impl DataForSeoClient {
    pub fn new(credentials: DataForSeoCredentials) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            credentials,
            url: DATAFORSEO_URL.to_string(),
        })
    }
}

/// Request body: one task for `seed`, US English, seed included, ten suggestions.
pub fn build_payload(seed: &str) -> Value {
    json!([{
        "keywords": [seed],
        "location_code": LOCATION_CODE,
        "language_code": "en",
        "include_seed_keyword": true,
        "limit": 10
    }])
}

#[derive(Debug, Deserialize)]
struct KeywordsResponse {
    #[serde(default)]
    tasks: Vec<KeywordsTask>,
}

#[derive(Debug, Deserialize)]
struct KeywordsTask {
    #[serde(default)]
    result: Option<Vec<KeywordItem>>,
}

#[derive(Debug, Deserialize)]
struct KeywordItem {
    #[serde(default)]
    keyword: Option<String>,
}

/// Takes `tasks[0].result[*].keyword`, skipping empty entries, capped at [`MAX_KEYWORDS`].
/// A response without tasks or results yields an empty list.
pub fn extract_keywords(body: &str) -> Result<Vec<String>, ContentError> {
    let response: KeywordsResponse = serde_json::from_str(body).map_err(|e| ContentError::Api {
        service: "dataforseo",
        status: 200,
        body: format!("unreadable response: {}", e),
    })?;
    let keywords = response
        .tasks
        .into_iter()
        .next()
        .and_then(|task| task.result)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| item.keyword)
        .filter(|k| !k.is_empty())
        .take(MAX_KEYWORDS)
        .collect();
    Ok(keywords)
}

#[async_trait]
impl KeywordSource for DataForSeoClient {
    async fn related_keywords(&self, seed: &str) -> Result<Vec<String>, ContentError> {
        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.credentials.login, Some(&self.credentials.password))
            .json(&build_payload(seed))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status != reqwest::StatusCode::OK {
            return Err(ContentError::Api {
                service: "dataforseo",
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }
        extract_keywords(&body)
    }
}

//! Content pipeline config: feed URL, publish target, optional keyword/search credentials.
//!
//! Filled from env vars (and `.env`, loaded by the caller). Interacts with
//! [`build_graph`](crate::build_graph) via the service clients built from it.

use crate::error::ContentError;

/// Electronics deals feed read by the first node.
pub const DEFAULT_FEED_URL: &str = "https://www.dealnews.com/c142/Electronics/?rss=1";
pub const DEFAULT_OWNER: &str = "Jai-Keshav-Sharma";
pub const DEFAULT_REPO: &str = "seo-blog-automation";
pub const DEFAULT_BRANCH: &str = "main";
/// Jekyll posts directory inside the site repository.
pub const POSTS_DIR: &str = "_posts";

/// GitHub Pages repository the post is published to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteTarget {
    /// Account that owns the repository; also the `*.github.io` host.
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub posts_dir: String,
    /// Token sent as `Authorization: token …`.
    pub token: String,
}

impl SiteTarget {
    /// Target with the default branch and posts directory.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: DEFAULT_BRANCH.to_string(),
            posts_dir: POSTS_DIR.to_string(),
            token: token.into(),
        }
    }

    /// Public site root, e.g. `https://owner.github.io/repo`.
    pub fn site_url(&self) -> String {
        format!("https://{}.github.io/{}", self.owner, self.repo)
    }
}

/// DataForSEO basic-auth credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataForSeoCredentials {
    pub login: String,
    pub password: String,
}

/// Everything Pipeline A needs besides the language model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentConfig {
    pub feed_url: String,
    pub site: SiteTarget,
    /// When `None` the keyword API is skipped and keywords come from the model.
    pub dataforseo: Option<DataForSeoCredentials>,
    /// When `None` both searches are skipped and the description is used as context.
    pub serpapi_key: Option<String>,
}

impl ContentConfig {
    /// Fill config from env vars.
    ///
    /// `GITHUB_TOKEN` required; `GITHUB_USERNAME`, `GITHUB_REPO`, `GITHUB_BRANCH`,
    /// `RSS_FEED_URL` have defaults. `DATAFORSEO_LOGIN` + `DATAFORSEO_PASSWORD` and
    /// `SERPAPI_KEY` optional.
    pub fn from_env() -> Result<Self, ContentError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get("GITHUB_TOKEN").ok_or_else(|| {
            ContentError::Config("GITHUB_TOKEN is not set; please configure it in .env".into())
        })?;
        let site = SiteTarget {
            owner: get("GITHUB_USERNAME").unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            repo: get("GITHUB_REPO").unwrap_or_else(|| DEFAULT_REPO.to_string()),
            branch: get("GITHUB_BRANCH").unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            posts_dir: POSTS_DIR.to_string(),
            token,
        };
        let dataforseo = match (get("DATAFORSEO_LOGIN"), get("DATAFORSEO_PASSWORD")) {
            (Some(login), Some(password)) => Some(DataForSeoCredentials { login, password }),
            _ => None,
        };

        Ok(Self {
            feed_url: get("RSS_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            site,
            dataforseo,
            serpapi_key: get("SERPAPI_KEY"),
        })
    }
}

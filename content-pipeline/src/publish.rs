//! Publishing: slugs, Jekyll post rendering and the GitHub contents API.

use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::config::SiteTarget;
use crate::error::ContentError;

pub const GITHUB_API: &str = "https://api.github.com";
/// Maximum slug length in characters.
pub const SLUG_MAX_LEN: usize = 60;
/// Slug for titles with no ASCII letters or digits.
pub const FALLBACK_SLUG: &str = "post";
const USER_AGENT: &str = "flowgraph-pipelines";

struct SlugPatterns {
    dollars: Regex,
    disallowed: Regex,
    whitespace: Regex,
    hyphens: Regex,
}

fn slug_patterns() -> &'static SlugPatterns {
    static PATTERNS: OnceLock<SlugPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| SlugPatterns {
        dollars: Regex::new(r"\$+").expect("valid pattern"),
        disallowed: Regex::new(r"[^a-z0-9\s-]").expect("valid pattern"),
        whitespace: Regex::new(r"\s+").expect("valid pattern"),
        hyphens: Regex::new(r"-{2,}").expect("valid pattern"),
    })
}

/// URL slug of a post title: `[a-z0-9-]` only, at most 60 chars, no leading, trailing or
/// doubled hyphen. `$` becomes `dollar` and `+` becomes `plus`. Idempotent; a title
/// with nothing left after cleaning gets [`FALLBACK_SLUG`].
pub fn slugify(text: &str) -> String {
    let p = slug_patterns();
    let text = text.to_lowercase();
    let text = p.dollars.replace_all(&text, " dollar ");
    let text = text.replace('+', " plus ");
    let text = p.disallowed.replace_all(&text, "");
    let text = p.whitespace.replace_all(&text, "-");
    let text = p.hyphens.replace_all(&text, "-");
    let slug: String = text.trim_matches('-').chars().take(SLUG_MAX_LEN).collect();
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        return FALLBACK_SLUG.to_string();
    }
    slug.to_string()
}

/// Repository path of the post: `{posts_dir}/{YYYY-MM-DD}-{slug}.md`.
pub fn post_path(posts_dir: &str, date: DateTime<Utc>, slug: &str) -> String {
    format!("{}/{}-{}.md", posts_dir, date.format("%Y-%m-%d"), slug)
}

/// Jekyll post: front matter with title and UTC date, then the body.
pub fn render_post(title: &str, content: &str, date: DateTime<Utc>) -> String {
    format!(
        "---\ntitle: \"{}\"\ndate: {}\n---\n\n{}\n",
        title,
        date.format("%Y-%m-%d %H:%M:%S +0000"),
        content
    )
}

/// Public URL under the default Jekyll permalink `/:year/:month/:day/:title/`.
pub fn published_url(site: &SiteTarget, date: DateTime<Utc>, slug: &str) -> String {
    format!(
        "{}/{:04}/{:02}/{:02}/{}/",
        site.site_url(),
        date.year(),
        date.month(),
        date.day(),
        slug
    )
}

/// Where a post ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishedPost {
    pub path: String,
    pub url: String,
}

/// File store of the site repository.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Blob SHA of the file on the target branch; `None` when it does not exist.
    async fn file_sha(&self, path: &str) -> Result<Option<String>, ContentError>;

    /// Creates the file, or replaces it when `sha` names the current version.
    async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: Option<&str>,
    ) -> Result<(), ContentError>;
}

/// Commits `title`/`content` as a new post dated `now` and returns its path and URL.
///
/// The URL is composed from the site target, not read back from the host.
pub async fn publish_post(
    store: &dyn ContentStore,
    site: &SiteTarget,
    title: &str,
    content: &str,
    now: DateTime<Utc>,
) -> Result<PublishedPost, ContentError> {
    let slug = slugify(title);
    let path = post_path(&site.posts_dir, now, &slug);
    let body = render_post(title, content, now);
    store
        .put_file(&path, &body, &format!("Add blog post: {}", title), None)
        .await?;
    Ok(PublishedPost {
        url: published_url(site, now, &slug),
        path,
    })
}

/// GitHub repository contents API for one repository and branch.
pub struct GitHubContents {
    client: reqwest::Client,
    site: SiteTarget,
    api_base: String,
}

impl GitHubContents {
    pub fn new(site: SiteTarget) -> Self {
        Self {
            client: reqwest::Client::new(),
            site,
            api_base: GITHUB_API.to_string(),
        }
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.site.owner, self.site.repo, path
        )
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.contents_url(path))
            .header("Authorization", format!("token {}", self.site.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
    }
}

#[derive(Deserialize)]
struct ContentsEntry {
    sha: String,
}

#[async_trait]
impl ContentStore for GitHubContents {
    async fn file_sha(&self, path: &str) -> Result<Option<String>, ContentError> {
        let response = self
            .request(reqwest::Method::GET, path)
            .query(&[("ref", self.site.branch.as_str())])
            .send()
            .await?;
        match response.status() {
            reqwest::StatusCode::OK => Ok(Some(response.json::<ContentsEntry>().await?.sha)),
            reqwest::StatusCode::NOT_FOUND => Ok(None),
            status => Err(ContentError::Api {
                service: "github",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: Option<&str>,
    ) -> Result<(), ContentError> {
        let mut body = json!({
            "message": message,
            "content": BASE64.encode(content.as_bytes()),
            "branch": self.site.branch,
        });
        if let Some(sha) = sha {
            body["sha"] = json!(sha);
        }

        let response = self
            .request(reqwest::Method::PUT, path)
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();
        if status != 200 && status != 201 {
            return Err(ContentError::Api {
                service: "github",
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }
        tracing::debug!(path, status, "file committed");
        Ok(())
    }
}

/// A committed file as seen by [`InMemoryContentStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredFile {
    pub content: String,
    pub message: String,
    pub sha: String,
}

/// Content store kept in memory, for tests and dry runs.
///
/// SHAs are sequential (`sha-1`, `sha-2`, …). `rejecting` makes every write fail with the
/// given status, like a repository that refuses the commit.
#[derive(Default)]
pub struct InMemoryContentStore {
    files: Mutex<BTreeMap<String, StoredFile>>,
    writes: Mutex<u64>,
    reject_status: Option<u16>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_status: Some(status),
            ..Self::default()
        }
    }

    /// Store pre-populated with `path` (as an existing file).
    pub fn with_file(self, path: &str, content: &str) -> Self {
        if let Ok(mut files) = self.files.lock() {
            files.insert(
                path.to_string(),
                StoredFile {
                    content: content.to_string(),
                    message: "seed".to_string(),
                    sha: "sha-0".to_string(),
                },
            );
        }
        self
    }

    pub fn file(&self, path: &str) -> Option<StoredFile> {
        self.files.lock().ok()?.get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files
            .lock()
            .map(|f| f.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn file_sha(&self, path: &str) -> Result<Option<String>, ContentError> {
        Ok(self.file(path).map(|f| f.sha))
    }

    async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: Option<&str>,
    ) -> Result<(), ContentError> {
        if let Some(status) = self.reject_status {
            return Err(ContentError::Api {
                service: "github",
                status,
                body: format!(r#"{{"message":"rejected write to {}"}}"#, path),
            });
        }
        let current = self.file(path).map(|f| f.sha);
        if current.as_deref() != sha {
            return Err(ContentError::Api {
                service: "github",
                status: 422,
                body: format!(r#"{{"message":"sha mismatch for {}"}}"#, path),
            });
        }
        let mut writes = self
            .writes
            .lock()
            .map_err(|_| ContentError::Config("store poisoned".into()))?;
        *writes += 1;
        let mut files = self
            .files
            .lock()
            .map_err(|_| ContentError::Config("store poisoned".into()))?;
        files.insert(
            path.to_string(),
            StoredFile {
                content: content.to_string(),
                message: message.to_string(),
                sha: format!("sha-{}", *writes),
            },
        );
        Ok(())
    }
}

//! One-time GitHub Pages setup: Jekyll config, home page and .gitignore.

use std::fmt;

use crate::config::SiteTarget;
use crate::error::ContentError;
use crate::publish::ContentStore;

/// Result of writing one site file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupOutcome {
    Created(String),
    Updated(String),
    Failed { path: String, error: String },
}

impl SetupOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SetupOutcome::Failed { .. })
    }
}

impl fmt::Display for SetupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupOutcome::Created(path) => write!(f, "created {}", path),
            SetupOutcome::Updated(path) => write!(f, "updated {}", path),
            SetupOutcome::Failed { path, error } => write!(f, "error with {}: {}", path, error),
        }
    }
}

/// `_config.yml` for the minima theme with date-based post permalinks.
pub fn jekyll_config(site: &SiteTarget) -> String {
    format!(
        r#"title: SEO Blog Automation
description: Automated electronics deal blog posts
baseurl: "/{repo}"
url: "https://{owner}.github.io"

theme: minima

markdown: kramdown
plugins:
  - jekyll-feed
  - jekyll-seo-tag

collections:
  posts:
    output: true
    permalink: /:year/:month/:day/:title/
"#,
        repo = site.repo,
        owner = site.owner
    )
}

pub const INDEX_MD: &str = "---
layout: home
title: Home
---

# Latest Electronics Deals & Reviews

Automated blog posts about trending electronics products.
";

pub const GITIGNORE: &str = "_site/
.sass-cache/
.jekyll-cache/
.jekyll-metadata
.env
target/
";

/// Files written by [`setup_site`], in order.
pub fn site_files(site: &SiteTarget) -> Vec<(&'static str, String)> {
    vec![
        ("_config.yml", jekyll_config(site)),
        ("index.md", INDEX_MD.to_string()),
        (".gitignore", GITIGNORE.to_string()),
    ]
}

async fn create_or_update(
    store: &dyn ContentStore,
    path: &str,
    content: &str,
) -> Result<SetupOutcome, ContentError> {
    match store.file_sha(path).await? {
        Some(sha) => {
            store
                .put_file(path, content, &format!("Update {}", path), Some(&sha))
                .await?;
            Ok(SetupOutcome::Updated(path.to_string()))
        }
        None => {
            store
                .put_file(path, content, &format!("Add {}", path), None)
                .await?;
            Ok(SetupOutcome::Created(path.to_string()))
        }
    }
}

/// Creates or updates the site scaffolding files. A file that fails is reported in its
/// outcome and the remaining files are still attempted.
pub async fn setup_site(store: &dyn ContentStore, site: &SiteTarget) -> Vec<SetupOutcome> {
    let mut outcomes = Vec::new();
    for (path, content) in site_files(site) {
        let outcome = match create_or_update(store, path, &content).await {
            Ok(outcome) => outcome,
            Err(e) => SetupOutcome::Failed {
                path: path.to_string(),
                error: e.to_string(),
            },
        };
        tracing::info!(%outcome, "site file");
        outcomes.push(outcome);
    }
    outcomes
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use flowgraph::{FlowError, Node};

use crate::config::SiteTarget;
use crate::publish::{publish_post, ContentStore};
use crate::state::BlogState;

/// Commits the post to the site repository and records its path and public URL.
/// A rejected commit aborts the run with the host's response body.
pub struct PublishBlogNode {
    store: Arc<dyn ContentStore>,
    site: SiteTarget,
}

impl PublishBlogNode {
    pub fn new(store: Arc<dyn ContentStore>, site: SiteTarget) -> Self {
        Self { store, site }
    }
}

#[async_trait]
impl Node<BlogState> for PublishBlogNode {
    fn id(&self) -> &str {
        "publish_blog"
    }

    async fn run(&self, mut state: BlogState) -> Result<BlogState, FlowError> {
        let post = publish_post(
            self.store.as_ref(),
            &self.site,
            state.blog_title()?,
            state.blog_content()?,
            Utc::now(),
        )
        .await?;
        tracing::info!(url = %post.url, path = %post.path, "published");
        state.post_path = Some(post.path);
        state.publish_url = Some(post.url);
        Ok(state)
    }
}

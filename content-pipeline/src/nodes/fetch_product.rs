use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{FlowError, Node};

use crate::feed::FeedSource;
use crate::state::BlogState;

/// Reads the newest deal from the feed into `product_title` / `product_description`.
/// An unreachable, unreadable or empty feed aborts the run.
pub struct FetchProductNode {
    feed: Arc<dyn FeedSource>,
}

impl FetchProductNode {
    pub fn new(feed: Arc<dyn FeedSource>) -> Self {
        Self { feed }
    }
}

#[async_trait]
impl Node<BlogState> for FetchProductNode {
    fn id(&self) -> &str {
        "fetch_product"
    }

    async fn run(&self, mut state: BlogState) -> Result<BlogState, FlowError> {
        let item = self.feed.first_item().await?;
        tracing::info!(product = %item.title, "fetched latest product");
        state.product_title = Some(item.title);
        state.product_description = Some(item.description);
        Ok(state)
    }
}

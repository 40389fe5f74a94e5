//! Errors raised by the content pipeline's external services.

use flowgraph::FlowError;
use thiserror::Error;

/// Error from a feed, keyword, search or content-store call.
///
/// Converted into `FlowError::ExecutionFailed` when it aborts a node.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Transport failure (connect, timeout, body decode).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed body is not a readable RSS document.
    #[error("feed could not be parsed: {0}")]
    Feed(String),

    /// The feed parsed but has no items.
    #[error("feed has no items")]
    EmptyFeed,

    /// A remote API answered with an unexpected status; `body` is the raw response text.
    #[error("{service} returned status {status}: {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<ContentError> for FlowError {
    fn from(e: ContentError) -> Self {
        FlowError::ExecutionFailed(e.to_string())
    }
}

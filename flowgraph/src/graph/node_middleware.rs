//! Node middleware: wraps every node run of a compiled graph.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::error::FlowError;

/// The wrapped node run handed to [`NodeMiddleware::around_run`].
pub type InnerRun<S> = Box<
    dyn FnOnce(S) -> Pin<Box<dyn Future<Output = Result<S, FlowError>> + Send>> + Send,
>;

/// Middleware around each `Node::run` call (logging, timing, ...).
///
/// Implementations must call `inner(state)` exactly once and return its result, optionally
/// observing it. Attached with `StateGraph::with_middleware` before `compile()`.
#[async_trait]
pub trait NodeMiddleware<S>: Send + Sync
where
    S: Send + 'static,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: InnerRun<S>,
    ) -> Result<S, FlowError>;
}

//! Extension trait for a fluent build chain: attach node logging, then compile.
//!
//! Interacts with [`StateGraph`](flowgraph::StateGraph) and
//! [`LoggingMiddleware`](super::logging::LoggingMiddleware).

use std::sync::Arc;

use flowgraph::StateGraph;

use super::logging::LoggingMiddleware;

/// Returns the same graph with `LoggingMiddleware` attached. Chain with `.compile()?`.
pub trait WithNodeLogging {
    fn with_node_logging(self) -> Self;
}

impl<S> WithNodeLogging for StateGraph<S>
where
    S: Send + Sync + 'static,
{
    fn with_node_logging(self) -> Self {
        self.with_middleware(Arc::new(LoggingMiddleware::<S>::new()))
    }
}

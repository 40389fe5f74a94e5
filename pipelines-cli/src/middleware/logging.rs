//! Logging middleware that records node enter/exit around each node.run call.

use std::marker::PhantomData;
use std::time::Instant;

use async_trait::async_trait;
use flowgraph::{FlowError, InnerRun, NodeMiddleware};

/// Middleware that logs node enter/exit (with elapsed time) around each node.run call.
///
/// Events go through `tracing`, which the binary writes to stderr, so the run summary on
/// stdout can be redirected separately.
pub struct LoggingMiddleware<S> {
    _state: PhantomData<fn(S)>,
}

impl<S> LoggingMiddleware<S> {
    pub fn new() -> Self {
        Self {
            _state: PhantomData,
        }
    }
}

impl<S> Default for LoggingMiddleware<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> NodeMiddleware<S> for LoggingMiddleware<S>
where
    S: Send + 'static,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: InnerRun<S>,
    ) -> Result<S, FlowError> {
        tracing::info!(node = node_id, "enter");
        let started = Instant::now();
        let result = inner(state).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(node = node_id, elapsed_ms, "exit"),
            Err(e) => tracing::error!(node = node_id, elapsed_ms, error = %e, "exit with error"),
        }
        result
    }
}

//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds nodes and the edge order derived from explicit
//! edges at compile time, plus optional node middleware.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::FlowError;

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
use super::node_middleware::{InnerRun, NodeMiddleware};
use super::Node;

/// Compiled graph: immutable structure, supports invoke only.
///
/// Runs nodes strictly in edge order. Each node starts only after every earlier node
/// returned `Ok`; the first error aborts the run (no retry, rollback or resume).
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    pub(super) edge_order: Vec<String>,
    /// Optional node middleware; set when built with `with_middleware`.
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> CompiledStateGraph<S>
where
    S: Send + Sync + 'static,
{
    /// Node ids in execution order.
    pub fn node_ids(&self) -> &[String] {
        &self.edge_order
    }

    /// Runs the graph with the given state and returns the final state.
    ///
    /// On failure returns `FlowError::NodeFailed` naming the node that aborted the run.
    pub async fn invoke(&self, state: S) -> Result<S, FlowError> {
        if self.edge_order.is_empty() {
            return Err(FlowError::ExecutionFailed("empty graph".into()));
        }
        log_graph_start(self.edge_order.len());

        let mut state = state;
        for node_id in &self.edge_order {
            log_node_start(node_id);
            match self.run_node(node_id, state).await {
                Ok(next_state) => {
                    log_node_complete(node_id);
                    state = next_state;
                }
                Err(source) => {
                    let error = FlowError::NodeFailed {
                        node_id: node_id.clone(),
                        source: Box::new(source),
                    };
                    log_graph_error(&error);
                    return Err(error);
                }
            }
        }

        log_graph_complete();
        Ok(state)
    }

    async fn run_node(&self, node_id: &str, state: S) -> Result<S, FlowError> {
        let node = self
            .nodes
            .get(node_id)
            .cloned()
            .ok_or_else(|| FlowError::ExecutionFailed(format!("unknown node: {}", node_id)))?;

        match &self.middleware {
            Some(middleware) => {
                let inner: InnerRun<S> = Box::new(move |s: S| {
                    Box::pin(async move { node.run(s).await })
                        as Pin<Box<dyn Future<Output = Result<S, FlowError>> + Send>>
                });
                middleware.around_run(node_id, state, inner).await
            }
            None => node.run(state).await,
        }
    }
}

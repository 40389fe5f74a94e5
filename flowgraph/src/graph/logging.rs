//! Logging utilities for graph execution.
//!
//! Structured `tracing` events for graph start/finish, node execution and failures.

use crate::error::FlowError;

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    tracing::debug!(node_id = node_id, "Starting node execution");
}

/// Log node execution completion.
pub fn log_node_complete(node_id: &str) {
    tracing::debug!(node_id = node_id, "Node execution complete");
}

/// Log graph execution start.
pub fn log_graph_start(node_count: usize) {
    tracing::info!(node_count, "Starting graph execution");
}

/// Log graph execution completion.
pub fn log_graph_complete() {
    tracing::info!("Graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &FlowError) {
    tracing::error!(error = %error, "Graph execution error");
}

//! State graph: nodes + linear edges, compile and invoke.
//!
//! Aligns with LangGraph `StateGraph`: add nodes and edges, compile, then
//! invoke with state. Only linear chains are supported.

mod compile_error;
mod compiled;
mod logging;
mod node;
mod node_middleware;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use node::Node;
pub use node_middleware::{InnerRun, NodeMiddleware};
pub use state_graph::{StateGraph, END, START};

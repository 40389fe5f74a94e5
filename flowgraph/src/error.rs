//! Pipeline execution error types.
//!
//! Returned by `Node::run`, `CompiledStateGraph::invoke` and `LlmClient::invoke`.

use thiserror::Error;

/// Pipeline execution error.
///
/// Nodes return it from `run`; the compiled graph wraps the first failure in
/// [`FlowError::NodeFailed`] so the caller knows which step aborted the run.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Execution failed with a message (e.g. HTTP call failed, file write failed).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// A node read a state field that no earlier node has written.
    #[error("state field `{0}` has not been written by an earlier node")]
    MissingField(&'static str),

    /// The LLM provider returned an error or an empty completion.
    #[error("llm call failed: {0}")]
    Llm(String),

    /// A completion did not match the schema it was constrained to.
    #[error("structured output `{schema}` did not match: {message}")]
    StructuredOutput { schema: String, message: String },

    /// A node failed; the run was aborted at this node.
    #[error("node `{node_id}` failed: {source}")]
    NodeFailed {
        node_id: String,
        #[source]
        source: Box<FlowError>,
    },
}

impl FlowError {
    /// Returns the innermost error, unwrapping any `NodeFailed` layers.
    pub fn root(&self) -> &FlowError {
        match self {
            FlowError::NodeFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

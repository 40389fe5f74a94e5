//! Node trait: one step of a pipeline.

use async_trait::async_trait;

use crate::error::FlowError;

/// One step in a linear pipeline: receive the state, return the extended state.
///
/// Nodes do not decide what runs next; the compiled graph runs them in edge order and
/// stops at the first `Err`. A node may return the state unchanged (e.g. a conditional
/// step whose precondition is already satisfied).
///
/// **Interaction**: Registered with `StateGraph::add_node` / `add_sequence` as
/// `Arc<dyn Node<S>>`; run by `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Send + 'static,
{
    /// Stable id used for edges and logs.
    fn id(&self) -> &str;

    /// Runs this step once.
    async fn run(&self, state: S) -> Result<S, FlowError>;
}

//! StateGraph compile failure cases: unknown node, invalid chain, etc.

use std::sync::Arc;

use flowgraph::{CompilationError, StateGraph, END, START};

use crate::common::{AppendNode, PostState};

#[tokio::test]
async fn compile_fails_when_edge_refers_to_unknown_node() {
    let mut graph = StateGraph::<PostState>::new();
    graph.add_node("fetch", Arc::new(AppendNode::new("fetch")));
    graph.add_edge(START, "fetch");
    graph.add_edge("fetch", "missing");

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        _ => panic!("expected NodeNotFound"),
    }
}

/// **Scenario**: A graph without an edge from START does not compile.
#[tokio::test]
async fn compile_fails_without_start_edge() {
    let mut graph = StateGraph::<PostState>::new();
    graph.add_node("fetch", Arc::new(AppendNode::new("fetch")));
    graph.add_edge("fetch", END);

    assert!(matches!(graph.compile(), Err(CompilationError::MissingStart)));
}

#[tokio::test]
async fn compile_fails_without_end_edge() {
    let mut graph = StateGraph::<PostState>::new();
    graph.add_node("fetch", Arc::new(AppendNode::new("fetch")));
    graph.add_edge(START, "fetch");

    assert!(matches!(graph.compile(), Err(CompilationError::MissingEnd)));
}

/// **Scenario**: Two edges out of one node (a branch) are rejected.
#[tokio::test]
async fn compile_fails_on_branch() {
    let mut graph = StateGraph::<PostState>::new();
    graph.add_node("a", Arc::new(AppendNode::new("a")));
    graph.add_node("b", Arc::new(AppendNode::new("b")));
    graph.add_node("c", Arc::new(AppendNode::new("c")));
    graph.add_edge(START, "a");
    graph.add_edge("a", "b");
    graph.add_edge("a", "c");
    graph.add_edge("c", END);

    assert!(matches!(
        graph.compile(),
        Err(CompilationError::InvalidChain(_))
    ));
}

/// **Scenario**: A cycle off the main chain leaves edges unreachable from START.
#[tokio::test]
async fn compile_fails_on_disconnected_cycle() {
    let mut graph = StateGraph::<PostState>::new();
    graph.add_node("a", Arc::new(AppendNode::new("a")));
    graph.add_node("b", Arc::new(AppendNode::new("b")));
    graph.add_node("c", Arc::new(AppendNode::new("c")));
    graph.add_edge(START, "a");
    graph.add_edge("a", END);
    graph.add_edge("b", "c");
    graph.add_edge("c", "b");

    match graph.compile() {
        Err(CompilationError::InvalidChain(msg)) => {
            assert!(msg.contains("not reachable"), "{}", msg)
        }
        _ => panic!("expected InvalidChain"),
    }
}

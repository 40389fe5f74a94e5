//! StateGraph invoke: execution order, state threading, abort on first error.

use std::sync::Arc;

use flowgraph::{FlowError, StateGraph, END, START};

use crate::common::{AppendNode, PostState, RequireTitleNode};

/// **Scenario**: add_sequence runs nodes in the given order and threads state through them.
#[tokio::test]
async fn invoke_runs_sequence_in_order() {
    let mut graph = StateGraph::<PostState>::new();
    graph.add_sequence(vec![
        Arc::new(AppendNode::new("fetch")),
        Arc::new(AppendNode::with_title("write", "Deal of the day")),
        Arc::new(RequireTitleNode),
    ]);
    let compiled = graph.compile().expect("compile");
    assert_eq!(compiled.node_ids(), &["fetch", "write", "require_title"]);

    let out = compiled.invoke(PostState::default()).await.unwrap();
    assert_eq!(
        out.steps,
        vec!["fetch", "write", "saw Deal of the day"]
    );
    assert_eq!(out.title.as_deref(), Some("Deal of the day"));
}

/// **Scenario**: Edges added out of order still compile into the START→END chain order.
#[tokio::test]
async fn invoke_follows_edges_not_insertion_order() {
    let mut graph = StateGraph::<PostState>::new();
    graph.add_node("b", Arc::new(AppendNode::new("b")));
    graph.add_node("a", Arc::new(AppendNode::new("a")));
    graph.add_edge("b", END);
    graph.add_edge("a", "b");
    graph.add_edge(START, "a");

    let out = graph.compile().unwrap().invoke(PostState::default()).await.unwrap();
    assert_eq!(out.steps, vec!["a", "b"]);
}

/// **Scenario**: A node reading an unwritten field aborts the run with NodeFailed + MissingField.
#[tokio::test]
async fn invoke_aborts_on_missing_field() {
    let mut graph = StateGraph::<PostState>::new();
    graph.add_sequence(vec![
        Arc::new(AppendNode::new("fetch")),
        Arc::new(RequireTitleNode),
        Arc::new(AppendNode::new("never")),
    ]);

    let err = graph
        .compile()
        .unwrap()
        .invoke(PostState::default())
        .await
        .unwrap_err();
    match &err {
        FlowError::NodeFailed { node_id, .. } => assert_eq!(node_id, "require_title"),
        other => panic!("expected NodeFailed, got {:?}", other),
    }
    assert!(matches!(err.root(), FlowError::MissingField("title")));
    assert!(err.to_string().contains("require_title"));
}

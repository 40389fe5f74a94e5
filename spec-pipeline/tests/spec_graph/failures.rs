//! Every failure in the spec pipeline is fatal.

use std::sync::Arc;

use flowgraph::{FlowError, MockLlm};
use spec_pipeline::{build_graph, SpecState};

use crate::common::{ANALYSIS_JSON, MODULES_JSON};

/// **Scenario**: A schema answer missing required fields aborts at design_schemas and
/// nothing is written.
#[tokio::test]
async fn schema_mismatch_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let llm = Arc::new(MockLlm::sequence(vec![
        ANALYSIS_JSON.into(),
        MODULES_JSON.into(),
        r#"{"schemas": [{"entity": "users"}]}"#.into(),
    ]));
    let graph = build_graph(llm.clone(), dir.path()).compile().unwrap();

    let err = graph.invoke(SpecState::new("req")).await.unwrap_err();
    match &err {
        FlowError::NodeFailed { node_id, .. } => assert_eq!(node_id, "design_schemas"),
        other => panic!("expected NodeFailed, got {:?}", other),
    }
    assert!(matches!(
        err.root(),
        FlowError::StructuredOutput { schema, .. } if schema == "DataSchemas"
    ));
    assert_eq!(llm.call_count(), 3);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// **Scenario**: A model error on the first call aborts at analyze_requirements.
#[tokio::test]
async fn model_error_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let llm = Arc::new(MockLlm::failing("rate limited"));
    let graph = build_graph(llm, dir.path()).compile().unwrap();

    let err = graph.invoke(SpecState::new("req")).await.unwrap_err();
    assert!(err.to_string().contains("analyze_requirements"));
    assert!(matches!(err.root(), FlowError::Llm(msg) if msg == "rate limited"));
}

/// **Scenario**: An unwritable output directory aborts at synthesize_report.
#[tokio::test]
async fn unwritable_output_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();
    let llm = Arc::new(MockLlm::sequence(crate::common::all_answers()));
    let graph = build_graph(llm, &blocker).compile().unwrap();

    let err = graph.invoke(SpecState::new("req")).await.unwrap_err();
    match err {
        FlowError::NodeFailed { node_id, .. } => assert_eq!(node_id, "synthesize_report"),
        other => panic!("expected NodeFailed, got {:?}", other),
    }
}

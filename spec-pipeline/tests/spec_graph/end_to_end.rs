//! Requirement in, `specification.md` out.

use std::sync::Arc;

use flowgraph::MockLlm;
use spec_pipeline::{build_graph, SpecState, DEFAULT_REQUIREMENT};

use crate::common::all_answers;

/// **Scenario**: Default requirement produces Outputs/<sanitized title>/specification.md
/// with the executive summary and data architecture sections.
#[tokio::test]
async fn requirement_becomes_saved_specification() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("Outputs");
    let llm = Arc::new(MockLlm::sequence(all_answers()));
    let graph = build_graph(llm.clone(), &output_dir).compile().unwrap();

    let state = graph.invoke(SpecState::new(DEFAULT_REQUIREMENT)).await.unwrap();

    assert_eq!(
        state.title.as_deref(),
        Some("Smart Product Recommendation Engine")
    );
    assert_eq!(state.modules.as_ref().unwrap().modules.len(), 2);
    assert_eq!(
        state.schemas.as_ref().unwrap().schemas[0].fields[1].constraints,
        ""
    );

    let path = state.report_path.clone().unwrap();
    assert_eq!(
        path,
        output_dir
            .join("smart_product_recommendation_engine")
            .join("specification.md")
    );
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Executive Summary"));
    assert!(written.contains("Data Architecture"));
    assert_eq!(Some(written), state.final_report);
}

/// **Scenario**: Each call uses JSON mode at its own temperature, and later prompts carry
/// the pretty JSON of earlier outputs.
#[tokio::test]
async fn calls_use_stage_temperatures_and_prior_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let llm = Arc::new(MockLlm::sequence(all_answers()));
    let graph = build_graph(llm.clone(), dir.path()).compile().unwrap();
    graph
        .invoke(SpecState::new("Build an order tracking portal."))
        .await
        .unwrap();

    let temperatures: Vec<Option<f32>> = llm.calls().iter().map(|(_, o)| o.temperature).collect();
    assert_eq!(
        temperatures,
        vec![Some(0.3), Some(0.5), Some(0.4), Some(0.6), Some(0.3)]
    );

    let prompts = llm.prompts();
    assert!(prompts[0].contains("Build an order tracking portal."));
    assert!(prompts[1].contains("\"business_goal\": \"Increase conversion"));
    assert!(prompts[2].contains("\"name\": \"Event Collector\""));
    assert!(prompts[3].contains("\"entity\": \"browsing_events\""));
    assert!(prompts[4].contains("\"name\": \"Serve recommendations\""));
    assert!(prompts[4].contains("- Original Requirement: Build an order tracking portal."));
}

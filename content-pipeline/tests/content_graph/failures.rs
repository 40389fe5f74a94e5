//! Failure policy: feed and publish errors abort; keyword and search errors degrade.

use std::sync::Arc;

use content_pipeline::publish::InMemoryContentStore;
use content_pipeline::{build_graph, BlogState};
use flowgraph::{FlowError, MockLlm};

use crate::common::{services, FixedFeed, FixedKeywords, BLOG_JSON, KEYWORDS_JSON, NORMALIZE_JSON};

/// **Scenario**: An empty feed aborts at fetch_product before any model call.
#[tokio::test]
async fn empty_feed_aborts_run() {
    let llm = Arc::new(MockLlm::new("{}"));
    let store = Arc::new(InMemoryContentStore::new());
    let graph = build_graph(services(llm.clone(), FixedFeed(None), None, None, store.clone()))
        .compile()
        .unwrap();

    let err = graph.invoke(BlogState::default()).await.unwrap_err();
    match &err {
        FlowError::NodeFailed { node_id, .. } => assert_eq!(node_id, "fetch_product"),
        other => panic!("expected NodeFailed, got {:?}", other),
    }
    assert!(err.to_string().contains("feed has no items"));
    assert_eq!(llm.call_count(), 0);
    assert!(store.paths().is_empty());
}

/// **Scenario**: A rejected commit aborts at publish_blog and carries the response body.
#[tokio::test]
async fn rejected_publish_aborts_run() {
    let llm = Arc::new(MockLlm::sequence(vec![
        NORMALIZE_JSON.into(),
        KEYWORDS_JSON.into(),
        BLOG_JSON.into(),
    ]));
    let graph = build_graph(services(
        llm,
        FixedFeed::airpods(),
        None,
        None,
        Arc::new(InMemoryContentStore::rejecting(401)),
    ))
    .compile()
    .unwrap();

    let err = graph.invoke(BlogState::default()).await.unwrap_err();
    match &err {
        FlowError::NodeFailed { node_id, source } => {
            assert_eq!(node_id, "publish_blog");
            let msg = source.to_string();
            assert!(msg.contains("401"), "{}", msg);
            assert!(msg.contains("rejected write"), "{}", msg);
        }
        other => panic!("expected NodeFailed, got {:?}", other),
    }
}

/// **Scenario**: A failing keyword service degrades to model-generated keywords.
#[tokio::test]
async fn keyword_service_failure_is_not_fatal() {
    let llm = Arc::new(MockLlm::sequence(vec![
        NORMALIZE_JSON.into(),
        KEYWORDS_JSON.into(),
        BLOG_JSON.into(),
    ]));
    let graph = build_graph(services(
        llm.clone(),
        FixedFeed::airpods(),
        Some(Arc::new(FixedKeywords::failing(401))),
        None,
        Arc::new(InMemoryContentStore::new()),
    ))
    .compile()
    .unwrap();

    let state = graph.invoke(BlogState::default()).await.unwrap();
    assert_eq!(
        state.seo_keywords.unwrap(),
        vec![
            "airpods pro deal",
            "best wireless earbuds",
            "airpods pro price",
            "buy airpods pro"
        ]
    );
    assert!(state.publish_url.is_some());
    assert_eq!(llm.call_count(), 3);
}

//! Keyword generation runs only when fewer than three keywords were looked up.

use std::sync::Arc;

use content_pipeline::nodes::GenerateKeywordsNode;
use content_pipeline::BlogState;
use flowgraph::{MockLlm, Node};

use crate::common::KEYWORDS_JSON;

fn state_with(keywords: &[&str]) -> BlogState {
    BlogState {
        product_title: Some("Kindle Paperwhite for $99".into()),
        product_description: Some("Waterproof e-reader with a 6.8 inch display.".into()),
        normalized_name: Some("kindle paperwhite".into()),
        product_category: Some("e-reader".into()),
        seo_keywords: Some(keywords.iter().map(|k| k.to_string()).collect()),
        ..Default::default()
    }
}

/// **Scenario**: Exactly three keywords: state unchanged and the model is not called.
#[tokio::test]
async fn three_keywords_skip_generation() {
    let llm = Arc::new(MockLlm::new(KEYWORDS_JSON));
    let node = GenerateKeywordsNode::new(llm.clone());
    let input = state_with(&["a", "b", "c"]);

    let out = node.run(input.clone()).await.unwrap();
    assert_eq!(out, input);
    assert_eq!(llm.call_count(), 0);
}

/// **Scenario**: Two keywords: the model is called and its list replaces them.
#[tokio::test]
async fn two_keywords_trigger_generation() {
    let llm = Arc::new(MockLlm::new(KEYWORDS_JSON));
    let node = GenerateKeywordsNode::new(llm.clone());

    let out = node.run(state_with(&["a", "b"])).await.unwrap();
    assert_eq!(llm.call_count(), 1);
    assert_eq!(out.seo_keywords.unwrap()[0], "airpods pro deal");
    let prompt = &llm.prompts()[0];
    assert!(prompt.contains("Product Name: kindle paperwhite"));
    assert!(prompt.contains("Category: e-reader"));
}

//! Full pipeline run with fakes: feed → keywords → post → commit.

use std::sync::Arc;

use chrono::Utc;
use content_pipeline::publish::InMemoryContentStore;
use content_pipeline::{build_graph, BlogState};
use flowgraph::MockLlm;

use content_pipeline::FeedItem;

use crate::common::{
    services, with_search, FailingSearch, FixedFeed, FixedKeywords, FixedSearch, BLOG_JSON,
    KEYWORDS_JSON, NORMALIZE_JSON,
};

/// **Scenario**: AirPods deal with no keyword service: keywords generated, post published
/// under today's UTC date with the composed GitHub Pages URL.
#[tokio::test]
async fn airpods_deal_is_published() {
    let llm = Arc::new(MockLlm::sequence(vec![
        NORMALIZE_JSON.into(),
        KEYWORDS_JSON.into(),
        BLOG_JSON.into(),
    ]));
    let store = Arc::new(InMemoryContentStore::new());
    let search = FixedSearch(vec![
        "Reviewers praise the AirPods Pro 2 noise cancellation and fit.",
        "Battery life reaches six hours with ANC enabled.",
    ]);
    let graph = build_graph(services(
        llm.clone(),
        FixedFeed::airpods(),
        None,
        with_search(search),
        store.clone(),
    ))
    .compile()
    .unwrap();

    let today = Utc::now();
    let state = graph.invoke(BlogState::default()).await.unwrap();

    assert_eq!(state.normalized_name.as_deref(), Some("apple airpods pro"));
    assert_eq!(state.product_category.as_deref(), Some("wireless earbuds"));
    assert_eq!(state.seo_keywords.as_ref().unwrap().len(), 4);
    assert!(state
        .search_results
        .as_deref()
        .unwrap()
        .starts_with("=== Reviews ===\n- Reviewers praise"));

    let slug = "airpods-pro-deal-best-wireless-earbuds-at-dollar-189";
    let path = state.post_path.clone().unwrap();
    assert_eq!(
        path,
        format!("_posts/{}-{}.md", today.format("%Y-%m-%d"), slug)
    );
    assert_eq!(
        state.publish_url.as_deref().unwrap(),
        format!(
            "https://octo.github.io/deals-blog/{}/{}/",
            today.format("%Y/%m/%d"),
            slug
        )
    );

    let file = store.file(&path).unwrap();
    assert_eq!(
        file.message,
        "Add blog post: Airpods Pro Deal: Best Wireless Earbuds at $189"
    );
    assert!(file.content.contains("Looking for an airpods pro deal?"));

    assert_eq!(llm.call_count(), 3);
    let prompts = llm.prompts();
    assert!(prompts[0].contains("Apple AirPods Pro 2 for $189"));
    assert!(prompts[2].contains("=== Reviews ==="));
    assert!(prompts[2].contains("\"buy airpods pro\""));
}

/// **Scenario**: Model answers that are not JSON still produce a published post via fallbacks.
#[tokio::test]
async fn unparseable_model_output_uses_fallbacks() {
    let llm = Arc::new(MockLlm::new("Sorry, I can't produce JSON right now."));
    let store = Arc::new(InMemoryContentStore::new());
    let graph = build_graph(services(llm, FixedFeed::airpods(), None, None, store.clone()))
        .compile()
        .unwrap();

    let state = graph.invoke(BlogState::default()).await.unwrap();

    assert_eq!(state.normalized_name.as_deref(), Some("apple"));
    assert_eq!(state.product_category.as_deref(), Some("electronics"));
    assert_eq!(
        state.seo_keywords.clone().unwrap(),
        vec!["best apple", "apple price", "apple review", "buy apple"]
    );
    assert!(state
        .search_results
        .as_deref()
        .unwrap()
        .starts_with("=== Product Information ===\nActive noise cancellation"));
    assert_eq!(
        state.blog_title.as_deref(),
        Some("best apple - Apple AirPods Pro 2 for $189 + free shipping")
    );
    assert!(state
        .blog_content
        .as_deref()
        .unwrap()
        .starts_with("Discover the Apple AirPods Pro 2"));
    assert_eq!(store.paths().len(), 1);
}

/// **Scenario**: Looked-up keywords are seeded with the normalized name.
#[tokio::test]
async fn keyword_lookup_uses_normalized_name() {
    let llm = Arc::new(MockLlm::sequence(vec![NORMALIZE_JSON.into(), BLOG_JSON.into()]));
    let keywords = Arc::new(FixedKeywords::new(&[
        "airpods pro",
        "airpods pro 2",
        "airpods pro price",
        "airpods pro case",
    ]));
    let graph = build_graph(services(
        llm.clone(),
        FixedFeed::airpods(),
        Some(keywords.clone()),
        None,
        Arc::new(InMemoryContentStore::new()),
    ))
    .compile()
    .unwrap();

    let state = graph.invoke(BlogState::default()).await.unwrap();
    assert_eq!(*keywords.seeds.lock().unwrap(), vec!["apple airpods pro"]);
    assert_eq!(state.seo_keywords.unwrap()[3], "airpods pro case");
    assert_eq!(llm.call_count(), 2);
}

/// **Scenario**: Deal "Apple AirPods Pro $199 with Free Shipping" with four looked-up keywords
/// and a search service that is down: generation is skipped, the context falls back to the
/// description and the post carries every keyword under today's UTC date.
#[tokio::test]
async fn looked_up_keywords_reach_published_post() {
    let keywords = ["best airpods", "airpods price", "airpods review", "buy airpods"];
    let llm = Arc::new(MockLlm::sequence(vec![
        r#"{"name": "apple airpods pro", "category": "wireless earbuds"}"#.into(),
        r#"{"title": "Best AirPods Deal", "content": "Searching for the best airpods? The airpods price just dropped to $199. Our airpods review says buy airpods now."}"#.into(),
    ]));
    let store = Arc::new(InMemoryContentStore::new());
    let feed = FixedFeed(Some(FeedItem {
        title: "Apple AirPods Pro $199 with Free Shipping".into(),
        description: "Great deal".into(),
    }));
    let graph = build_graph(services(
        llm.clone(),
        feed,
        Some(Arc::new(FixedKeywords::new(&keywords))),
        with_search(FailingSearch),
        store.clone(),
    ))
    .compile()
    .unwrap();

    let today = Utc::now();
    let state = graph.invoke(BlogState::default()).await.unwrap();

    assert_eq!(llm.call_count(), 2);
    assert_eq!(state.seo_keywords.clone().unwrap(), keywords);
    assert_eq!(
        state.search_results.as_deref(),
        Some("=== Product Information ===\nGreat deal")
    );
    let title = state.blog_title.clone().unwrap();
    assert!(title.to_lowercase().contains("best airpods"), "{}", title);

    let path = state.post_path.clone().unwrap();
    assert!(
        path.starts_with(&format!("_posts/{}-", today.format("%Y-%m-%d"))),
        "{}",
        path
    );
    let body = store.file(&path).unwrap().content;
    for keyword in keywords {
        assert!(body.contains(keyword), "missing {:?} in {}", keyword, body);
        assert!(llm.prompts()[1].contains(keyword));
    }
}

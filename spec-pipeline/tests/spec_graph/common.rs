//! Scripted model answers for the five spec-pipeline calls.

pub const ANALYSIS_JSON: &str = r#"{
  "title": "Smart Product Recommendation Engine",
  "business_goal": "Increase conversion by recommending relevant products from browsing history.",
  "actors": ["Shopper", "Merchandiser", "Data Scientist"],
  "functional_expectations": ["Track product views", "Serve personalized recommendations"],
  "constraints": [
    {"category": "performance", "description": "Recommendations served in under 100 ms"},
    {"category": "privacy", "description": "Browsing history retained for at most 90 days"}
  ]
}"#;

pub const MODULES_JSON: &str = r#"{"modules": [
  {"name": "Event Collector", "responsibility": "Ingest browsing events", "tech_stack": ["Kafka"], "dependencies": []},
  {"name": "Recommendation Service", "responsibility": "Score and rank products", "tech_stack": ["Python", "Redis"], "dependencies": ["Event Collector"]}
]}"#;

pub const SCHEMAS_JSON: &str = r#"{"schemas": [
  {"entity": "browsing_events",
   "fields": [{"name": "id", "type": "UUID", "constraints": "PRIMARY KEY"}, {"name": "product_id", "type": "UUID"}],
   "relationships": ["many-to-one products"],
   "indexes": ["(user_id, viewed_at)"]}
]}"#;

pub const PSEUDOCODE_JSON: &str = r#"{"sections": [
  {"name": "Serve recommendations", "description": "Rank products for a user", "pseudocode": "events = load(user)\nreturn rank(events)"}
]}"#;

pub const REPORT_JSON: &str = r##"{"markdown_content": "# Technical Specification: Smart Product Recommendation Engine\n\n## 1. Executive Summary\nRecommend products.\n\n## 4. Data Architecture\nbrowsing_events table.\n"}"##;

pub fn all_answers() -> Vec<String> {
    [
        ANALYSIS_JSON,
        MODULES_JSON,
        SCHEMAS_JSON,
        PSEUDOCODE_JSON,
        REPORT_JSON,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

//! Model prompts for the content pipeline.

/// Characters of the product description shown in the keyword prompt.
const KEYWORD_DESCRIPTION_CHARS: usize = 200;

/// First `n` characters of `s` (char-boundary safe).
pub fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Extract core product name and category from a deal title.
pub fn normalize_prompt(title: &str) -> String {
    format!(
        r#"You are a JSON-only assistant. Extract the core product name and product category from this title.

Title: {title}

Return ONLY a valid JSON object (no markdown, no explanation):
{{
    "name": "core product name (lowercase, include brand)",
    "category": "product category/type"
}}

NOTE: ALWAYS TRY TO KEEP THE PRODUCT NAME WITHIN 2 TO 4 WORDS

Example:
Title: "Apple AirPods Pro $199 with Free Shipping"
Output: {{"name": "apple airpods pro", "category": "wireless earbuds"}}"#
    )
}

/// Ask for four SEO keywords.
pub fn keyword_generation_prompt(name: &str, category: &str, description: &str) -> String {
    let description = truncate_chars(description, KEYWORD_DESCRIPTION_CHARS);
    format!(
        r#"You are a JSON-only assistant. Generate 4 SEO-optimized keywords for this product.

Product Name: {name}
Category: {category}
Description: {description}

Return ONLY a valid JSON object (no markdown, no explanation):
{{"keywords": ["keyword1", "keyword2", "keyword3", "keyword4"]}}

Focus on: search volume, buyer intent, long-tail variations."#
    )
}

/// Ask for a ~200-word post that uses every keyword.
pub fn blog_generation_prompt(
    title: &str,
    category: &str,
    description: &str,
    keywords: &[String],
    search_results: &str,
) -> String {
    let keyword_list = serde_json::to_string(keywords).unwrap_or_default();
    let count = keywords.len();
    format!(
        r#"You are a JSON-only assistant. Write a 200-word SEO-optimized blog post about this product.

Product: {title}
Category: {category}
Description: {description}

SEO Keywords (MUST use all): {keyword_list}
Research Data:
{search_results}

Requirements:
1. Blog title MUST include one SEO keyword
2. All {count} keywords must appear naturally in the body
3. Exactly 200 words
4. Structure: Introduction → Features/Benefits → Why it's trending → Conclusion
5. Engaging, conversational tone

Return ONLY valid JSON (no markdown, no explanation):
{{
    "title": "Blog title with SEO keyword",
    "content": "200-word blog content"
}}"#
    )
}

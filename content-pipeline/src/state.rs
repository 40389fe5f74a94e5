//! Pipeline A state: one record threaded through the seven nodes.

use flowgraph::FlowError;
use serde::Serialize;

/// Blog pipeline state. Every field starts `None` and is written once by the node noted.
///
/// Nodes read earlier fields through the accessor methods, which fail with
/// `FlowError::MissingField` instead of panicking when a field was never written.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BlogState {
    /// fetch_product
    pub product_title: Option<String>,
    /// fetch_product; HTML stripped.
    pub product_description: Option<String>,
    /// normalize_keyword
    pub normalized_name: Option<String>,
    /// normalize_keyword
    pub product_category: Option<String>,
    /// fetch_seo_keywords; replaced by generate_keywords when fewer than three.
    pub seo_keywords: Option<Vec<String>>,
    /// search_product
    pub search_results: Option<String>,
    /// generate_blog
    pub blog_title: Option<String>,
    /// generate_blog
    pub blog_content: Option<String>,
    /// publish_blog: repository path of the committed file.
    pub post_path: Option<String>,
    /// publish_blog
    pub publish_url: Option<String>,
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, FlowError> {
    value.as_deref().ok_or(FlowError::MissingField(field))
}

impl BlogState {
    pub fn product_title(&self) -> Result<&str, FlowError> {
        required(&self.product_title, "product_title")
    }

    pub fn product_description(&self) -> Result<&str, FlowError> {
        required(&self.product_description, "product_description")
    }

    pub fn normalized_name(&self) -> Result<&str, FlowError> {
        required(&self.normalized_name, "normalized_name")
    }

    pub fn product_category(&self) -> Result<&str, FlowError> {
        required(&self.product_category, "product_category")
    }

    pub fn seo_keywords(&self) -> Result<&[String], FlowError> {
        self.seo_keywords
            .as_deref()
            .ok_or(FlowError::MissingField("seo_keywords"))
    }

    pub fn search_results(&self) -> Result<&str, FlowError> {
        required(&self.search_results, "search_results")
    }

    pub fn blog_title(&self) -> Result<&str, FlowError> {
        required(&self.blog_title, "blog_title")
    }

    pub fn blog_content(&self) -> Result<&str, FlowError> {
        required(&self.blog_content, "blog_content")
    }
}

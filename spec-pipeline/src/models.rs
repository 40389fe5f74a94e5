//! Structured outputs of the five spec-pipeline model calls.
//!
//! Doc comments become field descriptions in the JSON Schema sent with each prompt.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single non-functional constraint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Constraint {
    /// Type of constraint (e.g. performance, scalability, security).
    pub category: String,
    /// Details about the constraint.
    pub description: String,
}

/// Requirement analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BusinessAnalysis {
    /// Short, clear title for the business idea.
    pub title: String,
    /// Core business objective in one sentence.
    pub business_goal: String,
    /// Key users or stakeholders.
    pub actors: Vec<String>,
    /// What the system should do.
    pub functional_expectations: Vec<String>,
    /// Non-functional requirements like performance, scalability, security.
    pub constraints: Vec<Constraint>,
}

/// A system module or component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Module {
    /// Module name.
    pub name: String,
    /// What this module does.
    pub responsibility: String,
    /// Suggested technologies.
    pub tech_stack: Vec<String>,
    /// Other modules this depends on.
    pub dependencies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleDecomposition {
    /// List of system modules.
    pub modules: Vec<Module>,
}

/// Database field definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaField {
    /// Field name.
    pub name: String,
    /// Data type.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Field constraints like NOT NULL, UNIQUE, etc.
    #[serde(default)]
    pub constraints: String,
}

/// Table or collection definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DataSchema {
    /// Table or collection name.
    pub entity: String,
    /// Schema fields.
    pub fields: Vec<SchemaField>,
    /// Relationships with other entities.
    pub relationships: Vec<String>,
    /// Recommended indexes for performance.
    pub indexes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DataSchemas {
    /// List of data schemas.
    pub schemas: Vec<DataSchema>,
}

/// Pseudo-code for one workflow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PseudoCodeSection {
    /// Workflow name.
    pub name: String,
    /// What this workflow does.
    pub description: String,
    /// Step-by-step pseudo-code.
    pub pseudocode: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PseudoCode {
    /// List of pseudo-code sections.
    pub sections: Vec<PseudoCodeSection>,
}

/// Final technical specification document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TechnicalSpecification {
    /// Complete specification in Markdown format.
    pub markdown_content: String,
}

//! # spec-pipeline
//!
//! Pipeline B: turn a free-text business requirement into a Markdown technical
//! specification through five schema-constrained model calls, then save it to
//! `{output_dir}/{sanitized title}/specification.md`.
//!
//! ```text
//! analyze_requirements → decompose_modules → design_schemas
//!     → generate_pseudocode → synthesize_report
//! ```
//!
//! Every model answer must match its schema ([`models`]); any mismatch, model error or
//! write error aborts the run. There are no fallbacks in this pipeline.

pub mod config;
pub mod graph;
pub mod models;
pub mod nodes;
pub mod prompts;
pub mod report;
pub mod state;

pub use config::{SpecConfig, DEFAULT_REQUIREMENT};
pub use graph::build_graph;
pub use models::{
    BusinessAnalysis, Constraint, DataSchema, DataSchemas, Module, ModuleDecomposition,
    PseudoCode, PseudoCodeSection, SchemaField, TechnicalSpecification,
};
pub use report::{sanitize_title, save_report};
pub use state::SpecState;

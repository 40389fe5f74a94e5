//! Pipeline B state.

use std::path::PathBuf;

use flowgraph::FlowError;
use serde::Serialize;

use crate::models::{BusinessAnalysis, DataSchemas, ModuleDecomposition, PseudoCode};

/// Spec pipeline state: the requirement plus one output per node, each written once.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SpecState {
    pub requirement: String,
    /// Copied from `analysis.title`; names the report directory.
    pub title: Option<String>,
    pub analysis: Option<BusinessAnalysis>,
    pub modules: Option<ModuleDecomposition>,
    pub schemas: Option<DataSchemas>,
    pub pseudocode: Option<PseudoCode>,
    pub final_report: Option<String>,
    pub report_path: Option<PathBuf>,
}

fn required<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T, FlowError> {
    value.as_ref().ok_or(FlowError::MissingField(field))
}

impl SpecState {
    pub fn new(requirement: impl Into<String>) -> Self {
        Self {
            requirement: requirement.into(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> Result<&str, FlowError> {
        required(&self.title, "title").map(String::as_str)
    }

    pub fn analysis(&self) -> Result<&BusinessAnalysis, FlowError> {
        required(&self.analysis, "analysis")
    }

    pub fn modules(&self) -> Result<&ModuleDecomposition, FlowError> {
        required(&self.modules, "modules")
    }

    pub fn schemas(&self) -> Result<&DataSchemas, FlowError> {
        required(&self.schemas, "schemas")
    }

    pub fn pseudocode(&self) -> Result<&PseudoCode, FlowError> {
        required(&self.pseudocode, "pseudocode")
    }
}

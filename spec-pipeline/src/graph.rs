//! Pipeline B assembly.

use std::path::PathBuf;
use std::sync::Arc;

use flowgraph::{LlmClient, StateGraph};

use crate::nodes::{
    AnalyzeRequirementsNode, DecomposeModulesNode, DesignSchemasNode, GeneratePseudocodeNode,
    SynthesizeReportNode,
};
use crate::state::SpecState;

/// Builds the uncompiled five-node graph; the report is written under `output_dir`.
pub fn build_graph(llm: Arc<dyn LlmClient>, output_dir: impl Into<PathBuf>) -> StateGraph<SpecState> {
    let mut graph = StateGraph::new();
    graph.add_sequence(vec![
        Arc::new(AnalyzeRequirementsNode::new(llm.clone())),
        Arc::new(DecomposeModulesNode::new(llm.clone())),
        Arc::new(DesignSchemasNode::new(llm.clone())),
        Arc::new(GeneratePseudocodeNode::new(llm.clone())),
        Arc::new(SynthesizeReportNode::new(llm, output_dir)),
    ]);
    graph
}

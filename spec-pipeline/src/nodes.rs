//! Pipeline B nodes. Each makes one schema-constrained model call at a fixed temperature.

mod analyze;
mod decompose;
mod pseudocode;
mod schemas;
mod synthesize;

pub use analyze::AnalyzeRequirementsNode;
pub use decompose::DecomposeModulesNode;
pub use pseudocode::GeneratePseudocodeNode;
pub use schemas::DesignSchemasNode;
pub use synthesize::SynthesizeReportNode;

//! # flowgraph
//!
//! A small, LangGraph-inspired pipeline runner in Rust. One state type flows through an
//! ordered list of nodes: each node receives the state, performs one external action (an HTTP
//! call, an LLM prompt, a file write) and returns the extended state.
//!
//! ## Design Principles
//!
//! - **Single state type**: Each graph uses one state struct (e.g. `BlogState`) that all
//!   nodes read from and write to.
//! - **Nodes own no control flow**: A node returns the new state or an error. The compiled
//!   graph owns sequencing and failure propagation; the first error aborts the run.
//! - **Linear graphs**: Nodes are chained with explicit edges from `START` to `END`; compile
//!   rejects branches, merges and cycles.
//!
//! ## Main Modules
//!
//! - [`graph`]: `StateGraph`, `CompiledStateGraph`, `Node`, `NodeMiddleware`.
//! - [`llm`]: `LlmClient` trait, `MockLlm`, `LlmProvider` and `ChatOpenAI` (feature `openai`).
//! - [`structured`]: `ParseOutcome` (parsed vs. fallback) and schema-constrained completions.
//! - [`message`]: chat `Message` type passed to `LlmClient`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use flowgraph::{FlowError, Node, StateGraph};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter { value: i32 }
//!
//! struct Increment;
//!
//! #[async_trait]
//! impl Node<Counter> for Increment {
//!     fn id(&self) -> &str { "increment" }
//!     async fn run(&self, state: Counter) -> Result<Counter, FlowError> {
//!         Ok(Counter { value: state.value + 1 })
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut graph = StateGraph::<Counter>::new();
//! graph.add_sequence(vec![Arc::new(Increment)]);
//! let compiled = graph.compile().unwrap();
//! let out = compiled.invoke(Counter::default()).await.unwrap();
//! assert_eq!(out.value, 1);
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod structured;

pub use error::FlowError;
pub use graph::{
    CompilationError, CompiledStateGraph, InnerRun, Node, NodeMiddleware, StateGraph, END, START,
};
#[cfg(feature = "openai")]
pub use llm::ChatOpenAI;
pub use llm::{CallOptions, LlmClient, LlmProvider, LlmResponse, MockLlm, ResponseFormat};
pub use message::Message;
pub use structured::{complete_structured, parse_or_fallback, ParseOutcome};

//! State graph: nodes + explicit edges (from → to).
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit (or `add_sequence` for both at once), then
//! `compile` to get a `CompiledStateGraph`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;
use crate::graph::node_middleware::NodeMiddleware;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph: nodes plus explicit edges. No conditional edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge(from, to)` (use
/// `START` and `END` for entry/exit), then `compile()` to obtain an executable graph.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges (from_id, to_id). Compiled graph derives linear execution order from these.
    edges: Vec<(String, String)>,
    middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Default for StateGraph<S>
where
    S: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Send + Sync + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            middleware: None,
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    ///
    /// Returns `&mut Self` for method chaining; use `add_edge` to include it in the chain.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Use `START` for graph entry and `END` for graph exit. Both ids (except
    /// START/END) must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Registers `nodes` under their own `Node::id` and chains them
    /// `START → nodes[0] → … → nodes[n-1] → END` in the given order.
    pub fn add_sequence(&mut self, nodes: Vec<Arc<dyn Node<S>>>) -> &mut Self {
        let mut previous = START.to_string();
        for node in nodes {
            let id = node.id().to_string();
            self.add_node(id.clone(), node);
            self.add_edge(previous, id.clone());
            previous = id;
        }
        self.add_edge(previous, END)
    }

    /// Attaches node middleware; the compiled graph wraps every node run with it.
    pub fn with_middleware(self, middleware: Arc<dyn NodeMiddleware<S>>) -> Self {
        Self {
            middleware: Some(middleware),
            ..self
        }
    }

    /// Builds the executable graph: validates that all edge node ids exist and
    /// edges form a single linear chain from START to END.
    ///
    /// Returns `CompilationError` if any edge references an unknown node or
    /// the chain is invalid. On success, the graph is immutable and ready for `invoke`.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }

        let mut start_edges = self.edges.iter().filter(|(f, _)| f == START).map(|(_, t)| t);
        let first = match (start_edges.next(), start_edges.next()) {
            (Some(first), None) => first.clone(),
            _ => return Err(CompilationError::MissingStart),
        };

        let mut end_edges = self.edges.iter().filter(|(_, t)| t == END).map(|(f, _)| f);
        let expected_last = match (end_edges.next(), end_edges.next()) {
            (Some(last), None) => last.clone(),
            _ => return Err(CompilationError::MissingEnd),
        };

        let froms: Vec<&String> = self
            .edges
            .iter()
            .filter(|(f, _)| f.as_str() != START)
            .map(|(f, _)| f)
            .collect();
        let tos: Vec<&String> = self
            .edges
            .iter()
            .filter(|(_, t)| t.as_str() != END)
            .map(|(_, t)| t)
            .collect();
        if froms.iter().collect::<HashSet<_>>().len() != froms.len() {
            return Err(CompilationError::InvalidChain("duplicate from (branch)".into()));
        }
        if tos.iter().collect::<HashSet<_>>().len() != tos.len() {
            return Err(CompilationError::InvalidChain(
                "duplicate to (merge or branch)".into(),
            ));
        }

        let next_map: HashMap<&str, &str> = self
            .edges
            .iter()
            .filter(|(f, _)| f.as_str() != START)
            .map(|(f, t)| (f.as_str(), t.as_str()))
            .collect();

        let mut edge_order = vec![first.clone()];
        let mut visited = HashSet::from([first.clone()]);
        let mut current = first;
        loop {
            let next = match next_map.get(current.as_str()) {
                Some(n) => n.to_string(),
                None => {
                    return Err(CompilationError::InvalidChain(format!(
                        "chain stops at `{}` before reaching END",
                        current
                    )))
                }
            };
            if next == END {
                if current != expected_last {
                    return Err(CompilationError::InvalidChain(
                        "chain tail does not match the single edge to END".into(),
                    ));
                }
                break;
            }
            if !visited.insert(next.clone()) {
                return Err(CompilationError::InvalidChain("cycle detected".into()));
            }
            edge_order.push(next.clone());
            current = next;
        }

        if edge_order.len() != next_map.len() {
            return Err(CompilationError::InvalidChain(
                "edges not reachable from START".into(),
            ));
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            edge_order,
            middleware: self.middleware,
        })
    }
}

//! Search result type.

use graphtext_ir::{GraphRef, Term};
use serde::{Deserialize, Serialize};

/// A single search match.
///
/// Created per match by a provider and consumed immediately by the query
/// evaluator. Providers yield results in descending score order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Graph the matched node was indexed under.
    pub graph: GraphRef,

    /// The matched node.
    pub node: Term,

    /// Relevance score (higher is more relevant).
    pub score: f64,
}

impl SearchResult {
    pub fn new(graph: GraphRef, node: Term, score: f64) -> Self {
        Self { graph, node, score }
    }
}

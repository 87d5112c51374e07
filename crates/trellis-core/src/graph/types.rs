//! Identifier and record types shared across the graph modules

use serde::Serialize;

/// Node identifier. Assigned sequentially from 0 and doubles as the node's
/// row/column index in the adjacency matrix; deletion is not supported, so
/// the id is stable for the graph's lifetime.
pub type NodeId = usize;

/// Edge identifier: position in the graph's insertion-ordered edge list.
pub type EdgeId = usize;

/// Edge weight. Unsigned, so negative costs are unrepresentable.
pub type Cost = u64;

/// A recorded edge.
///
/// For undirected graphs the endpoints are stored in canonical (low, high)
/// order, matching the single matrix cell that backs the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub destination: NodeId,
    pub cost: Cost,
}

/// Ids returned by a successful edge insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeIds {
    /// One record was stored: a one-way directed edge, or the canonical
    /// record of an undirected edge.
    Single(EdgeId),
    /// Two mirrored records on a directed graph, forward id first.
    Pair(EdgeId, EdgeId),
}

impl EdgeIds {
    /// Id of the source-to-destination record
    pub fn forward(&self) -> EdgeId {
        match self {
            EdgeIds::Single(id) | EdgeIds::Pair(id, _) => *id,
        }
    }
}

/// Outcome of a route query, shaped for serialized output
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    pub source: NodeId,
    pub destination: NodeId,
    /// Ordered node sequence from source to destination inclusive; empty
    /// when the destination is unreachable.
    pub path: Vec<NodeId>,
    /// Summed edge cost along `path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    pub reachable: bool,
}

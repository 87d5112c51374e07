//! Weighted graph over dense adjacency-matrix storage
//!
//! Directedness is fixed at construction. For an undirected graph every edge
//! occupies exactly one matrix cell, indexed (low, high); the mirror cell is
//! implied and never stored, so traversal in either direction resolves to the
//! same record.

use std::fmt;

use crate::error::{Result, TrellisError};
use crate::graph::matrix::AdjMatrix;
use crate::graph::types::{Cost, Edge, EdgeId, EdgeIds, NodeId};

pub struct WeightedGraph {
    directed: bool,
    matrix: AdjMatrix,
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl WeightedGraph {
    /// Create an empty graph: 0 nodes, 0 edges, 0x0 matrix
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            matrix: AdjMatrix::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a node, extending the matrix by one row and one column.
    /// Returns the new node's id. Infallible.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.matrix.push_node();
        self.nodes.push(id);
        id
    }

    /// Add an edge between two existing nodes.
    ///
    /// With `directional` set, a single one-way record is stored (directed
    /// graphs only). Otherwise a directed graph stores a mirrored pair of
    /// records and an undirected graph stores one canonical (low, high)
    /// record. A failing call leaves the graph exactly as it was.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
        cost: Cost,
        directional: bool,
    ) -> Result<EdgeIds> {
        if source == destination {
            return Err(TrellisError::SelfLoop { node: source });
        }
        self.ensure_node(source)?;
        self.ensure_node(destination)?;

        if directional {
            if !self.directed {
                return Err(TrellisError::NotDirected);
            }
            return self.insert(source, destination, cost).map(EdgeIds::Single);
        }

        if self.directed {
            // Mirrored pair: probe both cells up front so a clash on either
            // side leaves the graph untouched.
            if self.matrix.is_set(source, destination) || self.matrix.is_set(destination, source) {
                return Err(TrellisError::EdgeAlreadyExists {
                    source,
                    destination,
                    cost,
                });
            }
            let forward = self.insert(source, destination, cost)?;
            let backward = self.insert(destination, source, cost)?;
            return Ok(EdgeIds::Pair(forward, backward));
        }

        let (low, high) = canonical(source, destination);
        self.insert(low, high, cost).map(EdgeIds::Single)
    }

    /// Ordered node ids reachable from `node` via one edge.
    ///
    /// Scans `node`'s row in increasing column order; for undirected graphs
    /// the lower-indexed rows holding an edge in `node`'s column follow, in
    /// increasing row order. This enumeration order is what breaks ties in
    /// the shortest-path search.
    pub fn neighbours(&self, node: NodeId) -> Result<Vec<NodeId>> {
        self.ensure_node(node)?;

        let mut out: Vec<NodeId> = self
            .matrix
            .row(node)
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|_| col))
            .collect();

        if !self.directed {
            // canonical storage: edges whose higher endpoint is `node` live
            // in the rows of their lower endpoint
            for row in 0..node {
                if self.matrix.is_set(row, node) {
                    out.push(row);
                }
            }
        }

        Ok(out)
    }

    /// Cost of the edge from `source` to `destination`, or `Ok(None)` when
    /// no edge is stored. Absence is not an error; unknown ids are.
    pub fn edge_cost(&self, source: NodeId, destination: NodeId) -> Result<Option<Cost>> {
        self.ensure_node(source)?;
        self.ensure_node(destination)?;

        if self.directed {
            Ok(self.matrix.get(source, destination))
        } else {
            let (low, high) = canonical(source, destination);
            Ok(self.matrix.get(low, high))
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.nodes.len()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn matrix(&self) -> &AdjMatrix {
        &self.matrix
    }

    fn ensure_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(TrellisError::UnknownNode { node })
        }
    }

    /// Store one edge record. Endpoints are validated and, for undirected
    /// graphs, already canonicalized by the caller.
    fn insert(&mut self, source: NodeId, destination: NodeId, cost: Cost) -> Result<EdgeId> {
        if self.matrix.is_set(source, destination) {
            return Err(TrellisError::EdgeAlreadyExists {
                source,
                destination,
                cost,
            });
        }
        self.matrix.set(source, destination, cost);
        let id = self.edges.len();
        self.edges.push(Edge {
            id,
            source,
            destination,
            cost,
        });
        Ok(id)
    }
}

fn canonical(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl fmt::Display for WeightedGraph {
    /// Fixed-width matrix dump: header row of column indices, then one row
    /// per node with `∞` marking absent edges. Debugging aid only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<3} ", "")?;
        for col in 0..self.matrix.width() {
            write!(f, "{:<3} ", col)?;
        }
        writeln!(f)?;

        for row in 0..self.matrix.height() {
            write!(f, "{:<3} ", row)?;
            for cell in self.matrix.row(row) {
                match cell {
                    Some(cost) => write!(f, "{:<3} ", cost)?,
                    None => write!(f, "{:<3} ", '\u{221e}')?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

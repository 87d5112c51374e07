//! Weighted adjacency-matrix graph and path-finding operations
//!
//! - `matrix`: dense square storage
//! - `weighted`: the graph structure and its invariants
//! - `algos`: Dijkstra shortest-path search
//! - `types`: shared identifiers and records

pub mod algos;
pub mod matrix;
pub mod types;
pub mod weighted;

pub use algos::{path_cost, route, shortest_path};
pub use matrix::AdjMatrix;
pub use types::{Cost, Edge, EdgeId, EdgeIds, NodeId, RouteResult};
pub use weighted::WeightedGraph;

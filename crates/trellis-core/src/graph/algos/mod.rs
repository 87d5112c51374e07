//! Graph algorithm implementations

pub mod dijkstra;

pub use dijkstra::{path_cost, route, shortest_path};

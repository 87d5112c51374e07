//! Shared helpers for graph-taking commands

use trellis_core::error::{Result, TrellisError};
use trellis_core::graph::WeightedGraph;

use crate::cli::GraphArgs;

/// Build a graph from CLI construction flags.
///
/// Node ids are 0..`--nodes`; each `--edge` is inserted in argument order,
/// so the resulting edge ids follow the command line.
pub fn build_graph(args: &GraphArgs) -> Result<WeightedGraph> {
    if args.directional && !args.directed {
        return Err(TrellisError::UsageError(
            "--directional requires --directed".to_string(),
        ));
    }

    let mut graph = WeightedGraph::new(args.directed);
    for _ in 0..args.nodes {
        graph.add_node();
    }
    for edge in &args.edge {
        graph.add_edge(edge.source, edge.destination, edge.cost, args.directional)?;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "graph_built"
    );

    Ok(graph)
}

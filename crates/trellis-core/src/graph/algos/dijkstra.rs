//! Single-source shortest paths (Dijkstra)
//!
//! Linear-scan frontier selection over the whole working set, O(n^2) for n
//! nodes. No priority queue: ties must resolve to the first minimum in
//! enumeration order, and callers observe that ordering in the returned
//! paths.

use crate::error::{Result, TrellisError};
use crate::graph::types::{Cost, NodeId, RouteResult};
use crate::graph::weighted::WeightedGraph;

/// Cheapest path from `source` to `destination`, as an ordered node
/// sequence inclusive of both endpoints.
///
/// Runs the full single-source relaxation (no early exit on reaching the
/// destination), then walks predecessors backward from `destination`. An
/// unreachable destination yields an empty path, which is not an error;
/// `source == destination` yields the single-element path. Unknown ids fail
/// with `UnknownNode`.
///
/// Distances track "not yet reached" as `None`, distinct from the matrix's
/// "no edge" cells: any finite candidate beats an unreached node. Edge costs
/// are non-negative by construction.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn shortest_path(
    graph: &WeightedGraph,
    source: NodeId,
    destination: NodeId,
) -> Result<Vec<NodeId>> {
    if !graph.contains(source) {
        return Err(TrellisError::UnknownNode { node: source });
    }
    if !graph.contains(destination) {
        return Err(TrellisError::UnknownNode { node: destination });
    }

    let mut distance: Vec<Option<Cost>> = vec![None; graph.node_count()];
    let mut previous: Vec<Option<NodeId>> = vec![None; graph.node_count()];
    let mut unvisited: Vec<NodeId> = graph.nodes().to_vec();
    distance[source] = Some(0);

    while !unvisited.is_empty() {
        // Linear scan for the cheapest unvisited node. Strict comparison
        // keeps the FIRST minimum in enumeration order, and removal
        // preserves relative order, so ties resolve to the lowest id.
        let mut best = 0;
        for pos in 1..unvisited.len() {
            if closer(distance[unvisited[pos]], distance[unvisited[best]]) {
                best = pos;
            }
        }
        let current = unvisited.remove(best);

        let Some(base) = distance[current] else {
            // remaining nodes are unreachable from the source
            continue;
        };

        for neighbour in graph.neighbours(current)? {
            if !unvisited.contains(&neighbour) {
                continue;
            }
            let Some(cost) = graph.edge_cost(current, neighbour)? else {
                continue;
            };
            let candidate = base + cost;
            if distance[neighbour].is_none_or(|d| candidate < d) {
                distance[neighbour] = Some(candidate);
                previous[neighbour] = Some(current);
            }
        }
    }

    tracing::trace!(?destination, distance = ?distance[destination], "relaxation_complete");

    if source == destination {
        return Ok(vec![source]);
    }
    if previous[destination].is_none() {
        // nothing ever relaxed into the destination
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(node) = current {
        path.push(node);
        current = previous[node];
    }
    path.reverse();
    Ok(path)
}

/// Summed edge cost along `path`.
///
/// `Ok(None)` for the empty path or for a sequence with a missing hop;
/// `Ok(Some(0))` for a single node. Paths produced by [`shortest_path`]
/// always sum cleanly.
pub fn path_cost(graph: &WeightedGraph, path: &[NodeId]) -> Result<Option<Cost>> {
    for &node in path {
        if !graph.contains(node) {
            return Err(TrellisError::UnknownNode { node });
        }
    }
    if path.is_empty() {
        return Ok(None);
    }

    let mut total: Cost = 0;
    for hop in path.windows(2) {
        match graph.edge_cost(hop[0], hop[1])? {
            Some(cost) => total += cost,
            None => return Ok(None),
        }
    }
    Ok(Some(total))
}

/// Run a shortest-path query and package the outcome for output
pub fn route(graph: &WeightedGraph, source: NodeId, destination: NodeId) -> Result<RouteResult> {
    let path = shortest_path(graph, source, destination)?;
    let cost = path_cost(graph, &path)?;
    let reachable = !path.is_empty();
    Ok(RouteResult {
        source,
        destination,
        path,
        cost,
        reachable,
    })
}

/// `a` strictly closer than `b`, with `None` as positive infinity
fn closer(a: Option<Cost>, b: Option<Cost>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

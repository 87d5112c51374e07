//! Demo command
//!
//! Builds the bundled 10-node sample network, prints its adjacency matrix
//! and the answers to a few route queries. Everything here goes through the
//! same public operations the other commands use.

use std::time::Instant;

use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::{route, Cost, NodeId, WeightedGraph};

use crate::cli::Cli;

const SAMPLE_NODES: usize = 10;

const SAMPLE_EDGES: &[(NodeId, NodeId, Cost)] = &[
    (0, 1, 6),
    (0, 3, 4),
    (0, 4, 2),
    (1, 4, 3),
    (1, 6, 5),
    (2, 3, 3),
    (2, 8, 10),
    (3, 4, 1),
    (5, 8, 5),
    (5, 9, 3),
    (5, 6, 6),
    (6, 7, 2),
    (7, 9, 2),
    (8, 9, 9),
];

const SAMPLE_QUERIES: &[(NodeId, NodeId)] = &[(0, 9), (0, 8), (2, 5), (9, 0)];

pub fn execute(cli: &Cli, start: Instant) -> Result<()> {
    let mut graph = WeightedGraph::new(false);
    for _ in 0..SAMPLE_NODES {
        graph.add_node();
    }
    for &(source, destination, cost) in SAMPLE_EDGES {
        graph.add_edge(source, destination, cost, false)?;
    }
    tracing::debug!(elapsed = ?start.elapsed(), "sample_network_built");

    let mut results = Vec::with_capacity(SAMPLE_QUERIES.len());
    for &(from, to) in SAMPLE_QUERIES {
        results.push(route(&graph, from, to)?);
    }

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "cells": graph.matrix().rows(),
                "routes": results,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                print!("{}", graph);
                println!();
            }
            for result in &results {
                let rendered = result
                    .path
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                match result.cost {
                    Some(cost) => println!("{} (cost {})", rendered, cost),
                    None => println!("no route from {} to {}", result.source, result.destination),
                }
            }
        }
    }

    Ok(())
}

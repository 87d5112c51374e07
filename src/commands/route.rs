//! Shortest-route command

use std::time::Instant;

use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::{route, NodeId};

use crate::cli::{Cli, GraphArgs};
use crate::commands::helpers::build_graph;

pub fn execute(cli: &Cli, args: &GraphArgs, from: NodeId, to: NodeId, start: Instant) -> Result<()> {
    let graph = build_graph(args)?;

    let result = route(&graph, from, to)?;
    tracing::debug!(elapsed = ?start.elapsed(), reachable = result.reachable, "route_query");

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => {
            if result.reachable {
                let rendered = result
                    .path
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                if let Some(cost) = result.cost {
                    println!("{} (cost {})", rendered, cost);
                } else {
                    println!("{}", rendered);
                }
            } else if !cli.quiet {
                // unreachable is an answer, not an error
                println!("no route from {} to {}", from, to);
            }
        }
    }

    Ok(())
}

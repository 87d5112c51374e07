//! Adjacency-matrix dump command

use std::time::Instant;

use trellis_core::error::Result;
use trellis_core::format::OutputFormat;

use crate::cli::{Cli, GraphArgs};
use crate::commands::helpers::build_graph;

pub fn execute(cli: &Cli, args: &GraphArgs, start: Instant) -> Result<()> {
    let graph = build_graph(args)?;
    tracing::debug!(elapsed = ?start.elapsed(), "matrix_built");

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "directed": graph.is_directed(),
                "node_count": graph.node_count(),
                "edge_count": graph.edge_count(),
                "cells": graph.matrix().rows(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => print!("{}", graph),
    }

    Ok(())
}

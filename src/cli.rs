//! CLI argument parsing for trellis
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json. Graph-construction flags are shared by the commands that
//! take a graph.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use trellis_core::format::OutputFormat;
use trellis_core::graph::{Cost, NodeId};

/// Trellis - weighted-graph routing CLI
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose diagnostics (debug-level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest route between two nodes
    Route {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source node id
        #[arg(long)]
        from: NodeId,

        /// Destination node id
        #[arg(long)]
        to: NodeId,
    },

    /// Print the adjacency matrix
    Matrix {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Build the bundled sample network and run a few routes
    Demo,
}

/// Graph construction arguments shared by route and matrix
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Number of nodes; ids run 0..COUNT
    #[arg(long, value_name = "COUNT")]
    pub nodes: usize,

    /// Edge triple SRC,DST,COST (can be specified multiple times)
    #[arg(long, value_name = "SRC,DST,COST", action = clap::ArgAction::Append, value_parser = parse_edge)]
    pub edge: Vec<EdgeSpec>,

    /// Build a directed graph
    #[arg(long)]
    pub directed: bool,

    /// Insert the supplied edges one-way (requires --directed)
    #[arg(long)]
    pub directional: bool,
}

/// One `--edge` occurrence, parsed
#[derive(Debug, Clone, Copy)]
pub struct EdgeSpec {
    pub source: NodeId,
    pub destination: NodeId,
    pub cost: Cost,
}

fn parse_edge(s: &str) -> Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected SRC,DST,COST, got '{}'", s));
    }
    let source = parts[0]
        .trim()
        .parse::<NodeId>()
        .map_err(|_| format!("invalid source node id '{}'", parts[0]))?;
    let destination = parts[1]
        .trim()
        .parse::<NodeId>()
        .map_err(|_| format!("invalid destination node id '{}'", parts[1]))?;
    let cost = parts[2]
        .trim()
        .parse::<Cost>()
        .map_err(|_| format!("invalid edge cost '{}'", parts[2]))?;
    Ok(EdgeSpec {
        source,
        destination,
        cost,
    })
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}

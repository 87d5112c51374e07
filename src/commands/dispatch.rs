//! Command dispatch logic for trellis

use std::time::Instant;

use trellis_core::error::{Result, TrellisError};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(TrellisError::UsageError(
            "no command given (see --help)".to_string(),
        )),

        Some(Commands::Route { graph, from, to }) => {
            commands::route::execute(cli, graph, *from, *to, start)
        }

        Some(Commands::Matrix { graph }) => commands::matrix::execute(cli, graph, start),

        Some(Commands::Demo) => commands::demo::execute(cli, start),
    }
}

//! Route command handler for computing paths between trails.

use std::io;

use anyhow::{Context, Result};

use squallywood_cli::messages::describe_route_failure;
use squallywood_cli::output::OutputFormat;
use squallywood_lib::RouteSummary;

use crate::commands::DataSource;

/// Handle the route subcommand.
pub fn handle_route_command(
    source: &DataSource,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let finder = source.load_finder()?;
    let route = finder
        .find_route(from, to)
        .map_err(describe_route_failure)?;

    let summary = RouteSummary::from_route(&route);
    format
        .write_route(&mut io::stdout().lock(), &summary)
        .context("failed to write route")
}

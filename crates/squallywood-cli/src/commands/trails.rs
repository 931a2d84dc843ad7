use std::io;

use anyhow::{Context, Result};

use squallywood_cli::messages::describe_route_failure;
use squallywood_cli::output::OutputFormat;
use squallywood_lib::Error as LibError;

use crate::commands::DataSource;

/// Handle the trails subcommand.
pub fn handle_trails_command(source: &DataSource, format: OutputFormat) -> Result<()> {
    let finder = source.load_finder()?;
    if !finder.is_loaded() {
        return Err(describe_route_failure(LibError::DataNotLoaded));
    }

    let names = finder.list_known_trail_names();
    format
        .write_trails(&mut io::stdout().lock(), &names)
        .context("failed to write trail list")
}

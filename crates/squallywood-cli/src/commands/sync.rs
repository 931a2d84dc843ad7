//! Sync command handler: copy the hosted trail table into the local snapshot.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use squallywood_lib::{resolve_dataset_path, write_snapshot, RestSource};

/// Handle the sync subcommand.
pub fn handle_sync_command(target: Option<&Path>) -> Result<()> {
    let path =
        resolve_dataset_path(target).context("failed to resolve the trail snapshot location")?;
    let source = RestSource::from_env().context("failed to configure the trail backend")?;
    let rows = source
        .fetch_rows()
        .context("failed to fetch the hosted trail table")?;

    write_snapshot(&path, &rows)
        .with_context(|| format!("failed to write trail snapshot to {}", path.display()))?;
    info!(rows = rows.len(), "trail snapshot refreshed");

    println!("Synced {} trails to {}", rows.len(), path.display());
    Ok(())
}

// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod route;
pub mod sync;
pub mod trails;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use squallywood_lib::{
    resolve_dataset_path, Error as LibError, FileSource, RestSource, RouteFinder, TrailSource,
};

/// Where a command reads its trail records from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local JSON snapshot, resolved lazily from the override path.
    Snapshot(Option<PathBuf>),
    /// Live hosted table configured through the environment.
    Backend,
}

impl DataSource {
    pub fn new(data_dir: Option<&Path>, backend: bool) -> Self {
        if backend {
            DataSource::Backend
        } else {
            DataSource::Snapshot(data_dir.map(Path::to_path_buf))
        }
    }

    /// Build a finder and try to populate it.
    ///
    /// A missing snapshot leaves the finder unloaded so queries report that
    /// trail data is not loaded; other failures abort the command.
    pub fn load_finder(&self) -> Result<RouteFinder> {
        let finder = RouteFinder::new();
        let source: Box<dyn TrailSource> = match self {
            DataSource::Snapshot(target) => {
                let path = resolve_dataset_path(target.as_deref())
                    .context("failed to resolve the trail snapshot location")?;
                Box::new(FileSource::new(path))
            }
            DataSource::Backend => Box::new(
                RestSource::from_env().context("failed to configure the trail backend")?,
            ),
        };

        match finder.refresh_from(&*source) {
            Ok(_) => Ok(finder),
            Err(LibError::DatasetNotFound { path }) => {
                warn!(path = %path.display(), "no trail snapshot found");
                Ok(finder)
            }
            Err(err) => Err(err)
                .with_context(|| format!("failed to load trail data from {}", source.describe())),
        }
    }
}

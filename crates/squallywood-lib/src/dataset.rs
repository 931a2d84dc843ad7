use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};
use crate::trail::{TrailRecord, TrailRow};

/// Default filename for the local trail snapshot.
const DATASET_FILENAME: &str = "trails.json";

/// Environment variable overriding the dataset directory or file.
pub const DATA_DIR_ENV: &str = "SQUALLYWOOD_DATA_DIR";

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "squallywood", "squallywood")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve where the trail snapshot lives.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `SQUALLYWOOD_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
///
/// Directories resolve to `trails.json` inside them; paths with an extension
/// are used as-is. The file does not need to exist yet.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(canonical_dataset_path(explicit));
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(canonical_dataset_path(Path::new(&env_path)));
    }

    default_dataset_path()
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }

    path.join(DATASET_FILENAME)
}

/// Load every trail record from a JSON snapshot.
pub fn load_trail_records(path: &Path) -> Result<Vec<TrailRecord>> {
    let rows = crate::source::read_rows(path)?;
    Ok(rows.into_iter().map(TrailRecord::from).collect())
}

/// Write `rows` to `path` as pretty JSON, replacing any existing snapshot.
///
/// The data is written to a temporary file next to the target and then
/// renamed into place so readers never observe a half-written snapshot.
pub fn write_snapshot(path: &Path, rows: &[TrailRow]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let mut temp = NamedTempFile::new_in(&parent)?;
    serde_json::to_writer_pretty(&mut temp, rows)?;
    temp.write_all(b"\n")?;
    temp.flush()?;
    temp.persist(path).map_err(|error| Error::Io(error.error))?;

    info!(rows = rows.len(), path = %path.display(), "wrote trail snapshot");
    Ok(())
}

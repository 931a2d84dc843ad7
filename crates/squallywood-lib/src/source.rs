//! Data-access collaborators that supply trail records.
//!
//! The hosted backend exposes the trail table through a PostgREST-style API.
//! Credentials come from the environment; nothing here embeds a key.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::trail::{TrailRecord, TrailRow};

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "SQUALLYWOOD_BACKEND_URL";
/// Environment variable holding the backend API key.
pub const BACKEND_KEY_ENV: &str = "SQUALLYWOOD_BACKEND_KEY";
/// Environment variable overriding the trail table name.
pub const TRAILS_TABLE_ENV: &str = "SQUALLYWOOD_TRAILS_TABLE";
/// Table holding one row per trail with its downhill slots.
pub const DEFAULT_TRAILS_TABLE: &str = "All_Trails";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything able to produce the current list of trail records.
pub trait TrailSource {
    /// Fetch every trail record. May block on I/O.
    fn fetch_records(&self) -> Result<Vec<TrailRecord>>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Trail records stored as a JSON array of rows on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrailSource for FileSource {
    fn fetch_records(&self) -> Result<Vec<TrailRecord>> {
        crate::dataset::load_trail_records(&self.path)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Read the raw rows of a JSON trail snapshot.
pub fn read_rows(path: &Path) -> Result<Vec<TrailRow>> {
    let contents = fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => Error::DatasetNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(error),
    })?;
    let rows: Vec<TrailRow> = serde_json::from_str(&contents)?;
    debug!(rows = rows.len(), path = %path.display(), "read trail snapshot");
    Ok(rows)
}

/// Connection settings for the hosted trail table.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

impl BackendConfig {
    /// Read settings from `SQUALLYWOOD_BACKEND_URL`, `SQUALLYWOOD_BACKEND_KEY`
    /// and optionally `SQUALLYWOOD_TRAILS_TABLE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base_url = read(BACKEND_URL_ENV).ok_or(Error::MissingConfig {
            variable: BACKEND_URL_ENV,
        })?;
        let api_key = read(BACKEND_KEY_ENV).ok_or(Error::MissingConfig {
            variable: BACKEND_KEY_ENV,
        })?;
        let table = read(TRAILS_TABLE_ENV).unwrap_or_else(|| DEFAULT_TRAILS_TABLE.to_string());

        Ok(Self {
            base_url,
            api_key,
            table,
        })
    }

    /// Endpoint selecting every column of the trail table.
    pub fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }
}

/// Trail records read live from the hosted table.
#[derive(Debug, Clone)]
pub struct RestSource {
    config: BackendConfig,
    client: Client,
}

impl RestSource {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = build_client()?;
        Ok(Self { config, client })
    }

    /// Convenience constructor reading [`BackendConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(BackendConfig::from_env()?)
    }

    /// Fetch the raw rows of the trail table.
    pub fn fetch_rows(&self) -> Result<Vec<TrailRow>> {
        let url = self.config.table_url();
        info!(table = %self.config.table, "fetching trail table");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header("apikey", &self.config.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BackendStatus {
                status,
                table: self.config.table.clone(),
            });
        }

        let rows: Vec<TrailRow> = response.json()?;
        debug!(rows = rows.len(), "received trail rows");
        Ok(rows)
    }
}

impl TrailSource for RestSource {
    fn fetch_records(&self) -> Result<Vec<TrailRecord>> {
        Ok(self
            .fetch_rows()?
            .into_iter()
            .map(TrailRecord::from)
            .collect())
    }

    fn describe(&self) -> String {
        format!("table {} at {}", self.config.table, self.config.base_url)
    }
}

fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(user_agent())
        .build()
        .map_err(Error::Http)
}

fn user_agent() -> String {
    format!("squallywood-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}

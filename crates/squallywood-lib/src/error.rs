use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Squallywood library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a route query arrives before any trail data was published.
    #[error("trail data not loaded")]
    DataNotLoaded,

    /// Raised when a trail name has no entry in the loaded catalog.
    #[error("unknown trail name: {name}{}", format_suggestions(.suggestions))]
    UnknownTrail {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no directed route exists between two known trails.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Trail snapshot could not be located at the resolved path.
    #[error("trail dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the trail dataset")]
    ProjectDirsUnavailable,

    /// Raised when a required backend setting is absent from the environment.
    #[error("missing configuration: set {variable}")]
    MissingConfig { variable: &'static str },

    /// Raised when the hosted trail table answers with a non-success status.
    #[error("backend returned {status} while reading table {table}")]
    BackendStatus {
        status: reqwest::StatusCode,
        table: String,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

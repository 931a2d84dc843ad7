//! Squallywood library entry points.
//!
//! This crate loads the ski trail connectivity table, builds the directed
//! downhill graph, and finds the shortest trail-to-trail route through it.
//! Higher-level consumers (the CLI, app front-ends) should share a single
//! [`RouteFinder`] and only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod finder;
pub mod graph;
pub mod output;
pub mod path;
pub mod source;
pub mod trail;

pub use catalog::TrailCatalog;
pub use dataset::{default_dataset_path, load_trail_records, resolve_dataset_path, write_snapshot};
pub use error::{Error, Result};
pub use finder::RouteFinder;
pub use graph::{build_graph, RouteGraph};
pub use output::{RouteStep, RouteSummary};
pub use path::{find_route, Route};
pub use source::{BackendConfig, FileSource, RestSource, TrailSource};
pub use trail::{TrailRecord, TrailRow};

//! Query-session orchestrator over the most recently loaded trail network.
//!
//! A [`RouteFinder`] is meant to be created once and shared by reference with
//! every consumer. Loading builds a complete graph before publishing it, so a
//! concurrent reader observes either the previous network or the new one.

use std::sync::{PoisonError, RwLock};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{build_graph, RouteGraph};
use crate::path::Route;
use crate::source::TrailSource;
use crate::trail::TrailRecord;

/// Number of similar names attached to an unknown-trail error.
const MAX_SUGGESTIONS: usize = 3;

/// Owner of the currently published [`RouteGraph`].
#[derive(Debug, Default)]
pub struct RouteFinder {
    published: RwLock<Option<RouteGraph>>,
}

impl RouteFinder {
    /// Create a finder with no trail data loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder already holding a network built from `records`.
    pub fn with_records(records: &[TrailRecord]) -> Self {
        let finder = Self::new();
        finder.load_trail_network(records);
        finder
    }

    /// Replace the published network with one built from `records`.
    pub fn load_trail_network(&self, records: &[TrailRecord]) {
        let graph = build_graph(records);
        let trails = graph.catalog().len();
        self.publish(graph);
        info!(trails, "published trail network");
    }

    /// Fetch records from `source` and publish them.
    ///
    /// On failure the previously published network stays in place.
    pub fn refresh_from(&self, source: &dyn TrailSource) -> Result<usize> {
        debug!(source = %source.describe(), "refreshing trail network");
        let records = source.fetch_records()?;
        self.load_trail_network(&records);
        Ok(records.len())
    }

    /// Whether any network has been published.
    pub fn is_loaded(&self) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Snapshot handle to the published graph.
    pub fn graph(&self) -> Option<RouteGraph> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Known trail names in byte-wise order; empty before the first load.
    pub fn list_known_trail_names(&self) -> Vec<String> {
        self.graph()
            .map(|graph| graph.catalog().sorted_names())
            .unwrap_or_default()
    }

    /// Shortest route between two named trails.
    ///
    /// Errors with [`Error::DataNotLoaded`] before the first load,
    /// [`Error::UnknownTrail`] when an endpoint has no entry of its own and
    /// [`Error::RouteNotFound`] when no downhill path connects them.
    pub fn find_route(&self, start: &str, destination: &str) -> Result<Route> {
        let graph = self.graph().ok_or(Error::DataNotLoaded)?;

        for name in [start, destination] {
            if !graph.contains(name) {
                return Err(Error::UnknownTrail {
                    name: name.to_string(),
                    suggestions: graph.catalog().fuzzy_matches(name, MAX_SUGGESTIONS),
                });
            }
        }

        let route = graph
            .find_route(start, destination)
            .ok_or_else(|| Error::RouteNotFound {
                start: start.to_string(),
                goal: destination.to_string(),
            })?;
        debug!(start, destination, hops = route.hop_count(), "found route");
        Ok(route)
    }

    fn publish(&self, graph: RouteGraph) {
        let mut slot = self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(graph);
    }
}

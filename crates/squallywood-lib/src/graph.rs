use std::sync::Arc;

use crate::catalog::TrailCatalog;
use crate::path::{self, Route};
use crate::trail::TrailRecord;

/// Directed trail graph used by the route search.
///
/// Cloning shares the underlying catalog, so a graph can be handed to many
/// readers while a replacement is built elsewhere.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    catalog: Arc<TrailCatalog>,
}

impl RouteGraph {
    /// Wrap an existing catalog.
    pub fn new(catalog: TrailCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Catalog backing this graph.
    pub fn catalog(&self) -> &TrailCatalog {
        &self.catalog
    }

    /// Whether `name` is a known trail (and therefore a valid endpoint).
    pub fn contains(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Return the downhill neighbours of a trail.
    pub fn neighbours(&self, name: &str) -> &[String] {
        self.catalog.neighbours(name)
    }

    /// Shortest route by hop count, or `None` when no route exists or an
    /// endpoint is unknown.
    pub fn find_route(&self, start: &str, destination: &str) -> Option<Route> {
        path::find_route(self, start, destination)
    }
}

/// Build a routing graph from loaded trail records.
pub fn build_graph(records: &[TrailRecord]) -> RouteGraph {
    RouteGraph::new(TrailCatalog::build(records))
}

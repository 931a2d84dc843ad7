use std::collections::HashMap;

use tracing::{debug, warn};

use crate::trail::TrailRecord;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// In-memory adjacency mapping from trail name to its downhill neighbours.
///
/// Neighbour lists keep the slot order of the source record and may contain
/// duplicates or names that have no entry of their own. Those dangling names
/// are dead ends during search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailCatalog {
    connections_by_name: HashMap<String, Vec<String>>,
}

impl TrailCatalog {
    /// Build a catalog from a list of records.
    ///
    /// Later records with a name already seen replace the earlier entry.
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TrailRecord>,
    {
        let mut connections_by_name = HashMap::new();
        for record in records {
            let neighbours = record.connected_trails();
            if let Some(previous) = connections_by_name.insert(record.name.clone(), neighbours) {
                warn!(
                    trail = %record.name,
                    replaced_connections = previous.len(),
                    "duplicate trail name; keeping the later record"
                );
            }
        }

        debug!(trails = connections_by_name.len(), "built trail catalog");
        Self {
            connections_by_name,
        }
    }

    /// Whether `name` has its own entry in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.connections_by_name.contains_key(name)
    }

    /// Downhill neighbours of `name`; empty for unknown names.
    pub fn neighbours(&self, name: &str) -> &[String] {
        self.connections_by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.connections_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections_by_name.is_empty()
    }

    /// All known trail names in byte-wise ascending order.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.connections_by_name.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Known trail names that closely resemble `name`, most similar first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &String)> = self
            .connections_by_name
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

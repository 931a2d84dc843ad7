use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::graph::RouteGraph;

/// Ordered trail names from start to destination, both inclusive.
///
/// Always holds at least one trail; routes are only produced by the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    steps: Vec<String>,
}

impl Route {
    pub(crate) fn from_steps(steps: Vec<String>) -> Self {
        debug_assert!(!steps.is_empty(), "a route holds at least one trail");
        Self { steps }
    }

    /// Trails along the route in travel order.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Number of trail-to-trail transitions.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> &str {
        &self.steps[0]
    }

    pub fn destination(&self) -> &str {
        &self.steps[self.steps.len() - 1]
    }

    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}

/// Find the route with the fewest hops from `start` to `destination`.
///
/// Both endpoints must have their own catalog entry. The search is a
/// breadth-first expansion that carries the path with each queued trail and
/// skips trails already expanded, so self-loops and repeated neighbours are
/// harmless. Among equally short routes the one reached through the earliest
/// neighbour slot wins.
pub fn find_route(graph: &RouteGraph, start: &str, destination: &str) -> Option<Route> {
    if !graph.contains(start) || !graph.contains(destination) {
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, Vec<&str>)> = VecDeque::new();
    queue.push_back((start, vec![start]));

    while let Some((current, path)) = queue.pop_front() {
        if current == destination {
            return Some(Route::from_steps(path.into_iter().map(str::to_string).collect()));
        }

        if !visited.insert(current) {
            continue;
        }

        for neighbour in graph.neighbours(current) {
            if visited.contains(neighbour.as_str()) {
                continue;
            }
            let mut next_path = path.clone();
            next_path.push(neighbour.as_str());
            queue.push_back((neighbour.as_str(), next_path));
        }
    }

    None
}

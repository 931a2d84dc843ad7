use std::fmt::Write;

use serde::Serialize;

use crate::path::Route;

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub hops: usize,
    pub start: String,
    pub destination: String,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary.
    pub fn from_route(route: &Route) -> Self {
        let steps = route
            .steps()
            .iter()
            .enumerate()
            .map(|(index, name)| RouteStep {
                index,
                name: name.clone(),
            })
            .collect();

        Self {
            hops: route.hop_count(),
            start: route.start().to_string(),
            destination: route.destination().to_string(),
            steps,
        }
    }

    /// Render as numbered lines with a downhill marker between steps.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} {}):",
            self.start,
            self.destination,
            self.hops,
            if self.hops == 1 { "hop" } else { "hops" }
        );

        let last = self.steps.len().saturating_sub(1);
        for step in &self.steps {
            if step.index < last {
                let _ = writeln!(buffer, "{}. {} ↓", step.index + 1, step.name);
            } else {
                let _ = writeln!(buffer, "{}. {}", step.index + 1, step.name);
            }
        }
        buffer
    }
}

//! User-facing wording for expected route failures.

use squallywood_lib::Error as RouteError;

/// Convert a library error into the message shown on stderr.
///
/// Expected outcomes (missing data, unknown names, unreachable trails) get a
/// plain sentence; anything else keeps its full error chain.
pub fn describe_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::DataNotLoaded => anyhow::anyhow!(
            "Trail data not loaded. Run `squallywood sync` or pass --data-dir with a trail snapshot."
        ),
        RouteError::UnknownTrail { name, suggestions } => {
            anyhow::anyhow!(format_unknown_trail_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal))
        }
        other => anyhow::Error::new(other),
    }
}

pub fn format_unknown_trail_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown trail '{}'.", name);
    if let [suggestion] = suggestions {
        message.push_str(&format!(" Did you mean '{suggestion}'?"));
    } else if !suggestions.is_empty() {
        let joined = suggestions
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!(" Did you mean one of: {}?", joined));
    }
    message
}

pub fn format_route_not_found_message(start: &str, goal: &str) -> String {
    format!(
        "No route found between {} and {}. Connections only run downhill; try starting from a higher trail.",
        start, goal
    )
}

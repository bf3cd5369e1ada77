//! Subcommand handlers.
//!
//! `main.rs` parses arguments and dispatches here; each module owns one
//! subcommand.

pub mod nearest;
pub mod nodes;
pub mod path;
pub mod route;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use tradelane_lib::{default_graph, CatalogueFile, Error as RouteError, WaypointGraph};

/// Load the waypoint graph, either the built-in catalogue or a JSON override.
pub fn load_graph(catalogue: Option<&Path>) -> Result<WaypointGraph> {
    let Some(path) = catalogue else {
        return Ok(default_graph().clone());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalogue {}", path.display()))?;
    let file: CatalogueFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalogue {}", path.display()))?;
    let graph = file
        .build()
        .with_context(|| format!("invalid catalogue {}", path.display()))?;
    debug!(
        path = %path.display(),
        nodes = graph.len(),
        lanes = graph.edge_count(),
        "loaded waypoint catalogue"
    );
    Ok(graph)
}

/// Turn library lookup failures into user-facing messages.
pub(crate) fn friendly_error(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownNode { name, suggestions } => {
            anyhow::anyhow!(format_unknown_waypoint_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    }
}

pub(crate) fn format_unknown_waypoint_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown waypoint '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_waypoint_message_without_suggestions() {
        assert_eq!(
            format_unknown_waypoint_message("atlantis", &[]),
            "Unknown waypoint 'atlantis'."
        );
    }

    #[test]
    fn unknown_waypoint_message_lists_suggestions() {
        let one = format_unknown_waypoint_message("dubay", &["dubai".to_string()]);
        assert_eq!(one, "Unknown waypoint 'dubay'. Did you mean 'dubai'?");

        let many = format_unknown_waypoint_message(
            "crete",
            &["crete_west".to_string(), "crete_south".to_string()],
        );
        assert!(many.ends_with("Did you mean one of: 'crete_west', 'crete_south'?"));
    }

    #[test]
    fn missing_catalogue_file_is_reported() {
        let err = load_graph(Some(Path::new("/nonexistent/catalogue.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read catalogue"));
    }
}

//! Lane path between two named waypoints.

use anyhow::{Context, Result};

use tradelane_lib::{shortest_path, RouteSummary, WaypointGraph};

use super::friendly_error;
use crate::output::{render_summary, OutputFormat};

/// Resolve both names, run the lane search and print the node sequence.
pub fn handle_path_command(
    graph: &WaypointGraph,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let start = graph.resolve(from).map_err(friendly_error)?;
    let goal = graph.resolve(to).map_err(friendly_error)?;

    let path = shortest_path(graph, start, goal)
        .ok_or_else(|| anyhow::anyhow!("No route found between {} and {}.", from, to))?;

    let summary = RouteSummary::from_node_path(graph, &path).context("failed to summarise path")?;
    render_summary(&summary, format).context("failed to write path output")
}

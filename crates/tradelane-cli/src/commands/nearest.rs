//! Nearest waypoint lookup.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use tradelane_lib::{nearest_with_distance, Coordinate, WaypointGraph};

use crate::output::{write_json, OutputFormat};
use crate::terminal::format_km;

/// Snapping result printed by `nearest`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestReport {
    pub query: Coordinate,
    pub name: String,
    pub position: Coordinate,
    pub distance_km: f64,
}

/// Snap a coordinate onto the closest waypoint.
pub fn nearest_report(graph: &WaypointGraph, at: Coordinate) -> Result<NearestReport> {
    let nearest = nearest_with_distance(graph, at);
    let node = graph
        .node(nearest.id)
        .with_context(|| format!("waypoint {} out of range", nearest.id))?;
    Ok(NearestReport {
        query: at,
        name: node.name.clone(),
        position: node.position,
        distance_km: nearest.distance,
    })
}

pub fn handle_nearest_command(
    graph: &WaypointGraph,
    at: Coordinate,
    format: OutputFormat,
) -> Result<()> {
    let report = nearest_report(graph, at)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match format {
        OutputFormat::Json | OutputFormat::Geojson => write_json(&mut out, &report),
        _ => writeln!(
            out,
            "{} {} ({} from {})",
            report.name,
            report.position,
            format_km(report.distance_km),
            report.query
        ),
    };
    written.context("failed to write nearest output")
}

//! Catalogue listing.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use tradelane_lib::{Coordinate, WaypointGraph};

use crate::output::{write_json, OutputFormat};

#[derive(Debug, Clone, Serialize)]
struct NodeListing<'a> {
    name: &'a str,
    position: Coordinate,
    lanes: Vec<&'a str>,
}

/// Print every waypoint with its lane neighbours, in catalogue order.
pub fn handle_nodes_command(graph: &WaypointGraph, format: OutputFormat) -> Result<()> {
    let listings: Vec<NodeListing<'_>> = graph
        .nodes()
        .iter()
        .map(|node| NodeListing {
            name: &node.name,
            position: node.position,
            lanes: graph
                .neighbours(node.id)
                .iter()
                .filter_map(|edge| graph.name(edge.target))
                .collect(),
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match format {
        OutputFormat::Json | OutputFormat::Geojson => write_json(&mut out, &listings),
        _ => write_listings(&mut out, &listings),
    };
    written.context("failed to write node listing")
}

fn write_listings<W: Write>(out: &mut W, listings: &[NodeListing<'_>]) -> io::Result<()> {
    for listing in listings {
        writeln!(
            out,
            "{:<20} {:>20}  -> {}",
            listing.name,
            listing.position.to_string(),
            listing.lanes.join(", ")
        )?;
    }
    writeln!(out, "{} waypoints", listings.len())
}

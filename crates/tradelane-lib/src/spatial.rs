//! Nearest-node snapping of arbitrary coordinates onto the waypoint graph.
//!
//! The catalogue holds tens of nodes, so a linear haversine scan is used
//! instead of a spatial index. Iteration follows catalogue order and only a
//! strictly smaller distance replaces the current best, which keeps ties
//! deterministic (the earlier node wins).

use crate::coord::{distance, Coordinate};
use crate::graph::{NodeId, WaypointGraph};

/// Waypoint closest to a query coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestNode {
    pub id: NodeId,
    /// Great-circle distance from the query point, in kilometres.
    pub distance: f64,
}

/// Return the waypoint closest to `point`.
pub fn nearest_node(graph: &WaypointGraph, point: Coordinate) -> NodeId {
    nearest_with_distance(graph, point).id
}

/// Return the waypoint closest to `point` together with its distance.
///
/// Never fails: graphs cannot be constructed without nodes.
pub fn nearest_with_distance(graph: &WaypointGraph, point: Coordinate) -> NearestNode {
    let mut best = NearestNode {
        id: 0,
        distance: f64::INFINITY,
    };
    for node in graph.nodes() {
        let d = distance(point, node.position);
        if d < best.distance {
            best = NearestNode {
                id: node.id,
                distance: d,
            };
        }
    }
    best
}

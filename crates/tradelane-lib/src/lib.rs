//! Trade-lane route geometry entry points.
//!
//! This crate turns an origin/destination pair and a service type into a
//! polyline for map rendering: great-circle arcs for air freight, paths
//! snapped onto a curated maritime waypoint graph for sea freight, and
//! direct segments for land and rail. Rendering layers should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod arc;
pub mod catalogue;
pub mod coord;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod spatial;

pub use arc::great_circle_arc;
pub use catalogue::{
    CatalogueFile, WaypointEntry, FALLBACK_OFFSHORE_POINT, MARITIME_LANES, MARITIME_WAYPOINTS,
};
pub use coord::{distance, polyline_length, Coordinate, EARTH_RADIUS_KM};
pub use error::{Error, Result};
pub use graph::{build_waypoint_graph, default_graph, Edge, Node, NodeId, WaypointGraph};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{path_distance, shortest_path};
pub use routing::{
    compose_air_route, compose_sea_route, plan_route, RouteOptions, RouteOutcome, RoutePlan,
    RouteRequest, ServiceType, DEFAULT_ARC_POINTS,
};
pub use spatial::{nearest_node, nearest_with_distance, NearestNode};

/// Great-circle polyline for an air route with `point_count` points.
pub fn compute_great_circle(
    origin: Coordinate,
    dest: Coordinate,
    point_count: usize,
) -> Vec<Coordinate> {
    great_circle_arc(origin, dest, point_count)
}

/// Sea-lane polyline over the built-in maritime graph.
pub fn compute_sea_path(origin: Coordinate, dest: Coordinate) -> Vec<Coordinate> {
    compose_sea_route(default_graph(), origin, dest)
}

/// Polyline for any service type with default options.
pub fn compute_route(service: ServiceType, origin: Coordinate, dest: Coordinate) -> Vec<Coordinate> {
    plan_route(default_graph(), &RouteRequest::new(service, origin, dest)).points
}

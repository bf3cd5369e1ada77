//! Route composition for map rendering.
//!
//! This module provides:
//! - [`ServiceType`] - Transport mode that selects the composition strategy
//! - [`RouteOptions`] - Tunables (arc resolution, offshore fallback point)
//! - [`RouteRequest`] - A single origin/destination request
//! - [`RoutePlan`] - Composed polyline plus metadata
//! - [`plan_route`] - Main entry point for composing routes
//!
//! # Strategy Pattern
//!
//! Each service family is encapsulated in a [`RoutePlanner`]
//! implementation ([`AirPlanner`], [`SeaPlanner`], [`DirectPlanner`]);
//! [`select_planner`] picks one for a request.
//!
//! # Example
//!
//! ```
//! use tradelane_lib::{default_graph, plan_route, Coordinate, RouteRequest, ServiceType};
//!
//! let request = RouteRequest::new(
//!     ServiceType::Sea,
//!     Coordinate::new(35.5138, 35.78),
//!     Coordinate::new(25.2867, 55.3364),
//! );
//! let plan = plan_route(default_graph(), &request);
//! assert_eq!(plan.points.first(), Some(&request.origin));
//! ```

mod planner;

pub use planner::{
    select_planner, AirPlanner, ComposedRoute, DirectPlanner, RoutePlanner, SeaPlanner,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalogue::FALLBACK_OFFSHORE_POINT;
use crate::coord::{polyline_length, Coordinate};
use crate::error::{Error, Result};
use crate::graph::WaypointGraph;

/// Number of points sampled along an air arc unless overridden.
pub const DEFAULT_ARC_POINTS: usize = 100;

/// Transport mode of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Air,
    Sea,
    Land,
    Rail,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Air,
        ServiceType::Sea,
        ServiceType::Land,
        ServiceType::Rail,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::Air => "air",
            ServiceType::Sea => "sea",
            ServiceType::Land => "land",
            ServiceType::Rail => "rail",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        ServiceType::ALL
            .into_iter()
            .find(|service| service.as_str() == normalized)
            .ok_or_else(|| Error::UnknownServiceType {
                value: value.to_string(),
            })
    }
}

/// How a plan's polyline was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Great-circle arc (air).
    Arc,
    /// Snapped onto the waypoint graph (sea).
    Graph,
    /// No lane path existed; routed through the offshore fallback point.
    Fallback,
    /// Straight two-point segment (land, rail).
    Direct,
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteOutcome::Arc => "arc",
            RouteOutcome::Graph => "graph",
            RouteOutcome::Fallback => "fallback",
            RouteOutcome::Direct => "direct",
        };
        f.write_str(value)
    }
}

/// Tunables applied when composing routes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteOptions {
    /// Points sampled along an air arc, endpoints included. Values below two
    /// are treated as two.
    pub arc_points: usize,
    /// Intermediate point used when a sea route has no lane path.
    pub fallback: Coordinate,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            arc_points: DEFAULT_ARC_POINTS,
            fallback: FALLBACK_OFFSHORE_POINT,
        }
    }
}

/// Request to compose a single route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub service: ServiceType,
    pub origin: Coordinate,
    pub dest: Coordinate,
    pub options: RouteOptions,
}

impl RouteRequest {
    pub fn new(service: ServiceType, origin: Coordinate, dest: Coordinate) -> Self {
        Self {
            service,
            origin,
            dest,
            options: RouteOptions::default(),
        }
    }

    /// Override the number of points sampled along air arcs.
    pub fn with_arc_points(mut self, arc_points: usize) -> Self {
        self.options.arc_points = arc_points;
        self
    }
}

/// Composed route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub service: ServiceType,
    pub outcome: RouteOutcome,
    /// Polyline to render; first and last points are the request endpoints.
    pub points: Vec<Coordinate>,
    /// Names of the waypoints traversed, in order (sea routes only).
    pub waypoints: Vec<String>,
    /// Length of the polyline in kilometres.
    pub distance_km: f64,
}

impl RoutePlan {
    /// Number of segments in the polyline.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Compose a route using the strategy for the request's service type.
///
/// Never fails: unreachable lane paths and degenerate arcs degrade to
/// simpler polylines instead of errors.
pub fn plan_route(graph: &WaypointGraph, request: &RouteRequest) -> RoutePlan {
    let planner = select_planner(request.service);
    let composed = planner.compose(graph, request.origin, request.dest, &request.options);

    let waypoints = composed
        .waypoints
        .iter()
        .filter_map(|&id| graph.name(id).map(str::to_string))
        .collect();

    RoutePlan {
        service: request.service,
        outcome: composed.outcome,
        distance_km: polyline_length(&composed.points),
        points: composed.points,
        waypoints,
    }
}

/// Great-circle arc between two points; air routes are never snapped.
pub fn compose_air_route(origin: Coordinate, dest: Coordinate, arc_points: usize) -> Vec<Coordinate> {
    crate::arc::great_circle_arc(origin, dest, arc_points)
}

/// Sea lane path over `graph` with the default offshore fallback.
pub fn compose_sea_route(graph: &WaypointGraph, origin: Coordinate, dest: Coordinate) -> Vec<Coordinate> {
    SeaPlanner
        .compose(graph, origin, dest, &RouteOptions::default())
        .points
}

//! Route composition strategies, one per service family.
//!
//! `select_planner` maps a [`ServiceType`] onto the strategy that shapes its
//! polyline: air routes follow a great-circle arc, sea routes are snapped onto
//! the waypoint graph, and land/rail routes are a direct segment.

use tracing::{debug, warn};

use crate::arc::great_circle_arc;
use crate::coord::Coordinate;
use crate::graph::{NodeId, WaypointGraph};
use crate::path::shortest_path;
use crate::spatial::nearest_with_distance;

use super::{RouteOptions, RouteOutcome, ServiceType};

/// Polyline produced by a planner before it is wrapped into a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedRoute {
    pub outcome: RouteOutcome,
    pub points: Vec<Coordinate>,
    /// Waypoints traversed between the endpoints, empty unless snapped.
    pub waypoints: Vec<NodeId>,
}

/// Trait for route composition strategies.
///
/// Implementations never fail: every strategy returns at least the two
/// caller endpoints, first and last, unchanged.
pub trait RoutePlanner: Send + Sync {
    fn compose(
        &self,
        graph: &WaypointGraph,
        origin: Coordinate,
        dest: Coordinate,
        options: &RouteOptions,
    ) -> ComposedRoute;

    /// Whether this planner reads the waypoint graph.
    fn uses_graph(&self) -> bool {
        false
    }
}

/// Great-circle arc between the endpoints, never snapped to the graph.
#[derive(Debug, Clone, Default)]
pub struct AirPlanner;

impl RoutePlanner for AirPlanner {
    fn compose(
        &self,
        _graph: &WaypointGraph,
        origin: Coordinate,
        dest: Coordinate,
        options: &RouteOptions,
    ) -> ComposedRoute {
        ComposedRoute {
            outcome: RouteOutcome::Arc,
            points: great_circle_arc(origin, dest, options.arc_points),
            waypoints: Vec::new(),
        }
    }
}

/// Sea lane path: endpoints snapped to their nearest waypoints and joined by
/// the shortest lane path, with the caller endpoints kept at both ends.
#[derive(Debug, Clone, Default)]
pub struct SeaPlanner;

impl RoutePlanner for SeaPlanner {
    fn compose(
        &self,
        graph: &WaypointGraph,
        origin: Coordinate,
        dest: Coordinate,
        options: &RouteOptions,
    ) -> ComposedRoute {
        let start = nearest_with_distance(graph, origin);
        let goal = nearest_with_distance(graph, dest);
        debug!(
            start = graph.name(start.id).unwrap_or("<unknown>"),
            start_offset_km = start.distance,
            goal = graph.name(goal.id).unwrap_or("<unknown>"),
            goal_offset_km = goal.distance,
            "snapped sea route endpoints"
        );

        match shortest_path(graph, start.id, goal.id) {
            Some(nodes) => {
                let mut points = Vec::with_capacity(nodes.len() + 2);
                points.push(origin);
                points.extend(nodes.iter().filter_map(|&id| graph.position(id)));
                points.push(dest);
                ComposedRoute {
                    outcome: RouteOutcome::Graph,
                    points,
                    waypoints: nodes,
                }
            }
            None => {
                warn!(
                    start = graph.name(start.id).unwrap_or("<unknown>"),
                    goal = graph.name(goal.id).unwrap_or("<unknown>"),
                    fallback = %options.fallback,
                    "no lane path between snapped waypoints; routing via offshore fallback"
                );
                ComposedRoute {
                    outcome: RouteOutcome::Fallback,
                    points: vec![origin, options.fallback, dest],
                    waypoints: Vec::new(),
                }
            }
        }
    }

    fn uses_graph(&self) -> bool {
        true
    }
}

/// Straight two-point segment used for land and rail services.
#[derive(Debug, Clone, Default)]
pub struct DirectPlanner;

impl RoutePlanner for DirectPlanner {
    fn compose(
        &self,
        _graph: &WaypointGraph,
        origin: Coordinate,
        dest: Coordinate,
        _options: &RouteOptions,
    ) -> ComposedRoute {
        ComposedRoute {
            outcome: RouteOutcome::Direct,
            points: vec![origin, dest],
            waypoints: Vec::new(),
        }
    }
}

/// Select the composition strategy for a service type.
pub fn select_planner(service: ServiceType) -> Box<dyn RoutePlanner> {
    match service {
        ServiceType::Air => Box::new(AirPlanner),
        ServiceType::Sea => Box::new(SeaPlanner),
        ServiceType::Land | ServiceType::Rail => Box::new(DirectPlanner),
    }
}

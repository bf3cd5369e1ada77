//! Route command handler for composing a route between two coordinates.

use anyhow::{Context, Result};
use tracing::info;

use tradelane_lib::{plan_route, Coordinate, RouteRequest, RouteSummary, ServiceType, WaypointGraph};

use crate::output::{render_summary, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub service: ServiceType,
    pub from: Coordinate,
    pub to: Coordinate,
    /// Points sampled along air arcs.
    pub points: Option<usize>,
    /// Override for the offshore point used when no lane path exists.
    pub fallback: Option<Coordinate>,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        let mut request = RouteRequest::new(self.service, self.from, self.to);
        if let Some(points) = self.points {
            request = request.with_arc_points(points);
        }
        if let Some(fallback) = self.fallback {
            request.options.fallback = fallback;
        }
        request
    }
}

/// Compose the requested route and print it.
pub fn handle_route_command(
    graph: &WaypointGraph,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = args.to_request();
    let plan = plan_route(graph, &request);
    info!(
        service = %plan.service,
        outcome = %plan.outcome,
        points = plan.points.len(),
        distance_km = plan.distance_km,
        "route composed"
    );

    let summary = RouteSummary::from_plan(&plan).context("failed to summarise route")?;
    render_summary(&summary, format).context("failed to write route output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradelane_lib::RouteOutcome;

    fn args(service: ServiceType) -> RouteCommandArgs {
        RouteCommandArgs {
            service,
            from: Coordinate::new(35.5138, 35.78),
            to: Coordinate::new(25.2697, 55.2708),
            points: None,
            fallback: None,
        }
    }

    #[test]
    fn request_uses_defaults_without_overrides() {
        let request = args(ServiceType::Air).to_request();
        assert_eq!(request, RouteRequest::new(ServiceType::Air, request.origin, request.dest));
    }

    #[test]
    fn request_applies_overrides() {
        let mut args = args(ServiceType::Sea);
        args.points = Some(7);
        args.fallback = Some(Coordinate::new(1.0, 2.0));
        let request = args.to_request();
        assert_eq!(request.options.arc_points, 7);
        assert_eq!(request.options.fallback, Coordinate::new(1.0, 2.0));

        let plan = plan_route(tradelane_lib::default_graph(), &request);
        assert_eq!(plan.outcome, RouteOutcome::Graph);
    }
}

use std::fmt::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::coord::{distance, Coordinate};
use crate::error::{Error, Result};
use crate::graph::{NodeId, WaypointGraph};
use crate::routing::{RouteOutcome, RoutePlan, ServiceType};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Point along a rendered route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub position: Coordinate,
    /// Waypoint name when the point is a graph node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Distance from the previous point in kilometres (zero for the first).
    pub leg_km: f64,
}

impl RouteStep {
    fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", name, self.position),
            None => self.position.to_string(),
        }
    }
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub service: ServiceType,
    pub outcome: RouteOutcome,
    pub segments: usize,
    pub distance_km: f64,
    pub start: Coordinate,
    pub goal: Coordinate,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with per-point legs.
    ///
    /// For graph-snapped plans the interior points are labelled with their
    /// waypoint names.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        let (Some(&start), Some(&goal)) = (plan.points.first(), plan.points.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let interior_named = plan.outcome == RouteOutcome::Graph
            && plan.waypoints.len() + 2 == plan.points.len();
        let names = |index: usize| {
            if interior_named && index > 0 && index <= plan.waypoints.len() {
                Some(plan.waypoints[index - 1].clone())
            } else {
                None
            }
        };

        Ok(Self {
            service: plan.service,
            outcome: plan.outcome,
            segments: plan.segment_count(),
            distance_km: plan.distance_km,
            start,
            goal,
            steps: build_steps(&plan.points, names),
        })
    }

    /// Summarise a lane path between two named waypoints.
    pub fn from_node_path(graph: &WaypointGraph, path: &[NodeId]) -> Result<Self> {
        let points: Vec<Coordinate> = path.iter().filter_map(|&id| graph.position(id)).collect();
        let (Some(&start), Some(&goal)) = (points.first(), points.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let steps = build_steps(&points, |index| {
            path.get(index)
                .and_then(|&id| graph.name(id))
                .map(str::to_string)
        });

        Ok(Self {
            service: ServiceType::Sea,
            outcome: RouteOutcome::Graph,
            segments: points.len() - 1,
            distance_km: steps.iter().map(|step| step.leg_km).sum(),
            start,
            goal,
            steps,
        })
    }

    /// GeoJSON `Feature` with a `LineString` geometry for map layers.
    ///
    /// GeoJSON orders positions as `[lng, lat]`.
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self
            .steps
            .iter()
            .map(|step| [step.position.lng, step.position.lat])
            .collect();
        let waypoints: Vec<&str> = self
            .steps
            .iter()
            .filter_map(|step| step.name.as_deref())
            .collect();

        json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "service": self.service,
                "outcome": self.outcome,
                "distance_km": self.distance_km,
                "waypoints": waypoints,
            },
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} route: {} -> {} ({} segments, {}, {:.0} km)",
            self.service, self.start, self.goal, self.segments, self.outcome, self.distance_km
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} (+{:.0} km)",
                step.index,
                step.label(),
                step.leg_km
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{}** route _{} → {}_ ({} segments, `{}`, {:.0} km)",
            self.service, self.start, self.goal, self.segments, self.outcome, self.distance_km
        );
        for step in &self.steps {
            match &step.name {
                Some(name) => {
                    let _ = writeln!(
                        buffer,
                        "* {:>2}. **{}** `{}`",
                        step.index, name, step.position
                    );
                }
                None => {
                    let _ = writeln!(buffer, "* {:>2}. `{}`", step.index, step.position);
                }
            }
        }
        buffer
    }
}

fn build_steps(points: &[Coordinate], name_at: impl Fn(usize) -> Option<String>) -> Vec<RouteStep> {
    points
        .iter()
        .enumerate()
        .map(|(index, &position)| RouteStep {
            index,
            position,
            name: name_at(index),
            leg_km: if index == 0 {
                0.0
            } else {
                distance(points[index - 1], position)
            },
        })
        .collect()
}

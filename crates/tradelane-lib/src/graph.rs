use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::catalogue::{MARITIME_LANES, MARITIME_WAYPOINTS};
use crate::coord::{distance, Coordinate};
use crate::error::{Error, Result};

/// Dense index of a waypoint inside a [`WaypointGraph`].
pub type NodeId = usize;

/// Similarity floor for "did you mean" suggestions on unknown names.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Named waypoint belonging to the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub position: Coordinate,
}

/// Edge within the waypoint graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    /// Great-circle distance between both ends, in kilometres.
    pub distance: f64,
}

/// Immutable maritime waypoint graph used by the sea-route composer.
///
/// Adjacency is symmetric and free of self-loops. Cloning is cheap; the
/// adjacency lists are shared.
#[derive(Debug, Clone)]
pub struct WaypointGraph {
    nodes: Arc<Vec<Node>>,
    name_to_id: Arc<HashMap<String, NodeId>>,
    adjacency: Arc<Vec<Vec<Edge>>>,
}

static DEFAULT_GRAPH: Lazy<WaypointGraph> = Lazy::new(|| {
    build_waypoint_graph().expect("built-in maritime catalogue is a valid waypoint graph")
});

/// Shared instance of the built-in maritime graph, constructed on first use.
pub fn default_graph() -> &'static WaypointGraph {
    &DEFAULT_GRAPH
}

/// Build the maritime graph from the built-in catalogue.
pub fn build_waypoint_graph() -> Result<WaypointGraph> {
    WaypointGraph::from_catalogue(MARITIME_WAYPOINTS, MARITIME_LANES)
}

impl WaypointGraph {
    /// Build a graph from named waypoints and undirected lanes.
    ///
    /// Each lane is weighted with the haversine distance between its ends and
    /// inserted into both adjacency lists. Empty catalogues, duplicate names,
    /// non-finite coordinates, dangling lane ends, self-loops and lanes
    /// authored twice are rejected.
    pub fn from_catalogue<S: AsRef<str>>(
        waypoints: &[(S, Coordinate)],
        lanes: &[(S, S)],
    ) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let mut nodes = Vec::with_capacity(waypoints.len());
        let mut name_to_id = HashMap::with_capacity(waypoints.len());
        for (id, (name, position)) in waypoints.iter().enumerate() {
            let name = name.as_ref();
            if !position.is_finite() {
                return Err(Error::NonFiniteCoordinate {
                    name: name.to_string(),
                });
            }
            if name_to_id.insert(name.to_string(), id).is_some() {
                return Err(Error::DuplicateNode {
                    name: name.to_string(),
                });
            }
            nodes.push(Node {
                id,
                name: name.to_string(),
                position: *position,
            });
        }

        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); nodes.len()];
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(lanes.len());
        for (from, to) in lanes {
            let (from, to) = (from.as_ref(), to.as_ref());
            let lookup = |name: &str| {
                name_to_id
                    .get(name)
                    .copied()
                    .ok_or_else(|| Error::UnknownEdgeNode {
                        from: from.to_string(),
                        to: to.to_string(),
                        missing: name.to_string(),
                    })
            };
            let a = lookup(from)?;
            let b = lookup(to)?;
            if a == b {
                return Err(Error::SelfLoop {
                    name: from.to_string(),
                });
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(Error::DuplicateEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }

            let weight = distance(nodes[a].position, nodes[b].position);
            adjacency[a].push(Edge {
                target: b,
                distance: weight,
            });
            adjacency[b].push(Edge {
                target: a,
                distance: weight,
            });
        }

        debug!(
            nodes = nodes.len(),
            lanes = seen.len(),
            "built maritime waypoint graph"
        );

        Ok(Self {
            nodes: Arc::new(nodes),
            name_to_id: Arc::new(name_to_id),
            adjacency: Arc::new(adjacency),
        })
    }

    /// Number of waypoints in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; construction rejects empty catalogues.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected lanes.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Waypoints in catalogue order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.name.as_str())
    }

    pub fn position(&self, id: NodeId) -> Option<Coordinate> {
        self.nodes.get(id).map(|node| node.position)
    }

    /// Lookup a waypoint identifier by its case-sensitive name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    /// Resolve a waypoint name, reporting close matches when it is unknown.
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        self.node_id(name).ok_or_else(|| Error::UnknownNode {
            name: name.to_string(),
            suggestions: self.fuzzy_node_matches(name, 3),
        })
    }

    /// Waypoint names most similar to `name`, best match first.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .map(|node| (strsim::jaro_winkler(&needle, &node.name), node.name.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Return the neighbours for a given waypoint.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the lane between two adjacent waypoints.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.neighbours(a)
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.distance)
    }
}

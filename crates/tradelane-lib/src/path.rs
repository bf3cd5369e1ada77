use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{NodeId, WaypointGraph};

/// Run Dijkstra's algorithm to find the shortest lane path between two
/// waypoints.
///
/// Returns `None` when `goal` is unreachable from `start` or either id is
/// outside the graph. `start == goal` yields `[start]`.
pub fn shortest_path(graph: &WaypointGraph, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
    let node_count = graph.len();
    if start >= node_count || goal >= node_count {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;

        if entry.node == goal {
            return reconstruct_path(&parents, start, goal);
        }

        let current_distance = distances[entry.node];
        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if visited[next] {
                continue;
            }

            let next_cost = current_distance + edge.distance;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// Sum of lane weights along a node path, or `None` if two consecutive
/// nodes are not adjacent.
pub fn path_distance(graph: &WaypointGraph, path: &[NodeId]) -> Option<f64> {
    path.windows(2)
        .map(|pair| graph.edge_weight(pair[0], pair[1]))
        .sum()
}

fn reconstruct_path(parents: &[Option<NodeId>], start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = parents[current]?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinate;

    /// a - b - d is shorter than a - c - d; e is isolated.
    fn diamond() -> WaypointGraph {
        WaypointGraph::from_catalogue(
            &[
                ("a", Coordinate::new(0.0, 0.0)),
                ("b", Coordinate::new(0.5, 1.0)),
                ("c", Coordinate::new(-3.0, 1.0)),
                ("d", Coordinate::new(0.0, 2.0)),
                ("e", Coordinate::new(10.0, 10.0)),
            ],
            &[("a", "b"), ("b", "d"), ("a", "c"), ("c", "d")],
        )
        .expect("valid catalogue")
    }

    fn ids(graph: &WaypointGraph, names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| graph.node_id(n).unwrap()).collect()
    }

    #[test]
    fn picks_the_lighter_branch() {
        let graph = diamond();
        let [a, d] = [graph.node_id("a").unwrap(), graph.node_id("d").unwrap()];
        let path = shortest_path(&graph, a, d).expect("path exists");
        assert_eq!(path, ids(&graph, &["a", "b", "d"]));
    }

    #[test]
    fn same_start_and_goal_is_single_node() {
        let graph = diamond();
        let c = graph.node_id("c").unwrap();
        assert_eq!(shortest_path(&graph, c, c), Some(vec![c]));
    }

    #[test]
    fn unreachable_goal_returns_none() {
        let graph = diamond();
        let [a, e] = [graph.node_id("a").unwrap(), graph.node_id("e").unwrap()];
        assert_eq!(shortest_path(&graph, a, e), None);
        assert_eq!(shortest_path(&graph, e, a), None);
    }

    #[test]
    fn out_of_range_ids_return_none() {
        let graph = diamond();
        assert_eq!(shortest_path(&graph, 0, 99), None);
    }

    #[test]
    fn path_distance_sums_lane_weights() {
        let graph = diamond();
        let path = ids(&graph, &["a", "b", "d"]);
        let expected = graph.edge_weight(path[0], path[1]).unwrap()
            + graph.edge_weight(path[1], path[2]).unwrap();
        assert_eq!(path_distance(&graph, &path), Some(expected));
        assert_eq!(path_distance(&graph, &ids(&graph, &["a", "d"])), None);
        assert_eq!(path_distance(&graph, &ids(&graph, &["a"])), Some(0.0));
    }
}

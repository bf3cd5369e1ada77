use std::collections::{HashSet, VecDeque};

use tradelane_lib::{
    build_waypoint_graph, default_graph, distance, nearest_node, path_distance, shortest_path,
    NodeId, WaypointGraph, MARITIME_LANES, MARITIME_WAYPOINTS,
};

fn reachable_from(graph: &WaypointGraph, start: NodeId) -> HashSet<NodeId> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbours(current) {
            if seen.insert(edge.target) {
                queue.push_back(edge.target);
            }
        }
    }
    seen
}

/// Every simple path between `start` and `goal`, by depth-first enumeration.
fn simple_paths(graph: &WaypointGraph, start: NodeId, goal: NodeId) -> Vec<Vec<NodeId>> {
    fn walk(
        graph: &WaypointGraph,
        current: NodeId,
        goal: NodeId,
        stack: &mut Vec<NodeId>,
        out: &mut Vec<Vec<NodeId>>,
    ) {
        if current == goal {
            out.push(stack.clone());
            return;
        }
        for edge in graph.neighbours(current) {
            if stack.contains(&edge.target) {
                continue;
            }
            stack.push(edge.target);
            walk(graph, edge.target, goal, stack, out);
            stack.pop();
        }
    }

    let mut out = Vec::new();
    walk(graph, start, goal, &mut vec![start], &mut out);
    out
}

#[test]
fn builtin_catalogue_builds() {
    let graph = build_waypoint_graph().expect("built-in catalogue is valid");
    assert_eq!(graph.len(), MARITIME_WAYPOINTS.len());
    assert_eq!(graph.edge_count(), MARITIME_LANES.len());
    assert!(!graph.is_empty());
}

#[test]
fn adjacency_is_symmetric_without_self_loops() {
    let graph = default_graph();
    for node in graph.nodes() {
        for edge in graph.neighbours(node.id) {
            assert_ne!(edge.target, node.id, "self-loop at {}", node.name);
            assert_eq!(
                graph.edge_weight(edge.target, node.id),
                Some(edge.distance),
                "asymmetric lane {} <-> {}",
                node.name,
                graph.name(edge.target).unwrap()
            );
        }
    }
}

#[test]
fn lane_weights_equal_great_circle_distance() {
    let graph = default_graph();
    for node in graph.nodes() {
        for edge in graph.neighbours(node.id) {
            let target = graph.position(edge.target).unwrap();
            assert_eq!(edge.distance, distance(node.position, target));
            assert!(edge.distance > 0.0);
        }
    }
}

#[test]
fn builtin_catalogue_is_connected() {
    let graph = default_graph();
    let latakia = graph.node_id("latakia").unwrap();
    let reachable = reachable_from(graph, latakia);
    let stranded: Vec<&str> = graph
        .nodes()
        .iter()
        .filter(|node| !reachable.contains(&node.id))
        .map(|node| node.name.as_str())
        .collect();
    assert!(stranded.is_empty(), "unreachable waypoints: {stranded:?}");
}

#[test]
fn node_order_follows_catalogue() {
    let graph = default_graph();
    for (index, (name, position)) in MARITIME_WAYPOINTS.iter().enumerate() {
        let node = graph.node(index).unwrap();
        assert_eq!(node.name, *name);
        assert_eq!(node.position, *position);
    }
}

#[test]
fn nearest_node_is_stable_across_calls() {
    let graph = default_graph();
    let probe = tradelane_lib::Coordinate::new(30.0, 30.0);
    let first = nearest_node(graph, probe);
    for _ in 0..10 {
        assert_eq!(nearest_node(graph, probe), first);
    }
}

#[test]
fn single_node_path_is_itself() {
    let graph = default_graph();
    for node in graph.nodes() {
        assert_eq!(shortest_path(graph, node.id, node.id), Some(vec![node.id]));
    }
}

#[test]
fn dijkstra_beats_every_enumerated_path() {
    let graph = default_graph();
    let pairs = [
        ("latakia", "port_said"),
        ("beirut", "alexandria"),
        ("mersin", "haifa"),
        ("iskenderun", "crete_south"),
    ];

    for (from, to) in pairs {
        let start = graph.node_id(from).unwrap();
        let goal = graph.node_id(to).unwrap();
        let best = shortest_path(graph, start, goal).expect("path exists");
        let best_weight = path_distance(graph, &best).expect("consecutive nodes adjacent");

        let candidates = simple_paths(graph, start, goal);
        assert!(!candidates.is_empty());
        for candidate in candidates {
            let weight = path_distance(graph, &candidate).unwrap();
            assert!(
                best_weight <= weight + 1e-9,
                "{from} -> {to}: dijkstra {best_weight} beaten by {weight}"
            );
        }
    }
}

#[test]
fn dijkstra_path_is_symmetric_in_weight() {
    let graph = default_graph();
    let a = graph.node_id("hamburg").unwrap();
    let b = graph.node_id("mumbai").unwrap();
    let forward = shortest_path(graph, a, b).unwrap();
    let backward = shortest_path(graph, b, a).unwrap();
    let fw = path_distance(graph, &forward).unwrap();
    let bw = path_distance(graph, &backward).unwrap();
    assert!((fw - bw).abs() < 1e-6);
}

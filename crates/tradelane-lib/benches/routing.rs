use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use tradelane_lib::{
    build_waypoint_graph, default_graph, plan_route, Coordinate, RouteRequest, ServiceType,
};

const LATAKIA: Coordinate = Coordinate::new(35.5138, 35.78);
const DUBAI: Coordinate = Coordinate::new(25.2867, 55.3364);
const HAMBURG: Coordinate = Coordinate::new(53.54, 9.98);

static SEA_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new(ServiceType::Sea, LATAKIA, DUBAI));
static LONG_SEA_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new(ServiceType::Sea, HAMBURG, DUBAI));
static AIR_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new(ServiceType::Air, LATAKIA, HAMBURG));

fn benchmark_routing(c: &mut Criterion) {
    let graph = default_graph();

    c.bench_function("build_waypoint_graph", |b| {
        b.iter(|| black_box(build_waypoint_graph().expect("catalogue valid").len()));
    });

    c.bench_function("sea_latakia_dubai", |b| {
        let request = &*SEA_REQUEST;
        b.iter(|| black_box(plan_route(graph, request).points.len()));
    });

    c.bench_function("sea_hamburg_dubai", |b| {
        let request = &*LONG_SEA_REQUEST;
        b.iter(|| black_box(plan_route(graph, request).points.len()));
    });

    c.bench_function("air_latakia_hamburg", |b| {
        let request = &*AIR_REQUEST;
        b.iter(|| black_box(plan_route(graph, request).distance_km));
    });
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);

//! Great-circle interpolation between two coordinates.

use tracing::debug;

use crate::coord::Coordinate;

/// Angular separations below this are treated as the same point (radians).
const COINCIDENT_EPSILON: f64 = 1e-12;

/// `sin(d)` below this is treated as an antipodal singularity.
const ANTIPODAL_EPSILON: f64 = 1e-9;

/// Sample `point_count` points along the great circle from `origin` to `dest`.
///
/// The first and last points are exactly `origin` and `dest`. Intermediate
/// points come from spherical linear interpolation between the two unit
/// vectors. Counts below two are raised to two. Coincident endpoints yield
/// copies of `origin`. When the interpolation is undefined (antipodal
/// endpoints) or produces non-finite values, the result degrades to the
/// straight segment `[origin, dest]`.
pub fn great_circle_arc(origin: Coordinate, dest: Coordinate, point_count: usize) -> Vec<Coordinate> {
    let point_count = point_count.max(2);
    match interpolate(origin, dest, point_count) {
        Some(points) => points,
        None => {
            debug!(%origin, %dest, "great-circle interpolation degenerate; using straight segment");
            vec![origin, dest]
        }
    }
}

fn interpolate(origin: Coordinate, dest: Coordinate, point_count: usize) -> Option<Vec<Coordinate>> {
    let a = to_unit_vector(origin);
    let b = to_unit_vector(dest);

    let dot = (a[0] * b[0] + a[1] * b[1] + a[2] * b[2]).clamp(-1.0, 1.0);
    let angle = dot.acos();
    if !angle.is_finite() {
        return None;
    }

    let mut points = Vec::with_capacity(point_count);
    points.push(origin);

    if origin == dest || angle < COINCIDENT_EPSILON {
        points.extend(std::iter::repeat(origin).take(point_count - 2));
        points.push(dest);
        return Some(points);
    }

    let sin_angle = angle.sin();
    if sin_angle.abs() < ANTIPODAL_EPSILON {
        return None;
    }

    let segments = (point_count - 1) as f64;
    for step in 1..point_count - 1 {
        let fraction = step as f64 / segments;
        let wa = ((1.0 - fraction) * angle).sin() / sin_angle;
        let wb = (fraction * angle).sin() / sin_angle;
        let v = [
            wa * a[0] + wb * b[0],
            wa * a[1] + wb * b[1],
            wa * a[2] + wb * b[2],
        ];
        let point = from_vector(v);
        if !point.is_finite() {
            return None;
        }
        points.push(point);
    }

    points.push(dest);
    Some(points)
}

fn to_unit_vector(coord: Coordinate) -> [f64; 3] {
    let lat = coord.lat.to_radians();
    let lng = coord.lng.to_radians();
    [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
}

fn from_vector(v: [f64; 3]) -> Coordinate {
    let lat = v[2].atan2((v[0] * v[0] + v[1] * v[1]).sqrt());
    let lng = v[1].atan2(v[0]);
    Coordinate::new(lat.to_degrees(), lng.to_degrees())
}

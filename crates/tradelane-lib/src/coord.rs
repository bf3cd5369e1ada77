use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinate in decimal degrees.
///
/// Serialises as a `[lat, lng]` pair, the shape map layers expect for
/// polylines. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle surface distance to another coordinate in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance(*self, *other)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lat, coord.lng]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// Parse `LAT,LNG` (whitespace around either number is ignored).
    fn from_str(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinate {
            value: value.to_string(),
        };
        let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
        let coord = Coordinate::new(lat, lng);
        if !coord.is_finite() {
            return Err(invalid());
        }
        Ok(coord)
    }
}

/// Haversine great-circle distance between two coordinates in kilometres.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for near-antipodal pairs.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Total length of a polyline in kilometres.
pub fn polyline_length(points: &[Coordinate]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let latakia = Coordinate::new(35.5138, 35.78);
        assert_eq!(distance(latakia, latakia), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let damascus = Coordinate::new(33.5138, 36.2765);
        let berlin = Coordinate::new(52.52, 13.405);
        assert_eq!(distance(damascus, berlin), distance(berlin, damascus));
    }

    #[test]
    fn distance_matches_known_value() {
        // One degree of latitude along a meridian.
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        let expected = EARTH_RADIUS_KM * 1f64.to_radians();
        assert!((distance(a, b) - expected).abs() < 1e-9);
    }

    #[test]
    fn antipodal_distance_is_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((distance(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn parses_lat_lng_pairs() {
        let coord: Coordinate = "35.5138, 35.78".parse().expect("valid coordinate");
        assert_eq!(coord, Coordinate::new(35.5138, 35.78));
        assert!("35.5".parse::<Coordinate>().is_err());
        assert!("north,east".parse::<Coordinate>().is_err());
        assert!("NaN,1".parse::<Coordinate>().is_err());
    }

    #[test]
    fn serialises_as_lat_lng_array() {
        let coord = Coordinate::new(25.2867, 55.3364);
        let json = serde_json::to_string(&coord).expect("serialise");
        assert_eq!(json, "[25.2867,55.3364]");
        let back: Coordinate = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, coord);
    }

    #[test]
    fn polyline_length_sums_legs() {
        let points = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(2.0, 0.0),
        ];
        let expected = 2.0 * EARTH_RADIUS_KM * 1f64.to_radians();
        assert!((polyline_length(&points) - expected).abs() < 1e-9);
        assert_eq!(polyline_length(&points[..1]), 0.0);
    }
}

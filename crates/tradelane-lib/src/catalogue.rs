//! Built-in maritime waypoint catalogue.
//!
//! Nodes are ports, strait chokepoints and offshore reference points. Lanes
//! are hand-authored so that a straight great-circle hop between the two ends
//! stays at sea; they are not derived from coastline geometry. Lane weights are
//! never authored here, [`crate::graph::WaypointGraph::from_catalogue`] derives
//! them from the haversine distance.

use serde::Deserialize;

use crate::coord::Coordinate;
use crate::error::Result;
use crate::graph::WaypointGraph;

const fn at(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng)
}

/// Named waypoints in catalogue order. The order fixes node indices and the
/// tie-break of nearest-node resolution.
pub const MARITIME_WAYPOINTS: &[(&str, Coordinate)] = &[
    // Levant and eastern Mediterranean
    ("latakia", at(35.5138, 35.78)),
    ("tartus", at(34.8959, 35.8867)),
    ("beirut", at(33.9010, 35.5194)),
    ("haifa", at(32.8250, 35.0000)),
    ("iskenderun", at(36.5900, 36.1700)),
    ("mersin", at(36.7950, 34.6400)),
    ("famagusta_offshore", at(35.1000, 34.3000)),
    ("cyprus_south", at(34.4000, 33.0000)),
    ("alexandria", at(31.2001, 29.9187)),
    ("crete_south", at(34.6000, 24.8000)),
    ("crete_west", at(35.3000, 23.2000)),
    ("kythira_strait", at(36.0500, 22.9500)),
    ("piraeus", at(37.9420, 23.6470)),
    ("dardanelles", at(40.1000, 26.3000)),
    ("istanbul", at(41.0100, 28.9800)),
    // Suez and the Red Sea
    ("port_said", at(31.2653, 32.3019)),
    ("suez", at(29.9668, 32.5498)),
    ("jeddah", at(21.4858, 39.1925)),
    ("port_sudan", at(19.6158, 37.2164)),
    ("bab_el_mandeb", at(12.5833, 43.3333)),
    // Gulf of Aden, Arabian Sea and the Gulf
    ("aden", at(12.7855, 45.0187)),
    ("salalah", at(16.9400, 54.0000)),
    ("ras_al_hadd", at(22.6000, 59.9000)),
    ("muscat", at(23.6300, 58.5700)),
    ("hormuz", at(26.5667, 56.2500)),
    ("bandar_abbas", at(27.1400, 56.2100)),
    ("dubai", at(25.2697, 55.2708)),
    ("jebel_ali", at(25.0110, 55.0610)),
    ("dammam", at(26.5000, 50.2000)),
    ("kuwait", at(29.3500, 47.9200)),
    ("karachi", at(24.8000, 66.9800)),
    ("mumbai", at(18.9400, 72.8400)),
    // Central and western Mediterranean
    ("malta", at(35.8989, 14.5146)),
    ("sicily_channel", at(37.2000, 11.5000)),
    ("genoa", at(44.4056, 8.9463)),
    ("sardinia_south", at(38.6000, 8.9000)),
    ("marseille", at(43.2965, 5.3698)),
    ("barcelona", at(41.3500, 2.1700)),
    ("cabo_de_gata", at(36.6000, -2.0000)),
    ("gibraltar", at(36.0000, -5.6000)),
    // Atlantic seaboard and the North Sea
    ("cape_st_vincent", at(36.9000, -9.2000)),
    ("finisterre", at(43.2000, -9.8000)),
    ("ushant", at(48.6000, -5.6000)),
    ("dover_strait", at(51.0000, 1.4500)),
    ("antwerp", at(51.2700, 4.3500)),
    ("rotterdam", at(51.9500, 4.1400)),
    ("german_bight", at(54.0000, 7.8000)),
    ("hamburg", at(53.5400, 9.9800)),
];

/// Undirected shipping lanes between catalogue waypoints.
pub const MARITIME_LANES: &[(&str, &str)] = &[
    ("latakia", "tartus"),
    ("latakia", "iskenderun"),
    ("latakia", "famagusta_offshore"),
    ("iskenderun", "mersin"),
    ("mersin", "famagusta_offshore"),
    ("tartus", "beirut"),
    ("beirut", "haifa"),
    ("beirut", "famagusta_offshore"),
    ("haifa", "port_said"),
    ("famagusta_offshore", "cyprus_south"),
    ("cyprus_south", "port_said"),
    ("cyprus_south", "crete_south"),
    ("port_said", "alexandria"),
    ("alexandria", "crete_south"),
    ("crete_south", "crete_west"),
    ("crete_west", "kythira_strait"),
    ("kythira_strait", "piraeus"),
    ("piraeus", "dardanelles"),
    ("dardanelles", "istanbul"),
    ("port_said", "suez"),
    ("suez", "jeddah"),
    ("jeddah", "port_sudan"),
    ("jeddah", "bab_el_mandeb"),
    ("port_sudan", "bab_el_mandeb"),
    ("bab_el_mandeb", "aden"),
    ("aden", "salalah"),
    ("aden", "mumbai"),
    ("salalah", "ras_al_hadd"),
    ("salalah", "karachi"),
    ("ras_al_hadd", "muscat"),
    ("ras_al_hadd", "karachi"),
    ("ras_al_hadd", "mumbai"),
    ("karachi", "mumbai"),
    ("muscat", "hormuz"),
    ("hormuz", "bandar_abbas"),
    ("hormuz", "dubai"),
    ("hormuz", "dammam"),
    ("dubai", "jebel_ali"),
    ("dammam", "kuwait"),
    ("crete_west", "malta"),
    ("malta", "sicily_channel"),
    ("sicily_channel", "genoa"),
    ("sicily_channel", "sardinia_south"),
    ("sardinia_south", "marseille"),
    ("sardinia_south", "barcelona"),
    ("sardinia_south", "cabo_de_gata"),
    ("marseille", "genoa"),
    ("marseille", "barcelona"),
    ("barcelona", "cabo_de_gata"),
    ("cabo_de_gata", "gibraltar"),
    ("gibraltar", "cape_st_vincent"),
    ("cape_st_vincent", "finisterre"),
    ("finisterre", "ushant"),
    ("ushant", "dover_strait"),
    ("dover_strait", "antwerp"),
    ("dover_strait", "rotterdam"),
    ("rotterdam", "german_bight"),
    ("german_bight", "hamburg"),
];

/// Offshore point used when no lane path links the snapped endpoints.
///
/// Sits in open water south of Cyprus, which reads plausibly for the
/// Levant-centred corridors the catalogue was curated for.
pub const FALLBACK_OFFSHORE_POINT: Coordinate = at(34.0, 33.0);

/// Alternate waypoint catalogue supplied as data, e.g. a JSON document:
///
/// ```json
/// {
///   "waypoints": [{ "name": "a", "position": [0.0, 0.0] },
///                 { "name": "b", "position": [0.0, 1.0] }],
///   "lanes": [["a", "b"]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogueFile {
    pub waypoints: Vec<WaypointEntry>,
    #[serde(default)]
    pub lanes: Vec<(String, String)>,
}

/// Named waypoint entry of a [`CatalogueFile`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WaypointEntry {
    pub name: String,
    pub position: Coordinate,
}

impl CatalogueFile {
    /// Validate the catalogue and build its graph.
    pub fn build(&self) -> Result<WaypointGraph> {
        let waypoints: Vec<(&str, Coordinate)> = self
            .waypoints
            .iter()
            .map(|w| (w.name.as_str(), w.position))
            .collect();
        let lanes: Vec<(&str, &str)> = self
            .lanes
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        WaypointGraph::from_catalogue(&waypoints, &lanes)
    }
}

use thiserror::Error;

/// Convenient result alias for the trade-lane library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Raised when a waypoint catalogue contains no nodes at all.
    #[error("waypoint catalogue is empty")]
    EmptyGraph,

    /// Raised when two catalogue nodes share the same name.
    #[error("duplicate waypoint name in catalogue: {name}")]
    DuplicateNode { name: String },

    /// Raised when a catalogue node carries a NaN or infinite coordinate.
    #[error("waypoint {name} has a non-finite coordinate")]
    NonFiniteCoordinate { name: String },

    /// Raised when an authored lane references a node missing from the catalogue.
    #[error("lane {from} <-> {to} references unknown waypoint {missing}")]
    UnknownEdgeNode {
        from: String,
        to: String,
        missing: String,
    },

    /// Raised when an authored lane connects a node to itself.
    #[error("lane {name} <-> {name} is a self-loop")]
    SelfLoop { name: String },

    /// Raised when the same lane is authored more than once.
    #[error("lane {from} <-> {to} is authored more than once")]
    DuplicateEdge { from: String, to: String },

    /// Raised when a waypoint name could not be found in the graph.
    #[error("unknown waypoint name: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a service-type tag is not one of air, sea, land or rail.
    #[error("unknown service type: {value} (expected air, sea, land or rail)")]
    UnknownServiceType { value: String },

    /// Raised when a `lat,lng` string cannot be parsed.
    #[error("invalid coordinate '{value}'; expected LAT,LNG in decimal degrees")]
    InvalidCoordinate { value: String },

    /// Raised when a route plan lacks any points.
    #[error("route plan was empty")]
    EmptyRoutePlan,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
